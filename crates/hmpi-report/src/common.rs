//! Shared formatting helpers.

/// Renders `value` with `digits` decimals, or `-` when it is not finite.
pub fn format_number(value: f64, digits: usize) -> String {
    if value.is_finite() {
        format!("{value:.digits$}")
    } else {
        "-".to_string()
    }
}
