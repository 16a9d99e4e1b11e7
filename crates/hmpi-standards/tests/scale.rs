use hmpi_model::MetalKey;
use hmpi_standards::{StandardsError, base_standards, scale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scaled_limits_are_exact_products(factor in 1e-3f64..1e3) {
        let base = base_standards();
        let scaled = scale(&base, factor).expect("positive factor");
        for metal in MetalKey::ALL {
            prop_assert_eq!(scaled.limit(metal), base.limit(metal) * factor);
        }
    }

    #[test]
    fn non_positive_factors_fail(factor in -1e3f64..=0.0) {
        let result = scale(&base_standards(), factor);
        prop_assert!(
            matches!(result, Err(StandardsError::InvalidScaleFactor { .. })),
            "factor {} should be rejected",
            factor
        );
    }
}

#[test]
fn scaling_never_mutates_base() {
    let base = base_standards();
    let _ = scale(&base, 3.0).expect("scale");
    assert_eq!(base, base_standards());
}
