//! Severity categories shared by every pollution index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a pollution index, ordered from best to worst.
///
/// The derived `Ord` follows declaration order, so `max()` over a set of
/// categories yields the most severe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Alert,
    Poor,
    Critical,
    Hazardous,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Good,
        Category::Alert,
        Category::Poor,
        Category::Critical,
        Category::Hazardous,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Alert => "Alert",
            Category::Poor => "Poor",
            Category::Critical => "Critical",
            Category::Hazardous => "Hazardous",
        }
    }

    /// Display colour as a hex RGB string.
    pub const fn color(self) -> &'static str {
        match self {
            Category::Good => "#22c55e",
            Category::Alert => "#eab308",
            Category::Poor => "#f97316",
            Category::Critical => "#ef4444",
            Category::Hazardous => "#991b1b",
        }
    }

    /// Severity rank, 0 for `Good` up to 4 for `Hazardous`.
    pub const fn rank(self) -> u8 {
        match self {
            Category::Good => 0,
            Category::Alert => 1,
            Category::Poor => 2,
            Category::Critical => 3,
            Category::Hazardous => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three pollution indices computed per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    /// Heavy-metal Pollution Index.
    Hpi,
    /// Heavy-metal Evaluation Index.
    Hei,
    /// Contamination Index.
    Ci,
}

impl IndexKind {
    /// Precedence order used when two indices share the worst category.
    pub const ALL: [IndexKind; 3] = [IndexKind::Hpi, IndexKind::Hei, IndexKind::Ci];

    pub const fn name(self) -> &'static str {
        match self {
            IndexKind::Hpi => "HPI",
            IndexKind::Hei => "HEI",
            IndexKind::Ci => "CI",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
