//! Severity thresholds.
//!
//! Each index maps onto [`Category`] through four inclusive upper bounds
//! (Good, Alert, Poor, Critical); anything above the last bound is
//! Hazardous.

use serde::Serialize;

use hmpi_model::{Category, IndexKind};

pub const HPI_THRESHOLDS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];
pub const HEI_THRESHOLDS: [f64; 4] = [10.0, 20.0, 30.0, 40.0];
pub const CI_THRESHOLDS: [f64; 4] = [1.0, 2.0, 3.0, 5.0];

pub const fn thresholds(kind: IndexKind) -> [f64; 4] {
    match kind {
        IndexKind::Hpi => HPI_THRESHOLDS,
        IndexKind::Hei => HEI_THRESHOLDS,
        IndexKind::Ci => CI_THRESHOLDS,
    }
}

pub fn categorize(kind: IndexKind, value: f64) -> Category {
    Category::ALL
        .into_iter()
        .zip(thresholds(kind))
        .find(|(_, upper)| value <= *upper)
        .map_or(Category::Hazardous, |(category, _)| category)
}

pub fn categorize_hpi(hpi: f64) -> Category {
    categorize(IndexKind::Hpi, hpi)
}

pub fn categorize_hei(hei: f64) -> Category {
    categorize(IndexKind::Hei, hei)
}

pub fn categorize_ci(ci: f64) -> Category {
    categorize(IndexKind::Ci, ci)
}

/// The worst category among the three indices and the index that set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallCategory {
    pub category: Category,
    pub index: IndexKind,
}

/// Categorizes all three indices and keeps the most severe. On a tie the
/// earlier index in HPI, HEI, CI order wins.
pub fn dominant_category(hpi: f64, hei: f64, ci: f64) -> OverallCategory {
    let candidates = [
        (IndexKind::Hpi, categorize_hpi(hpi)),
        (IndexKind::Hei, categorize_hei(hei)),
        (IndexKind::Ci, categorize_ci(ci)),
    ];
    let (index, category) = candidates[1..]
        .iter()
        .fold(candidates[0], |worst, candidate| {
            if candidate.1 > worst.1 { *candidate } else { worst }
        });
    OverallCategory { category, index }
}

pub fn categorize_overall(hpi: f64, hei: f64, ci: f64) -> Category {
    dominant_category(hpi, hei, ci).category
}
