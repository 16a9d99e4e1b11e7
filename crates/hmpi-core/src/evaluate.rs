use serde::Serialize;

use hmpi_model::{Category, ConcentrationSample};
use hmpi_standards::StandardsProfile;

use crate::categorize::{
    OverallCategory, categorize_ci, categorize_hei, categorize_hpi, dominant_category,
};
use crate::indices::{HpiDetail, compute_ci, compute_hei, compute_hpi, top_contributors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexCategories {
    pub hpi: Category,
    pub hei: Category,
    pub ci: Category,
    pub overall: OverallCategory,
}

impl IndexCategories {
    pub fn from_values(hpi: f64, hei: f64, ci: f64) -> Self {
        Self {
            hpi: categorize_hpi(hpi),
            hei: categorize_hei(hei),
            ci: categorize_ci(ci),
            overall: dominant_category(hpi, hei, ci),
        }
    }
}

/// All three indices for one sample, with HPI details in descending
/// contribution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResult {
    pub hpi: f64,
    pub hei: f64,
    pub ci: f64,
    pub details: Vec<HpiDetail>,
    pub categories: IndexCategories,
}

impl IndexResult {
    pub fn overall(&self) -> Category {
        self.categories.overall.category
    }

    pub fn top_contributors(&self, n: usize) -> Vec<HpiDetail> {
        top_contributors(&self.details, n)
    }
}

pub fn evaluate(sample: &ConcentrationSample, profile: &StandardsProfile) -> IndexResult {
    let hpi = compute_hpi(sample, profile);
    let hei = compute_hei(sample, profile).hei;
    let ci = compute_ci(sample, profile).ci;
    IndexResult {
        hpi: hpi.hpi,
        hei,
        ci,
        details: hpi.details,
        categories: IndexCategories::from_values(hpi.hpi, hei, ci),
    }
}
