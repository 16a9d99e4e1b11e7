//! Pollution index engine.
//!
//! Pure functions turning a [`ConcentrationSample`](hmpi_model::ConcentrationSample)
//! and a [`StandardsProfile`](hmpi_standards::StandardsProfile) into the
//! Heavy-metal Pollution Index (HPI), Heavy-metal Evaluation Index (HEI) and
//! Contamination Index (CI), plus their severity categories. Nothing here
//! allocates shared state, so every call can run on any thread.

pub mod categorize;
pub mod evaluate;
pub mod indices;

pub use categorize::{
    CI_THRESHOLDS, HEI_THRESHOLDS, HPI_THRESHOLDS, OverallCategory, categorize, categorize_ci,
    categorize_hei, categorize_hpi, categorize_overall, dominant_category, thresholds,
};
pub use evaluate::{IndexCategories, IndexResult, evaluate};
pub use indices::{
    CiResult, HeiResult, HpiDetail, HpiResult, RatioDetail, compute_ci, compute_hei, compute_hpi,
    top_contributors,
};
