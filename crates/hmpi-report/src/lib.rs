//! Report output for indexed water-quality datasets.
//!
//! - **Indexed CSV**: the 13 input columns as uploaded plus `HPI,HEI,CI`
//! - **Report summary**: dataset-level figures serialized as JSON for
//!   narrative and dashboard consumers
//! - **Number formatting**: fixed-decimal display at the presentation edge

mod common;
mod export;
mod summary;

pub use common::format_number;
pub use export::{EXPORT_COLUMNS, write_indexed_csv, write_indexed_csv_file};
pub use summary::{CategoryCount, ReportSummary, write_summary_json};
