//! Dataset aggregation over parsed measurement tables.
//!
//! Every function here is a pure, single pass over its input (plus a sort
//! where an order or a median is required) and keeps source row order.

pub mod exceedance;
pub mod grouping;
pub mod indexed;
pub mod stats;

pub use exceedance::{Exceedance, ExceedanceReport, exceedance_counts};
pub use grouping::{
    GroupMean, RowGroup, UNKNOWN_GROUP, district_label, group_by, group_by_district, group_by_state,
    group_label, rank_groups_by_metal,
};
pub use indexed::{IndexedRow, category_distribution, to_indexed_rows};
pub use stats::{AggregateStats, Descriptive, IndexSpread, average_by_metal, describe, summarize};
