use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use hmpi_ingest::DataRow;
use hmpi_model::{ConcentrationUnit, MetalKey};

/// Key used for rows whose grouping field is blank.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Items sharing a grouping key, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup<'a, K, T = DataRow> {
    pub key: K,
    pub rows: Vec<&'a T>,
}

/// Stable partition of `items` by `key_fn`.
///
/// Groups appear in order of their first item; items keep source order
/// within each group.
pub fn group_by<'a, T, K, F, I>(items: I, mut key_fn: F) -> Vec<RowGroup<'a, K, T>>
where
    I: IntoIterator<Item = &'a T>,
    T: 'a,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<RowGroup<'a, K, T>> = Vec::new();
    for item in items {
        let key = key_fn(item);
        match positions.get(&key).copied() {
            Some(index) => groups[index].rows.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(RowGroup {
                    key,
                    rows: vec![item],
                });
            }
        }
    }
    tracing::debug!(groups = groups.len(), "grouped rows");
    groups
}

/// Trimmed grouping label; blank values fall under [`UNKNOWN_GROUP`].
pub fn group_label(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_GROUP.to_string()
    } else {
        trimmed.to_string()
    }
}

/// District label qualified by its state, so same-named districts in
/// different states stay apart.
pub fn district_label(state: &str, district: &str) -> String {
    format!("{}, {}", group_label(district), group_label(state))
}

pub fn group_by_state<'a, I>(rows: I) -> Vec<RowGroup<'a, String>>
where
    I: IntoIterator<Item = &'a DataRow>,
{
    group_by(rows, |row: &DataRow| group_label(&row.state))
}

/// Groups by `(state, district)`; keys come from [`district_label`].
pub fn group_by_district<'a, I>(rows: I) -> Vec<RowGroup<'a, String>>
where
    I: IntoIterator<Item = &'a DataRow>,
{
    group_by(rows, |row: &DataRow| district_label(&row.state, &row.district))
}

/// Mean mg/L concentration of one metal within a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean_mg: f64,
    /// Rows with a parsed value for the metal.
    pub samples: usize,
}

/// Ranks groups by mean concentration of `metal`, highest first.
///
/// Groups without any parsed value rank with a mean of 0. The sort is stable,
/// so equal means keep group order. `limit` keeps only the first N.
pub fn rank_groups_by_metal<K: Clone>(
    groups: &[RowGroup<'_, K>],
    metal: MetalKey,
    unit: ConcentrationUnit,
    limit: Option<usize>,
) -> Vec<GroupMean<K>> {
    let mut ranked: Vec<GroupMean<K>> = groups
        .iter()
        .map(|group| {
            let (sum, samples) = group
                .rows
                .iter()
                .filter_map(|row| row.value_mg(metal, unit))
                .fold((0.0, 0usize), |(sum, n), value| (sum + value, n + 1));
            GroupMean {
                key: group.key.clone(),
                mean_mg: if samples > 0 { sum / samples as f64 } else { 0.0 },
                samples,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.mean_mg.partial_cmp(&a.mean_mg).unwrap_or(Ordering::Equal));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
