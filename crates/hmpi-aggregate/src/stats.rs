//! Descriptive statistics over measurement rows.

use serde::Serialize;

use hmpi_ingest::DataRow;
use hmpi_model::{ConcentrationUnit, MetalKey, MetalMap};

use crate::indexed::IndexedRow;

/// Arithmetic mean per metal in mg/L over rows with a parsed value.
///
/// A metal without any parsed value averages to 0.
pub fn average_by_metal<'a, I>(rows: I, unit: ConcentrationUnit) -> MetalMap<f64>
where
    I: IntoIterator<Item = &'a DataRow>,
{
    let mut sums: MetalMap<(f64, usize)> = MetalMap::default();
    for row in rows {
        for metal in MetalKey::ALL {
            if let Some(value) = row.value_mg(metal, unit) {
                let (sum, n) = &mut sums[metal];
                *sum += value;
                *n += 1;
            }
        }
    }
    sums.map(|_, (sum, n)| if *n > 0 { sum / *n as f64 } else { 0.0 })
}

/// Summary of a non-empty set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Descriptive {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1); `None` below two values.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

pub fn describe(values: &[f64]) -> Option<Descriptive> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = (count > 1).then(|| {
        let squares: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    });
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    Some(Descriptive {
        count,
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
    })
}

/// Mean and maximum of one index across a group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IndexSpread {
    pub mean: f64,
    pub max: f64,
}

/// Read-only rollup for a grouping key (state, district, or whole dataset).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub key: String,
    pub rows: usize,
    /// Per-metal statistics in mg/L; `None` when no row has a parsed value.
    pub metals: MetalMap<Option<Descriptive>>,
    pub hpi: IndexSpread,
    pub hei: IndexSpread,
    pub ci: IndexSpread,
}

/// Rolls up indexed rows. Empty input yields zero spreads and no metal
/// statistics.
pub fn summarize<'a, 'b, I>(key: &str, rows: I) -> AggregateStats
where
    'a: 'b,
    I: IntoIterator<Item = &'b IndexedRow<'a>>,
{
    let mut values: MetalMap<Vec<f64>> = MetalMap::default();
    let mut count = 0usize;
    let mut sums = [0.0f64; 3];
    let mut maxes = [0.0f64; 3];
    for row in rows {
        count += 1;
        for (metal, value) in row.concentrations_mg.iter() {
            if let Some(value) = value {
                values[metal].push(*value);
            }
        }
        for (slot, value) in [row.hpi, row.hei, row.ci].into_iter().enumerate() {
            sums[slot] += value;
            maxes[slot] = maxes[slot].max(value);
        }
    }
    let spread = |slot: usize| IndexSpread {
        mean: if count > 0 { sums[slot] / count as f64 } else { 0.0 },
        max: maxes[slot],
    };
    AggregateStats {
        key: key.to_string(),
        rows: count,
        metals: values.map(|_, values| describe(values)),
        hpi: spread(0),
        hei: spread(1),
        ci: spread(2),
    }
}
