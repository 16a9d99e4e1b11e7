use std::cmp::Reverse;

use serde::Serialize;

use hmpi_ingest::DataRow;
use hmpi_model::{ConcentrationUnit, MetalKey, MetalMap};
use hmpi_standards::StandardsProfile;

/// Rows whose parsed concentration of one metal is above its limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exceedance {
    pub metal: MetalKey,
    pub count: usize,
    /// `count / total_rows * 100`, or 0 for an empty table.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceedanceReport {
    pub total_rows: usize,
    pub per_metal: MetalMap<Exceedance>,
}

impl ExceedanceReport {
    pub fn get(&self, metal: MetalKey) -> &Exceedance {
        &self.per_metal[metal]
    }

    /// Metals by descending count; equal counts keep display order.
    pub fn ranked(&self) -> Vec<Exceedance> {
        let mut ranked: Vec<Exceedance> = self.per_metal.values().copied().collect();
        ranked.sort_by_key(|exceedance| Reverse(exceedance.count));
        ranked
    }
}

/// Counts rows where `Mi / Si > 1`. Blank and unparseable cells never count,
/// but every row counts toward the percentage denominator.
pub fn exceedance_counts<'a, I>(
    rows: I,
    unit: ConcentrationUnit,
    profile: &StandardsProfile,
) -> ExceedanceReport
where
    I: IntoIterator<Item = &'a DataRow>,
{
    let mut counts: MetalMap<usize> = MetalMap::default();
    let mut total_rows = 0usize;
    for row in rows {
        total_rows += 1;
        for metal in MetalKey::ALL {
            if let Some(value) = row.value_mg(metal, unit)
                && value / profile.limit(metal) > 1.0
            {
                counts[metal] += 1;
            }
        }
    }
    let per_metal = counts.map(|metal, count| Exceedance {
        metal,
        count: *count,
        percentage: if total_rows > 0 {
            *count as f64 / total_rows as f64 * 100.0
        } else {
            0.0
        },
    });
    ExceedanceReport {
        total_rows,
        per_metal,
    }
}
