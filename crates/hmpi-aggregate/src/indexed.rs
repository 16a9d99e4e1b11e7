use hmpi_core::{IndexCategories, evaluate};
use hmpi_ingest::DataRow;
use hmpi_model::{Category, ConcentrationSample, ConcentrationUnit, MetalMap};
use hmpi_standards::StandardsProfile;

/// A source row with its concentrations in mg/L and its index summary.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRow<'a> {
    pub row: &'a DataRow,
    /// Parsed readings converted to mg/L; `None` for blank or unparseable
    /// cells.
    pub concentrations_mg: MetalMap<Option<f64>>,
    pub hpi: f64,
    pub hei: f64,
    pub ci: f64,
    pub categories: IndexCategories,
}

impl IndexedRow<'_> {
    pub fn overall(&self) -> Category {
        self.categories.overall.category
    }
}

/// Converts each row to mg/L and evaluates it against `profile`.
///
/// Output order is input order.
pub fn to_indexed_rows<'a>(
    rows: &'a [DataRow],
    unit: ConcentrationUnit,
    profile: &StandardsProfile,
) -> Vec<IndexedRow<'a>> {
    let indexed: Vec<IndexedRow<'a>> = rows
        .iter()
        .map(|row| {
            let concentrations_mg = row.concentrations_mg(unit);
            let sample = ConcentrationSample::from_readings(&concentrations_mg);
            let result = evaluate(&sample, profile);
            IndexedRow {
                row,
                concentrations_mg,
                hpi: result.hpi,
                hei: result.hei,
                ci: result.ci,
                categories: result.categories,
            }
        })
        .collect();
    tracing::debug!(rows = indexed.len(), unit = %unit, "computed row indices");
    indexed
}

/// Row count per overall category, in severity order with every category
/// present.
pub fn category_distribution(rows: &[IndexedRow<'_>]) -> Vec<(Category, usize)> {
    let mut counts = [0usize; 5];
    for row in rows {
        counts[usize::from(row.overall().rank())] += 1;
    }
    Category::ALL.into_iter().zip(counts).collect()
}
