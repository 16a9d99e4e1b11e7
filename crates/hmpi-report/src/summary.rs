use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use hmpi_aggregate::{
    Exceedance, IndexedRow, average_by_metal, category_distribution, exceedance_counts, summarize,
};
use hmpi_ingest::DataRow;
use hmpi_model::{Category, ConcentrationUnit, MetalMap};
use hmpi_standards::NamedProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Dataset-level figures for one indexed table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub rows: usize,
    pub unit: ConcentrationUnit,
    pub profile: String,
    /// Mean concentration per metal in mg/L over parsed cells.
    pub averages_mg_l: MetalMap<f64>,
    pub hpi_avg: f64,
    pub hei_avg: f64,
    pub ci_max: f64,
    /// Highest exceedance count first.
    pub exceedances: Vec<Exceedance>,
    pub categories: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl ReportSummary {
    /// `indexed` must be the indexed form of `rows` under `unit` and
    /// `profile`.
    pub fn build(
        rows: &[DataRow],
        indexed: &[IndexedRow<'_>],
        unit: ConcentrationUnit,
        profile: &NamedProfile,
    ) -> Self {
        let overall = summarize("All", indexed);
        let categories = category_distribution(indexed)
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        Self {
            rows: rows.len(),
            unit,
            profile: profile.name.clone(),
            averages_mg_l: average_by_metal(rows, unit),
            hpi_avg: overall.hpi.mean,
            hei_avg: overall.hei.mean,
            ci_max: overall.ci.max,
            exceedances: exceedance_counts(rows, unit, &profile.profile).ranked(),
            categories,
            generated_at: None,
        }
    }

    /// Stamps the summary with the current UTC time.
    pub fn with_timestamp(mut self) -> Self {
        self.generated_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize report summary")
    }
}

pub fn write_summary_json(path: &Path, summary: &ReportSummary) -> Result<()> {
    let json = summary.to_json()?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
