use std::path::PathBuf;

use hmpi_cli::pipeline::ReportData;
use hmpi_core::IndexResult;
use hmpi_model::ConcentrationSample;

#[derive(Debug)]
pub struct CalcResult {
    pub profile: String,
    pub sample: ConcentrationSample,
    pub result: IndexResult,
    pub top: usize,
}

#[derive(Debug)]
pub struct ReportResult {
    pub input: PathBuf,
    pub data: ReportData,
    pub output: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}
