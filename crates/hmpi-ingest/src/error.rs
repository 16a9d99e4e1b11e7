use std::path::PathBuf;

use thiserror::Error;

use hmpi_model::MetalKey;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The header row lacks required columns; no rows are produced.
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    /// A metal cell that is not a non-negative decimal, in strict mode only.
    #[error("invalid {column} value '{value}' on line {line}")]
    InvalidCell {
        line: u64,
        column: MetalKey,
        value: String,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
