#![deny(unsafe_code)]

use std::path::PathBuf;

use hmpi_model::MetalKey;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("invalid standard for {metal}: {value} (limits must be finite and greater than 0)")]
    InvalidStandard { metal: MetalKey, value: f64 },

    #[error("invalid scale factor {factor} (must be finite and greater than 0)")]
    InvalidScaleFactor { factor: f64 },

    #[error("profile '{profile}' is missing a limit for {metal}")]
    MissingLimit { profile: String, metal: MetalKey },

    #[error("invalid profile '{profile}': {message}")]
    InvalidProfile { profile: String, message: String },

    #[error("unknown standards profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles TOML {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
