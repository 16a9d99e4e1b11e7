use thiserror::Error;

use crate::metal::MetalKey;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown metal: {0}")]
    UnknownMetal(String),
    #[error("unknown concentration unit: {0}")]
    UnknownUnit(String),
    #[error("invalid concentration for {metal}: {value} (expected a non-negative value up to 1e9)")]
    InvalidConcentration { metal: MetalKey, value: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
