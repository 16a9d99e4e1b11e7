pub mod category;
pub mod error;
pub mod metal;
pub mod sample;
pub mod unit;

pub use category::{Category, IndexKind};
pub use error::{ModelError, Result};
pub use metal::{MetalKey, MetalMap};
pub use sample::{ConcentrationSample, MAX_CONCENTRATION, is_valid_concentration};
pub use unit::ConcentrationUnit;
