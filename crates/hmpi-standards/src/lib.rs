#![deny(unsafe_code)]

pub mod error;
pub mod manifest;
pub mod profile;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::profile::{StandardsProfile, base_standards, scale};
pub use crate::registry::{
    BIS_ACCEPTABLE, BIS_PERMISSIBLE, NamedProfile, StandardsRegistry, WHO, profile_slug,
};
