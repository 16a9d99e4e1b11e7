#![deny(unsafe_code)]

//! On-disk format for user-supplied standards profiles.
//!
//! ```toml
//! default = "WHO"
//!
//! [[profile]]
//! name = "WHO"
//! description = "WHO guideline values"
//! [profile.limits]
//! Cd = 0.003
//! Cr = 0.05
//! # ... all eight metals
//!
//! [[profile]]
//! name = "Relaxed"
//! scale = 1.5
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilesManifest {
    /// Profile selected when none is named explicitly.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default, rename = "profile")]
    pub profiles: Vec<ProfileEntry>,
}

/// A profile is either an explicit limits table or a multiple of the base
/// standards, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub limits: Option<BTreeMap<String, f64>>,
}
