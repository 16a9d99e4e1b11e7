#![deny(unsafe_code)]

//! Concentration limits per metal.
//!
//! A [`StandardsProfile`] can only be built through checked constructors, so
//! every limit it holds is finite and strictly positive. Index computations
//! divide by these limits and rely on that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use hmpi_model::{MetalKey, MetalMap};

use crate::error::StandardsError;

/// Reference drinking-water limit for a metal, in mg/L.
const fn base_limit(metal: MetalKey) -> f64 {
    match metal {
        MetalKey::Cd => 0.003,
        MetalKey::Cr => 0.05,
        // Health-based limit; the aesthetic limit is higher.
        MetalKey::Cu => 0.05,
        MetalKey::Pb => 0.01,
        MetalKey::Mn => 0.1,
        MetalKey::Ni => 0.02,
        MetalKey::Fe => 0.3,
        MetalKey::Zn => 5.0,
    }
}

/// Immutable mapping from each metal to its regulatory limit in mg/L.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct StandardsProfile {
    limits: MetalMap<f64>,
}

impl StandardsProfile {
    /// Validates and wraps a full set of limits.
    pub fn new(limits: MetalMap<f64>) -> Result<Self, StandardsError> {
        for (metal, value) in limits.iter() {
            if !is_valid_limit(*value) {
                return Err(StandardsError::InvalidStandard {
                    metal,
                    value: *value,
                });
            }
        }
        Ok(Self { limits })
    }

    /// Builds a profile from `(metal, limit)` pairs; all eight metals must be
    /// present.
    pub fn try_from_pairs<I>(profile: &str, pairs: I) -> Result<Self, StandardsError>
    where
        I: IntoIterator<Item = (MetalKey, f64)>,
    {
        let mut limits: MetalMap<Option<f64>> = MetalMap::default();
        for (metal, value) in pairs {
            limits[metal] = Some(value);
        }
        if let Some(metal) = MetalKey::ALL.into_iter().find(|metal| limits[*metal].is_none()) {
            return Err(StandardsError::MissingLimit {
                profile: profile.to_string(),
                metal,
            });
        }
        Self::new(limits.map(|_, value| value.unwrap_or_default()))
    }

    pub fn limit(&self, metal: MetalKey) -> f64 {
        self.limits[metal]
    }

    pub fn limits(&self) -> &MetalMap<f64> {
        &self.limits
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetalKey, f64)> + '_ {
        self.limits.iter().map(|(metal, value)| (metal, *value))
    }

    /// Returns a new profile with every limit multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, StandardsError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(StandardsError::InvalidScaleFactor { factor });
        }
        Self::new(self.limits.map(|_, limit| limit * factor))
    }
}

impl Default for StandardsProfile {
    fn default() -> Self {
        base_standards()
    }
}

impl TryFrom<BTreeMap<String, f64>> for StandardsProfile {
    type Error = StandardsError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut pairs = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let metal = key
                .parse::<MetalKey>()
                .map_err(|err| StandardsError::InvalidProfile {
                    profile: "<limits>".to_string(),
                    message: err.to_string(),
                })?;
            pairs.push((metal, value));
        }
        Self::try_from_pairs("<limits>", pairs)
    }
}

impl Serialize for StandardsProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.limits.serialize(serializer)
    }
}

/// The canonical reference limits for all eight metals.
pub fn base_standards() -> StandardsProfile {
    StandardsProfile {
        limits: MetalMap::from_fn(base_limit),
    }
}

/// Scales every limit of `base` by `factor`.
///
/// Fails for a factor that is not finite and positive, and for a product that
/// leaves the valid range (overflow to infinity or underflow to 0).
pub fn scale(base: &StandardsProfile, factor: f64) -> Result<StandardsProfile, StandardsError> {
    base.scaled(factor)
}

fn is_valid_limit(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
