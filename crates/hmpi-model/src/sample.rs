use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::metal::{MetalKey, MetalMap};

/// Largest concentration accepted, in either unit.
///
/// Far above any real measurement, and low enough that `Wi * Qi` stays finite
/// for every built-in standard.
pub const MAX_CONCENTRATION: f64 = 1e9;

/// Measured concentrations in mg/L, one per metal.
///
/// Metals that were not supplied hold 0. Values are always finite,
/// non-negative and at most [`MAX_CONCENTRATION`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ConcentrationSample {
    values: MetalMap<f64>,
}

impl ConcentrationSample {
    /// A sample with every concentration at 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a sample from `(metal, mg/L)` pairs. Later pairs overwrite
    /// earlier ones for the same metal.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MetalKey, f64)>,
    {
        let mut sample = Self::zero();
        for (metal, value) in pairs {
            sample.set(metal, value)?;
        }
        Ok(sample)
    }

    /// Builds a sample from optional readings; absent and out-of-range
    /// readings become 0.
    pub fn from_readings(readings: &MetalMap<Option<f64>>) -> Self {
        Self {
            values: readings.map(|_, value| match value {
                Some(v) if is_valid_concentration(*v) => *v,
                _ => 0.0,
            }),
        }
    }

    pub fn set(&mut self, metal: MetalKey, value: f64) -> Result<()> {
        if !is_valid_concentration(value) {
            return Err(ModelError::InvalidConcentration { metal, value });
        }
        self.values[metal] = value;
        Ok(())
    }

    pub fn with(mut self, metal: MetalKey, value: f64) -> Result<Self> {
        self.set(metal, value)?;
        Ok(self)
    }

    pub fn get(&self, metal: MetalKey) -> f64 {
        self.values[metal]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetalKey, f64)> + '_ {
        self.values.iter().map(|(metal, value)| (metal, *value))
    }

    pub fn is_zero(&self) -> bool {
        self.values.values().all(|value| *value == 0.0)
    }
}

/// Finite, non-negative and no larger than [`MAX_CONCENTRATION`].
pub fn is_valid_concentration(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_CONCENTRATION).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metals_default_to_zero() {
        let sample = ConcentrationSample::try_from_pairs([(MetalKey::Cd, 0.004)])
            .expect("valid sample");
        assert_eq!(sample.get(MetalKey::Cd), 0.004);
        assert_eq!(sample.get(MetalKey::Zn), 0.0);
        assert!(!sample.is_zero());
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert!(matches!(
            ConcentrationSample::zero().with(MetalKey::Pb, -0.1),
            Err(ModelError::InvalidConcentration {
                metal: MetalKey::Pb,
                ..
            })
        ));
        assert!(ConcentrationSample::zero().with(MetalKey::Fe, f64::NAN).is_err());
        assert!(
            ConcentrationSample::zero()
                .with(MetalKey::Fe, f64::INFINITY)
                .is_err()
        );
        assert!(ConcentrationSample::zero().with(MetalKey::Cd, 1e308).is_err());
        assert!(
            ConcentrationSample::zero()
                .with(MetalKey::Cd, MAX_CONCENTRATION)
                .is_ok()
        );
    }

    #[test]
    fn readings_fall_back_to_zero() {
        let mut readings = MetalMap::<Option<f64>>::default();
        readings[MetalKey::Cu] = Some(0.07);
        readings[MetalKey::Ni] = Some(-1.0);
        readings[MetalKey::Mn] = Some(f64::NAN);
        let sample = ConcentrationSample::from_readings(&readings);
        assert_eq!(sample.get(MetalKey::Cu), 0.07);
        assert_eq!(sample.get(MetalKey::Ni), 0.0);
        assert_eq!(sample.get(MetalKey::Mn), 0.0);
        assert_eq!(sample.get(MetalKey::Cd), 0.0);
    }
}
