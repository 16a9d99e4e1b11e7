use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Micrograms per litre to milligrams per litre.
pub const UG_TO_MG: f64 = 0.001;

/// Unit in which raw concentration values are declared.
///
/// All index computation happens in mg/L; uploads default to µg/L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    #[serde(rename = "mg/L")]
    MilligramsPerLitre,
    #[default]
    #[serde(rename = "µg/L")]
    MicrogramsPerLitre,
}

impl ConcentrationUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            ConcentrationUnit::MilligramsPerLitre => "mg/L",
            ConcentrationUnit::MicrogramsPerLitre => "µg/L",
        }
    }

    /// Multiplier converting a value in this unit to mg/L.
    pub const fn to_mg_factor(self) -> f64 {
        match self {
            ConcentrationUnit::MilligramsPerLitre => 1.0,
            ConcentrationUnit::MicrogramsPerLitre => UG_TO_MG,
        }
    }

    pub fn to_mg_per_l(self, value: f64) -> f64 {
        value * self.to_mg_factor()
    }

    /// Converts a mg/L value back into this unit for display.
    pub fn from_mg_per_l(self, value_mg: f64) -> f64 {
        match self {
            ConcentrationUnit::MilligramsPerLitre => value_mg,
            ConcentrationUnit::MicrogramsPerLitre => value_mg * 1000.0,
        }
    }
}

impl fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ConcentrationUnit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mg/L" | "mg/l" | "mg" => Ok(ConcentrationUnit::MilligramsPerLitre),
            "µg/L" | "µg/l" | "μg/L" | "μg/l" | "ug/L" | "ug/l" | "ug" => {
                Ok(ConcentrationUnit::MicrogramsPerLitre)
            }
            other => Err(ModelError::UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micrograms_convert_by_one_thousandth() {
        let unit = ConcentrationUnit::MicrogramsPerLitre;
        assert_eq!(unit.to_mg_per_l(5.0), 5.0 * 0.001);
        assert_eq!(ConcentrationUnit::MilligramsPerLitre.to_mg_per_l(0.3), 0.3);
        assert_eq!(ConcentrationUnit::default(), unit);
    }

    #[test]
    fn converts_back_from_milligrams() {
        let unit = ConcentrationUnit::MicrogramsPerLitre;
        assert!((unit.from_mg_per_l(0.03) - 30.0).abs() < 1e-9);
        assert_eq!(ConcentrationUnit::MilligramsPerLitre.from_mg_per_l(0.3), 0.3);
        assert!((unit.from_mg_per_l(unit.to_mg_per_l(12.5)) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn parses_unit_spellings() {
        for raw in ["ug/L", "µg/L", "μg/L", " ug "] {
            assert_eq!(
                raw.parse::<ConcentrationUnit>(),
                Ok(ConcentrationUnit::MicrogramsPerLitre)
            );
        }
        assert_eq!(
            "mg/l".parse::<ConcentrationUnit>(),
            Ok(ConcentrationUnit::MilligramsPerLitre)
        );
        assert!("ppm".parse::<ConcentrationUnit>().is_err());
    }
}
