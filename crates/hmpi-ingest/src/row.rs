use serde::Serialize;

use hmpi_model::{
    ConcentrationSample, ConcentrationUnit, MetalKey, MetalMap, is_valid_concentration,
};

/// Outcome of reading one metal cell.
///
/// Blank and unparseable cells both count as 0 when computing indices, and
/// both are left out of averages, statistics and exceedance counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Reading {
    /// A non-negative value in the table's declared unit, at most
    /// [`MAX_CONCENTRATION`](hmpi_model::MAX_CONCENTRATION).
    Value(f64),
    #[default]
    Blank,
    Unparseable,
}

impl Reading {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Reading::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if is_valid_concentration(value) => {
                // Fold -0 into 0.
                Reading::Value(if value == 0.0 { 0.0 } else { value })
            }
            _ => Reading::Unparseable,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(value) => Some(value),
            Reading::Blank | Reading::Unparseable => None,
        }
    }

    pub fn is_unparseable(self) -> bool {
        matches!(self, Reading::Unparseable)
    }
}

/// A metal cell: the text as uploaded plus how it was read.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetalCell {
    pub raw: String,
    pub reading: Reading,
}

impl MetalCell {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let reading = Reading::parse(&raw);
        Self { raw, reading }
    }
}

/// One sampling record of a measurement table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataRow {
    pub state: String,
    pub district: String,
    pub location: String,
    pub longitude: String,
    pub latitude: String,
    pub metals: MetalMap<MetalCell>,
}

impl DataRow {
    pub fn reading(&self, metal: MetalKey) -> Reading {
        self.metals[metal].reading
    }

    /// Parsed value in the table's declared unit.
    pub fn value(&self, metal: MetalKey) -> Option<f64> {
        self.reading(metal).value()
    }

    /// Parsed value converted to mg/L.
    pub fn value_mg(&self, metal: MetalKey, unit: ConcentrationUnit) -> Option<f64> {
        self.value(metal).map(|value| unit.to_mg_per_l(value))
    }

    pub fn concentrations_mg(&self, unit: ConcentrationUnit) -> MetalMap<Option<f64>> {
        MetalMap::from_fn(|metal| self.value_mg(metal, unit))
    }

    /// Index engine input for this row; blank and unparseable cells become 0.
    pub fn sample(&self, unit: ConcentrationUnit) -> ConcentrationSample {
        ConcentrationSample::from_readings(&self.concentrations_mg(unit))
    }

    /// Raw text of a column by its CSV header name.
    pub fn column(&self, name: &str) -> Option<&str> {
        match name {
            "State" => Some(&self.state),
            "District" => Some(&self.district),
            "Location" => Some(&self.location),
            "Longitude" => Some(&self.longitude),
            "Latitude" => Some(&self.latitude),
            other => other
                .parse::<MetalKey>()
                .ok()
                .filter(|metal| metal.symbol() == other)
                .map(|metal| self.metals[metal].raw.as_str()),
        }
    }

    /// `(longitude, latitude)` when both parse as finite numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let longitude = self.longitude.trim().parse::<f64>().ok()?;
        let latitude = self.latitude.trim().parse::<f64>().ok()?;
        (longitude.is_finite() && latitude.is_finite()).then_some((longitude, latitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_policy() {
        assert_eq!(Reading::parse(" 12.5 "), Reading::Value(12.5));
        assert_eq!(Reading::parse("0"), Reading::Value(0.0));
        assert_eq!(Reading::parse(""), Reading::Blank);
        assert_eq!(Reading::parse("   "), Reading::Blank);
        assert_eq!(Reading::parse("abc"), Reading::Unparseable);
        assert_eq!(Reading::parse("-3"), Reading::Unparseable);
        assert_eq!(Reading::parse("NaN"), Reading::Unparseable);
        assert_eq!(Reading::parse("inf"), Reading::Unparseable);
        assert_eq!(Reading::parse("12abc"), Reading::Unparseable);
        assert_eq!(Reading::parse("1e9"), Reading::Value(1e9));
        assert_eq!(Reading::parse("1e308"), Reading::Unparseable);
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        let Reading::Value(value) = Reading::parse("-0") else {
            panic!("expected a value");
        };
        assert!(value.is_sign_positive());
    }

    #[test]
    fn sample_converts_micrograms() {
        let mut row = DataRow::default();
        row.metals[MetalKey::Pb] = MetalCell::new("20");
        row.metals[MetalKey::Cd] = MetalCell::new("oops");
        let sample = row.sample(ConcentrationUnit::MicrogramsPerLitre);
        assert!((sample.get(MetalKey::Pb) - 0.02).abs() < 1e-15);
        assert_eq!(sample.get(MetalKey::Cd), 0.0);
    }

    #[test]
    fn coordinates_require_both_axes() {
        let mut row = DataRow {
            longitude: "77.2".to_string(),
            latitude: "28.6".to_string(),
            ..DataRow::default()
        };
        assert_eq!(row.coordinates(), Some((77.2, 28.6)));
        row.latitude = "n/a".to_string();
        assert_eq!(row.coordinates(), None);
    }

    #[test]
    fn column_lookup_is_exact() {
        let mut row = DataRow {
            state: "Kerala".to_string(),
            ..DataRow::default()
        };
        row.metals[MetalKey::Zn] = MetalCell::new("4.1");
        assert_eq!(row.column("State"), Some("Kerala"));
        assert_eq!(row.column("Zn"), Some("4.1"));
        assert_eq!(row.column("zn"), None);
        assert_eq!(row.column("HPI"), None);
    }
}
