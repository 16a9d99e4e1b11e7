//! The closed set of tracked heavy metals.
//!
//! Every computation in the workspace iterates [`MetalKey::ALL`] or indexes a
//! [`MetalMap`], so adding a metal is a compile error everywhere a `match`
//! over the enum is not exhaustive.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ModelError;

/// A tracked heavy metal, identified by its chemical symbol.
///
/// Declaration order is the display order used by tables and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetalKey {
    Cd,
    Cr,
    Cu,
    Pb,
    Mn,
    Ni,
    Fe,
    Zn,
}

impl MetalKey {
    pub const COUNT: usize = 8;

    /// All metals in display order.
    pub const ALL: [MetalKey; Self::COUNT] = [
        MetalKey::Cd,
        MetalKey::Cr,
        MetalKey::Cu,
        MetalKey::Pb,
        MetalKey::Mn,
        MetalKey::Ni,
        MetalKey::Fe,
        MetalKey::Zn,
    ];

    /// Position of this metal in [`MetalKey::ALL`].
    pub const fn index(self) -> usize {
        match self {
            MetalKey::Cd => 0,
            MetalKey::Cr => 1,
            MetalKey::Cu => 2,
            MetalKey::Pb => 3,
            MetalKey::Mn => 4,
            MetalKey::Ni => 5,
            MetalKey::Fe => 6,
            MetalKey::Zn => 7,
        }
    }

    /// Chemical symbol, also used as the CSV column name.
    pub const fn symbol(self) -> &'static str {
        match self {
            MetalKey::Cd => "Cd",
            MetalKey::Cr => "Cr",
            MetalKey::Cu => "Cu",
            MetalKey::Pb => "Pb",
            MetalKey::Mn => "Mn",
            MetalKey::Ni => "Ni",
            MetalKey::Fe => "Fe",
            MetalKey::Zn => "Zn",
        }
    }

    /// Human-readable label, e.g. `Cadmium (Cd)`.
    pub const fn label(self) -> &'static str {
        match self {
            MetalKey::Cd => "Cadmium (Cd)",
            MetalKey::Cr => "Chromium (Cr)",
            MetalKey::Cu => "Copper (Cu)",
            MetalKey::Pb => "Lead (Pb)",
            MetalKey::Mn => "Manganese (Mn)",
            MetalKey::Ni => "Nickel (Ni)",
            MetalKey::Fe => "Iron (Fe)",
            MetalKey::Zn => "Zinc (Zn)",
        }
    }
}

impl fmt::Display for MetalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MetalKey {
    type Err = ModelError;

    /// Parses a chemical symbol, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MetalKey::ALL
            .into_iter()
            .find(|metal| metal.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownMetal(trimmed.to_string()))
    }
}

/// A total mapping from every [`MetalKey`] to a value.
///
/// Backed by a fixed array, so a value for each metal exists by construction
/// and iteration always follows [`MetalKey::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MetalMap<T> {
    values: [T; MetalKey::COUNT],
}

impl<T> MetalMap<T> {
    /// Builds a map by evaluating `f` for each metal in display order.
    pub fn from_fn(f: impl FnMut(MetalKey) -> T) -> Self {
        Self {
            values: MetalKey::ALL.map(f),
        }
    }

    pub fn get(&self, metal: MetalKey) -> &T {
        &self.values[metal.index()]
    }

    pub fn get_mut(&mut self, metal: MetalKey) -> &mut T {
        &mut self.values[metal.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetalKey, &T)> {
        MetalKey::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Maps every entry into a new `MetalMap`.
    pub fn map<U>(&self, mut f: impl FnMut(MetalKey, &T) -> U) -> MetalMap<U> {
        MetalMap::from_fn(|metal| f(metal, &self.values[metal.index()]))
    }
}

impl<T> Index<MetalKey> for MetalMap<T> {
    type Output = T;

    fn index(&self, metal: MetalKey) -> &T {
        self.get(metal)
    }
}

impl<T> IndexMut<MetalKey> for MetalMap<T> {
    fn index_mut(&mut self, metal: MetalKey) -> &mut T {
        self.get_mut(metal)
    }
}

impl<T: Serialize> Serialize for MetalMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MetalKey::COUNT))?;
        for (metal, value) in self.iter() {
            map.serialize_entry(metal.symbol(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (position, metal) in MetalKey::ALL.into_iter().enumerate() {
            assert_eq!(metal.index(), position);
        }
    }

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!(" pb ".parse::<MetalKey>(), Ok(MetalKey::Pb));
        assert_eq!("ZN".parse::<MetalKey>(), Ok(MetalKey::Zn));
        assert_eq!(
            "Hg".parse::<MetalKey>(),
            Err(ModelError::UnknownMetal("Hg".to_string()))
        );
    }

    #[test]
    fn map_iterates_in_display_order() {
        let map = MetalMap::from_fn(MetalKey::index);
        let keys: Vec<MetalKey> = map.iter().map(|(metal, _)| metal).collect();
        assert_eq!(keys, MetalKey::ALL.to_vec());
        assert_eq!(map[MetalKey::Fe], 6);
    }
}
