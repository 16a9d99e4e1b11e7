#![deny(unsafe_code)]

use std::path::Path;

use hmpi_model::MetalKey;

use crate::error::StandardsError;
use crate::manifest::{ProfileEntry, ProfilesManifest};
use crate::profile::{StandardsProfile, base_standards, scale};

pub const BIS_ACCEPTABLE: &str = "BIS (Acceptable)";
pub const BIS_PERMISSIBLE: &str = "BIS (Permissible)";
pub const WHO: &str = "WHO";

/// A standards profile registered under a display name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NamedProfile {
    pub name: String,
    pub description: Option<String>,
    pub profile: StandardsProfile,
}

impl NamedProfile {
    pub fn slug(&self) -> String {
        profile_slug(&self.name)
    }

    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query.trim()) || self.slug() == profile_slug(query)
    }
}

/// Named standards profiles available to a report session.
///
/// Always holds at least the built-in profiles; entries can be replaced but
/// never removed.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    profiles: Vec<NamedProfile>,
    default_index: usize,
}

impl StandardsRegistry {
    /// The built-in profiles.
    ///
    /// `BIS (Permissible)` and `WHO` are the base table scaled by 2 and 1.
    /// These multipliers are carried over for compatibility and are not
    /// regulatory data; supply real tables through a profiles file.
    pub fn builtin() -> Self {
        let base = base_standards();
        let permissible = scale(&base, 2.0);
        let mut profiles = vec![NamedProfile {
            name: BIS_ACCEPTABLE.to_string(),
            description: Some("Reference drinking-water limits".to_string()),
            profile: base,
        }];
        // Doubling a valid table cannot leave the valid range.
        if let Ok(profile) = permissible {
            profiles.push(NamedProfile {
                name: BIS_PERMISSIBLE.to_string(),
                description: Some("Reference limits x2".to_string()),
                profile,
            });
        }
        profiles.push(NamedProfile {
            name: WHO.to_string(),
            description: Some("Reference limits x1".to_string()),
            profile: base,
        });
        Self {
            profiles,
            default_index: 0,
        }
    }

    /// Built-in profiles extended with the profiles listed in a TOML file.
    pub fn with_profiles_file(path: &Path) -> Result<Self, StandardsError> {
        let mut registry = Self::builtin();
        registry.load_file(path)?;
        Ok(registry)
    }

    pub fn profiles(&self) -> &[NamedProfile] {
        &self.profiles
    }

    pub fn default_profile(&self) -> &NamedProfile {
        &self.profiles[self.default_index]
    }

    /// Looks a profile up by name (case-insensitive) or slug.
    pub fn get(&self, query: &str) -> Option<&NamedProfile> {
        self.profiles.iter().find(|named| named.matches(query))
    }

    pub fn resolve(&self, query: &str) -> Result<&NamedProfile, StandardsError> {
        self.get(query).ok_or_else(|| StandardsError::UnknownProfile {
            name: query.trim().to_string(),
            available: self
                .profiles
                .iter()
                .map(|named| named.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Adds a profile, replacing any existing profile with the same name.
    pub fn insert(&mut self, named: NamedProfile) {
        match self
            .profiles
            .iter()
            .position(|existing| existing.name.eq_ignore_ascii_case(&named.name))
        {
            Some(index) => self.profiles[index] = named,
            None => self.profiles.push(named),
        }
    }

    pub fn set_default(&mut self, query: &str) -> Result<(), StandardsError> {
        let name = self.resolve(query)?.name.clone();
        self.default_index = self
            .profiles
            .iter()
            .position(|named| named.name == name)
            .unwrap_or(self.default_index);
        Ok(())
    }

    /// Reads a profiles TOML file into the registry. Returns the number of
    /// profiles added or replaced.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        self.load_toml(&contents, &path.display().to_string())
    }

    /// Parses profiles from TOML text. `origin` names the source in errors.
    pub fn load_toml(&mut self, contents: &str, origin: &str) -> Result<usize, StandardsError> {
        let manifest: ProfilesManifest =
            toml::from_str(contents).map_err(|source| StandardsError::Toml {
                origin: origin.to_string(),
                source,
            })?;
        let mut loaded = 0usize;
        for entry in &manifest.profiles {
            self.insert(build_profile(entry)?);
            loaded += 1;
        }
        if let Some(default) = manifest.default.as_deref() {
            self.set_default(default)?;
        }
        tracing::debug!(origin, loaded, "loaded standards profiles");
        Ok(loaded)
    }
}

impl Default for StandardsRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn build_profile(entry: &ProfileEntry) -> Result<NamedProfile, StandardsError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(StandardsError::InvalidProfile {
            profile: entry.name.clone(),
            message: "name must not be empty".to_string(),
        });
    }
    let profile = match (&entry.limits, entry.scale) {
        (Some(_), Some(_)) => {
            return Err(StandardsError::InvalidProfile {
                profile: name.to_string(),
                message: "set either `limits` or `scale`, not both".to_string(),
            });
        }
        (None, None) => {
            return Err(StandardsError::InvalidProfile {
                profile: name.to_string(),
                message: "one of `limits` or `scale` is required".to_string(),
            });
        }
        (None, Some(factor)) => scale(&base_standards(), factor)?,
        (Some(limits), None) => {
            let mut pairs = Vec::with_capacity(limits.len());
            for (key, value) in limits {
                let metal = key
                    .parse::<MetalKey>()
                    .map_err(|err| StandardsError::InvalidProfile {
                        profile: name.to_string(),
                        message: err.to_string(),
                    })?;
                pairs.push((metal, *value));
            }
            StandardsProfile::try_from_pairs(name, pairs)?
        }
    };
    Ok(NamedProfile {
        name: name.to_string(),
        description: entry.description.clone(),
        profile,
    })
}

/// Lowercase, dash-separated form of a profile name, e.g. `bis-acceptable`.
pub fn profile_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
