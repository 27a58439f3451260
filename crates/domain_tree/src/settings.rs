//! Runtime settings for the service layer

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Which relationships a linked individual lookup resolves.
///
/// Linking is explicit: a plain CRUD read never resolves relationships,
/// and a linked read resolves only what these flags ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingSettings {
    pub include_parents: bool,
    pub include_children: bool,
    pub include_spouses: bool,
}

impl LinkingSettings {
    /// Resolve every relationship
    pub fn all() -> Self {
        Self {
            include_parents: true,
            include_children: true,
            include_spouses: true,
        }
    }

    /// Resolve nothing (the default)
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if any relationship is requested
    pub fn links_anything(&self) -> bool {
        self.include_parents || self.include_children || self.include_spouses
    }
}

/// Settings for the service factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Relationship resolution defaults for linked individual reads
    pub linking: LinkingSettings,
    /// Whether tree graph projections are memoized
    pub cache_trees: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            linking: LinkingSettings::all(),
            cache_trees: true,
        }
    }
}

impl ServiceSettings {
    /// Loads settings from `FAMILY_TREE`-prefixed environment variables.
    ///
    /// Nested fields use `__` as the separator, e.g.
    /// `FAMILY_TREE__LINKING__INCLUDE_SPOUSES=false` or
    /// `FAMILY_TREE__CACHE_TREES=false`. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, ServiceError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("FAMILY_TREE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links_nothing() {
        let settings = LinkingSettings::default();
        assert!(!settings.links_anything());
    }

    #[test]
    fn test_all_links_everything() {
        let settings = LinkingSettings::all();
        assert!(settings.include_parents);
        assert!(settings.include_children);
        assert!(settings.include_spouses);
    }

    #[test]
    fn test_service_settings_default() {
        let settings = ServiceSettings::default();
        assert!(settings.cache_trees);
        assert_eq!(settings.linking, LinkingSettings::all());
    }

    #[test]
    fn test_from_env_with_no_variables_uses_defaults() {
        let settings = ServiceSettings::from_env().unwrap();
        assert_eq!(settings, ServiceSettings::default());
    }
}
