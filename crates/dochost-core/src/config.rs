//! Serving-mode configuration for the hosting platform.
//!
//! Two process-wide values drive URL resolution: whether projects are served
//! from per-project subdomains and the platform's production domain. Both are
//! modeled as an explicitly passed [`ServeConfig`] rather than ambient global
//! state, so resolution stays a pure function of `(project, params, config)`
//! and concurrent or test use needs no synchronization.
//!
//! ## Example configuration file
//!
//! ```toml
//! use_subdomain = true
//! production_domain = "readthedocs.org"
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_production_domain() -> String {
    "readthedocs.org".to_string()
}

/// Platform serving mode, read-only during a resolution call.
///
/// With `use_subdomain` unset, all projects share `production_domain` and are
/// distinguished by a `/docs/<slug>/` path prefix. With it set, each project
/// is addressed as `<slug>.<production_domain>` and the prefix disappears.
/// A project's canonical custom domain overrides either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Serve each project from `<slug>.<production_domain>` instead of a
    /// shared-domain path prefix.
    #[serde(default)]
    pub use_subdomain: bool,

    /// Domain the platform itself is served from.
    #[serde(default = "default_production_domain")]
    pub production_domain: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            use_subdomain: false,
            production_domain: default_production_domain(),
        }
    }
}

impl ServeConfig {
    /// Shared-domain serving with path prefixes under the given domain.
    pub fn shared(production_domain: impl Into<String>) -> Self {
        Self {
            use_subdomain: false,
            production_domain: production_domain.into(),
        }
    }

    /// Per-project subdomain serving under the given domain.
    pub fn subdomain(production_domain: impl Into<String>) -> Self {
        Self {
            use_subdomain: true,
            production_domain: production_domain.into(),
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServeConfig::default();
        assert!(!config.use_subdomain);
        assert_eq!(config.production_domain, "readthedocs.org");
    }

    #[test]
    fn test_mode_constructors() {
        let shared = ServeConfig::shared("docs.example.com");
        assert!(!shared.use_subdomain);
        assert_eq!(shared.production_domain, "docs.example.com");

        let subdomain = ServeConfig::subdomain("docs.example.com");
        assert!(subdomain.use_subdomain);
        assert_eq!(subdomain.production_domain, "docs.example.com");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ServeConfig = toml::from_str("use_subdomain = true").unwrap();
        assert!(config.use_subdomain);
        assert_eq!(config.production_domain, "readthedocs.org");

        let config: ServeConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServeConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serve.toml");

        let config = ServeConfig::subdomain("docs.example.com");
        config.save(&path).unwrap();

        let loaded = ServeConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serve.toml");
        std::fs::write(&path, "use_subdomain = \"maybe").unwrap();

        let err = ServeConfig::from_file(&path).unwrap_err();
        assert_eq!(err.category(), "serialization");
    }
}
