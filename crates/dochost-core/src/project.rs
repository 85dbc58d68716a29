//! Project and custom-domain records.

use serde::{Deserialize, Serialize};
use url::Url;

fn default_language() -> String {
    "en".to_string()
}

fn default_version() -> String {
    "latest".to_string()
}

/// A hosted documentation unit.
///
/// Hierarchy is at most two levels deep: a project is either a translation
/// (via `main_language_project`) or a subproject of a parent registered in
/// the store, never both axes chained recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique URL-safe identifier.
    pub slug: String,

    /// ISO language code of the built documentation.
    #[serde(default = "default_language")]
    pub language: String,

    /// If set, the language/version segments are omitted from all paths and
    /// the project is served at its root.
    #[serde(default)]
    pub single_version: bool,

    /// Version slug used when a call supplies no override.
    #[serde(default = "default_version")]
    pub default_version: String,

    /// Slug of the main-language project this project translates, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_language_project: Option<String>,
}

impl Project {
    /// Create a project with platform defaults (`en`, `latest`, multi-version).
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            language: default_language(),
            single_version: false,
            default_version: default_version(),
            main_language_project: None,
        }
    }

    /// Set the documentation language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Mark the project as single-version.
    #[must_use]
    pub const fn with_single_version(mut self, single_version: bool) -> Self {
        self.single_version = single_version;
        self
    }

    /// Set the default version slug.
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    /// Whether this project is a translation of another project.
    #[must_use]
    pub const fn is_translation(&self) -> bool {
        self.main_language_project.is_some()
    }
}

/// A custom hostname bound to a project.
///
/// The stored `url` may or may not carry a scheme or path; only the host part
/// is ever used for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Stored hostname, possibly with scheme and path.
    pub url: String,

    /// Whether this domain is the preferred host for the project's docs.
    #[serde(default)]
    pub canonical: bool,
}

impl Domain {
    /// Create a canonical domain record.
    pub fn canonical(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            canonical: true,
        }
    }

    /// The bare hostname, with scheme, path, and port stripped.
    #[must_use]
    pub fn host(&self) -> String {
        host_from_url(&self.url)
    }
}

/// Extract the host from a stored domain string.
///
/// Tolerates full URLs (`http://docs.foobar.com/en/`), scheme-less strings
/// (`docs.foobar.com/en/`), and bare hostnames. All comparisons and
/// concatenations elsewhere go through this single normalization point.
pub(crate) fn host_from_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if let Ok(parsed) = Url::parse(trimmed) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }
    // Scheme-less input parses as a relative URL; retry with one supplied.
    if let Ok(parsed) = Url::parse(&format!("http://{trimmed}")) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }
    trimmed.split('/').next().unwrap_or(trimmed).to_string()
}
