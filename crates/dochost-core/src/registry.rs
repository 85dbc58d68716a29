//! In-memory project registry and the TOML inventory it loads from.
//!
//! [`ProjectRegistry`] is the [`ProjectStore`] implementation used by tests
//! and the CLI. Projects, domains, and hierarchy links are registered through
//! the same write-side operations the platform exposes to project owners, or
//! loaded in bulk from an [`Inventory`] document:
//!
//! ```toml
//! [serve]
//! use_subdomain = false
//! production_domain = "readthedocs.org"
//!
//! [[projects]]
//! slug = "pip"
//!
//! [[projects]]
//! slug = "sub"
//! language = "ja"
//!
//! [[projects.domains]]
//! url = "https://docs.foobar.com"
//! canonical = true
//!
//! [relationships]
//! subprojects = { sub = "pip" }
//! translations = { trans = "pip" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ServeConfig;
use crate::project::{Domain, Project};
use crate::store::{ParentLink, ProjectStore};
use crate::{Error, Result};

/// A project plus the domain records bound to it, as stored in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// The project record itself.
    #[serde(flatten)]
    pub project: Project,

    /// Custom domains bound to the project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Domain>,
}

/// Hierarchy links between inventory projects, keyed by child slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    /// Subproject slug -> parent slug.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subprojects: BTreeMap<String, String>,

    /// Translation slug -> main-language project slug.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

/// TOML document describing a complete hosting setup: serve mode, projects,
/// domains, and hierarchy links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Platform serving mode.
    #[serde(default)]
    pub serve: ServeConfig,

    /// Hosted projects with their domains.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectEntry>,

    /// Hierarchy links applied after all projects are registered.
    #[serde(default)]
    pub relationships: Relationships,
}

impl Inventory {
    /// Load an inventory from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let inventory = toml::from_str(&content)?;
        Ok(inventory)
    }
}

/// In-memory [`ProjectStore`] implementation.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: BTreeMap<String, Project>,
    domains: BTreeMap<String, Vec<Domain>>,
    // (child slug, parent slug), in registration order.
    subprojects: Vec<(String, String)>,
}

impl ProjectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an inventory document.
    ///
    /// # Errors
    ///
    /// Returns an error if a relationship references an unknown slug or a
    /// project is registered as its own main-language project.
    pub fn from_inventory(inventory: &Inventory) -> Result<Self> {
        let mut registry = Self::new();
        for entry in &inventory.projects {
            registry.add_project(entry.project.clone());
            for domain in &entry.domains {
                registry.add_domain(&entry.project.slug, domain.clone())?;
            }
        }
        for (child, parent) in &inventory.relationships.subprojects {
            registry.add_subproject(parent, child)?;
        }
        for (translation, main) in &inventory.relationships.translations {
            registry.add_translation(main, translation)?;
        }
        Ok(registry)
    }

    /// Register a project, replacing any previous record under the same slug.
    pub fn add_project(&mut self, project: Project) {
        self.projects.insert(project.slug.clone(), project);
    }

    /// Bind a custom domain to a registered project.
    ///
    /// # Errors
    ///
    /// Fails if the slug is unknown.
    pub fn add_domain(&mut self, slug: &str, domain: Domain) -> Result<()> {
        if !self.projects.contains_key(slug) {
            return Err(Error::NotFound(format!(
                "cannot bind domain '{}': unknown project '{slug}'",
                domain.url
            )));
        }
        self.domains.entry(slug.to_string()).or_default().push(domain);
        Ok(())
    }

    /// Register `child` as a subproject of `parent`.
    ///
    /// Parents hold their subprojects in registration order.
    ///
    /// # Errors
    ///
    /// Fails if either slug is unknown or the link is self-referential.
    pub fn add_subproject(&mut self, parent: &str, child: &str) -> Result<()> {
        if parent == child {
            return Err(Error::Config(format!(
                "project '{parent}' cannot be a subproject of itself"
            )));
        }
        for slug in [parent, child] {
            if !self.projects.contains_key(slug) {
                return Err(Error::NotFound(format!("unknown project '{slug}'")));
            }
        }
        self.subprojects.push((child.to_string(), parent.to_string()));
        Ok(())
    }

    /// Register `translation` as a translation of `main`.
    ///
    /// Sets the translation's `main_language_project` reference.
    ///
    /// # Errors
    ///
    /// Fails if either slug is unknown or the link is self-referential.
    pub fn add_translation(&mut self, main: &str, translation: &str) -> Result<()> {
        if main == translation {
            return Err(Error::Config(format!(
                "project '{main}' cannot be its own main-language project"
            )));
        }
        if !self.projects.contains_key(main) {
            return Err(Error::NotFound(format!("unknown project '{main}'")));
        }
        match self.projects.get_mut(translation) {
            Some(project) => {
                project.main_language_project = Some(main.to_string());
                Ok(())
            },
            None => Err(Error::NotFound(format!("unknown project '{translation}'"))),
        }
    }

    /// All registered projects, ordered by slug.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Domains bound to a project, in registration order.
    #[must_use]
    pub fn domains(&self, slug: &str) -> &[Domain] {
        self.domains.get(slug).map_or(&[], Vec::as_slice)
    }

    /// Subprojects of a parent, in registration order.
    pub fn subprojects_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.subprojects
            .iter()
            .filter(move |(_, p)| p == parent)
            .filter_map(|(child, _)| self.projects.get(child))
    }
}

impl ProjectStore for ProjectRegistry {
    fn project(&self, slug: &str) -> Result<Project> {
        self.projects
            .get(slug)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("unknown project '{slug}'")))
    }

    fn main_language_project(&self, project: &Project) -> Result<Option<Project>> {
        match &project.main_language_project {
            Some(slug) => Ok(Some(self.project(slug)?)),
            None => Ok(None),
        }
    }

    fn subproject_parent(&self, project: &Project) -> Result<Option<ParentLink>> {
        let link = self
            .subprojects
            .iter()
            .find(|(child, _)| child == &project.slug);
        match link {
            Some((child, parent)) => Ok(Some(ParentLink {
                parent: self.project(parent)?,
                slug: child.clone(),
            })),
            None => Ok(None),
        }
    }

    fn canonical_domain(&self, project: &Project) -> Result<Option<Domain>> {
        // First canonical row in registration order wins when storage holds
        // several; any hit means the project is served from a custom domain.
        Ok(self
            .domains(&project.slug)
            .iter()
            .find(|domain| domain.canonical)
            .cloned())
    }
}
