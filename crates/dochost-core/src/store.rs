//! Persistence collaborator contract consumed by the resolver.
//!
//! The resolver never touches storage directly; it reads project state
//! through this trait and propagates lookup failures unmodified. The
//! in-memory [`ProjectRegistry`](crate::ProjectRegistry) implements it for
//! tests and the CLI; a platform deployment backs it with its database layer.

use crate::project::{Domain, Project};
use crate::Result;

/// Subproject-parent link returned by [`ProjectStore::subproject_parent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    /// The parent ("main") project.
    pub parent: Project,
    /// Slug under which the subproject is addressed in paths, as the
    /// `projects/<slug>/` segment.
    pub slug: String,
}

/// Read-only project state lookups.
///
/// Each resolution call performs at most one [`canonical_domain`] lookup;
/// the hierarchy accessors operate on attributes the caller has already
/// loaded. Implementations must not cache across calls on the resolver's
/// behalf.
///
/// [`canonical_domain`]: ProjectStore::canonical_domain
pub trait ProjectStore {
    /// Look up a project by slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) for an unknown
    /// slug, or an implementation-defined error for backend failures.
    fn project(&self, slug: &str) -> Result<Project>;

    /// The main-language project this project translates, if any.
    ///
    /// # Errors
    ///
    /// Fails if the project's `main_language_project` slug does not resolve.
    fn main_language_project(&self, project: &Project) -> Result<Option<Project>>;

    /// The parent this project is registered under as a subproject, if any.
    ///
    /// # Errors
    ///
    /// Fails if the recorded parent slug does not resolve.
    fn subproject_parent(&self, project: &Project) -> Result<Option<ParentLink>>;

    /// The canonical custom domain bound to this project, if any.
    ///
    /// Returns zero or one record. An implementation holding several
    /// canonical rows resolves the ambiguity itself (the in-memory registry
    /// returns the first in registration order); presence of any record means
    /// the project is served from a custom domain.
    ///
    /// # Errors
    ///
    /// Implementation-defined backend failures only.
    fn canonical_domain(&self, project: &Project) -> Result<Option<Domain>>;
}
