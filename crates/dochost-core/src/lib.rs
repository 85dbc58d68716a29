//! # dochost-core
//!
//! Core URL resolution for a multi-tenant documentation hosting platform.
//!
//! Given a project, an optional filename within its built documentation, and
//! optional overrides, this crate deterministically produces a URL path, a
//! host, and a fully qualified URL, all consistent with the platform's
//! serving mode and the project's own configuration (alternate versions,
//! translations, subprojects, canonical custom domains).
//!
//! ## Architecture
//!
//! - **Configuration**: the explicitly passed serving mode ([`ServeConfig`])
//! - **Data model**: [`Project`] and [`Domain`] records
//! - **Store**: the read-only persistence contract ([`ProjectStore`]) and the
//!   in-memory [`ProjectRegistry`] backing tests and the CLI
//! - **Resolver**: the two-tier resolution operations (explicit and `smart_`)
//!
//! ## Quick Start
//!
//! ```rust
//! use dochost_core::{Project, ProjectRegistry, ProjectStore, Resolver, ServeConfig};
//!
//! let mut registry = ProjectRegistry::new();
//! registry.add_project(Project::new("pip"));
//!
//! let config = ServeConfig::subdomain("readthedocs.org");
//! let resolver = Resolver::new(&config, &registry);
//!
//! let pip = registry.project("pip")?;
//! assert_eq!(
//!     resolver.smart_resolve(&pip)?,
//!     "http://pip.readthedocs.org/en/latest/"
//! );
//! # Ok::<(), dochost_core::Error>(())
//! ```
//!
//! Resolution is synchronous, side-effect-free, and holds no shared mutable
//! state; calls may be issued concurrently without coordination.

/// Serving-mode configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Project and custom-domain records
pub mod project;
/// In-memory registry and TOML inventory
pub mod registry;
/// URL path, domain, and absolute-URL resolution
pub mod resolver;
/// Persistence collaborator contract
pub mod store;

// Re-export commonly used types
pub use config::ServeConfig;
pub use error::{Error, Result};
pub use project::{Domain, Project};
pub use registry::{Inventory, ProjectEntry, ProjectRegistry, Relationships};
pub use resolver::{ResolveOptions, Resolver};
pub use store::{ParentLink, ProjectStore};
