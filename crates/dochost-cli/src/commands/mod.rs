//! Command implementations for the `dochost` CLI.

mod list;
mod resolve;

pub use list::list_projects;
pub use resolve::{resolve_domain, resolve_path, resolve_url};

use anyhow::{Context, Result};
use dochost_core::{Inventory, ProjectRegistry, ServeConfig};

use crate::cli::Cli;

/// Loaded inventory plus the effective serving mode for this invocation.
pub struct ResolverContext {
    /// Serving mode after command-line overrides.
    pub config: ServeConfig,
    /// Registry built from the inventory file.
    pub registry: ProjectRegistry,
}

impl ResolverContext {
    /// Load the inventory named by the CLI and apply serve-mode overrides.
    ///
    /// # Errors
    ///
    /// Fails if the inventory file cannot be read or is inconsistent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let inventory = Inventory::from_file(&cli.inventory)
            .with_context(|| format!("failed to load inventory '{}'", cli.inventory.display()))?;

        let mut config = inventory.serve.clone();
        if cli.subdomain {
            config.use_subdomain = true;
        }
        if let Some(domain) = &cli.production_domain {
            config.production_domain = domain.clone();
        }

        let registry = ProjectRegistry::from_inventory(&inventory)
            .context("inventory contains inconsistent project relationships")?;

        Ok(Self { config, registry })
    }
}
