//! `url`, `path`, and `domain` command implementations.

use anyhow::Result;
use dochost_core::{ProjectStore, Resolver};
use tracing::debug;

use super::ResolverContext;
use crate::cli::OverrideArgs;
use crate::output::{print_resolved, OutputFormat};

/// Resolve and print the absolute URL for a file within a project's docs.
pub fn resolve_url(
    context: &ResolverContext,
    slug: &str,
    filename: &str,
    overrides: &OverrideArgs,
    output: OutputFormat,
) -> Result<()> {
    let project = context.registry.project(slug)?;
    let resolver = Resolver::new(&context.config, &context.registry);

    let url = if overrides.is_default() {
        debug!(%slug, "no overrides given, resolving from project state");
        let domain = resolver.smart_resolve_domain(&project)?;
        let path = resolver.smart_resolve_path(&project, filename)?;
        format!("http://{domain}{path}")
    } else {
        resolver.resolve(&project, filename, &overrides.to_options())?
    };

    print_resolved(output, "url", &url)
}

/// Resolve and print only the URL path.
pub fn resolve_path(
    context: &ResolverContext,
    slug: &str,
    filename: &str,
    overrides: &OverrideArgs,
    output: OutputFormat,
) -> Result<()> {
    let project = context.registry.project(slug)?;
    let resolver = Resolver::new(&context.config, &context.registry);

    let path = if overrides.is_default() {
        resolver.smart_resolve_path(&project, filename)?
    } else {
        resolver.resolve_path(&project, filename, &overrides.to_options())?
    };

    print_resolved(output, "path", &path)
}

/// Resolve and print the host serving a project's documentation.
pub fn resolve_domain(context: &ResolverContext, slug: &str, output: OutputFormat) -> Result<()> {
    let project = context.registry.project(slug)?;
    let resolver = Resolver::new(&context.config, &context.registry);

    let domain = resolver.smart_resolve_domain(&project)?;
    print_resolved(output, "domain", &domain)
}
