//! # CLI Structure and Argument Parsing
//!
//! Defines the command-line interface for `dochost`, built with `clap`
//! derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Absolute URL for a project's docs root
//! dochost url pip
//!
//! # Path for a file, forcing language and version
//! dochost path pip guide/install.html --language cz --version-slug 1.0
//!
//! # Host serving a project, with the serve mode overridden
//! dochost domain pip --subdomain --production-domain readthedocs.org
//!
//! # Inventory listing as JSON
//! dochost list -o json
//! ```
//!
//! Without per-call overrides, `url` and `path` resolve from the project's
//! own stored state (the smart tier); any override switches to the explicit
//! tier.

use clap::{Args, Parser, Subcommand};
use dochost_core::ResolveOptions;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `dochost` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "dochost")]
#[command(version)]
#[command(
    about = "dochost - canonical URL resolution for hosted documentation",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Inventory file describing projects, domains, and serve mode.
    /// Also via `DOCHOST_INVENTORY`.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "DOCHOST_INVENTORY",
        default_value = "dochost.toml"
    )]
    pub inventory: PathBuf,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Serve per-project subdomains regardless of the inventory's serve mode
    #[arg(long, global = true)]
    pub subdomain: bool,

    /// Override the inventory's production domain
    #[arg(long, global = true, value_name = "DOMAIN")]
    pub production_domain: Option<String>,
}

/// Available subcommands for the `dochost` CLI.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Resolve the absolute URL for a file within a project's documentation
    Url {
        /// Project slug
        slug: String,
        /// Filename within the built documentation (index when omitted)
        #[arg(default_value = "")]
        filename: String,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Resolve only the URL path
    Path {
        /// Project slug
        slug: String,
        /// Filename within the built documentation (index when omitted)
        #[arg(default_value = "")]
        filename: String,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Resolve the host serving a project's documentation
    Domain {
        /// Project slug
        slug: String,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List inventory projects with their hierarchy links
    #[command(visible_alias = "projects")]
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// Per-call resolution overrides shared by `url` and `path`.
#[derive(Args, Clone, Debug, Default)]
pub struct OverrideArgs {
    /// Force the language segment
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Force the version segment
    #[arg(long = "version-slug", value_name = "VERSION")]
    pub version_slug: Option<String>,

    /// Omit the language/version segments entirely
    #[arg(long)]
    pub single_version: bool,

    /// Resolve as served from the project's custom domain
    #[arg(long)]
    pub cname: bool,
}

impl OverrideArgs {
    /// Whether any override was given; without one, resolution uses the
    /// smart tier.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.language.is_none()
            && self.version_slug.is_none()
            && !self.single_version
            && !self.cname
    }

    /// Convert to the core's override bundle.
    ///
    /// The boolean flags only express the forced-on override; forcing one
    /// *off* is reachable through the library API, not the command line.
    #[must_use]
    pub fn to_options(&self) -> ResolveOptions {
        let mut options = ResolveOptions {
            language: self.language.clone(),
            version: self.version_slug.clone(),
            ..ResolveOptions::default()
        };
        if self.single_version {
            options = options.with_single_version(true);
        }
        if self.cname {
            options = options.with_cname(true);
        }
        options
    }
}
