//! Canonical URL resolution for hosted documentation projects.
//!
//! Reconciles four independent axes into one unambiguous path and host:
//! the platform serving mode (per-project subdomains vs shared-domain path
//! prefixes), canonical custom domains, project hierarchy (subprojects and
//! translations), and per-call overrides. Each operation comes in two tiers:
//! an explicit one taking every parameter, and a `smart_` wrapper deriving
//! them from the project's own state and its canonical-domain lookup.
//!
//! Precedence per parameter is a fixed table: call override, then project
//! attribute, then platform default. The exceptions are spelled out on the
//! individual operations (a translation's own language always wins; an
//! explicit domain request beats global subdomain mode).

use tracing::debug;

use crate::config::ServeConfig;
use crate::project::Project;
use crate::store::ProjectStore;
use crate::Result;

/// Per-call overrides for the explicit resolution tier.
///
/// Every field defaults to "derive from project state". Overrides win over
/// project attributes, which win over platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Force the language segment. Ignored for translations, which always
    /// keep their own language.
    pub language: Option<String>,

    /// Force the version segment. Ignored when the effective single-version
    /// flag suppresses version segments entirely.
    pub version: Option<String>,

    /// Override the project's stored single-version flag.
    pub single_version: Option<bool>,

    /// Resolve as served from the project's custom domain: no shared-domain
    /// path prefix regardless of serving mode.
    pub cname: Option<bool>,
}

impl ResolveOptions {
    /// Force the language segment.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Force the version segment.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Override the single-version flag.
    #[must_use]
    pub const fn with_single_version(mut self, single_version: bool) -> Self {
        self.single_version = Some(single_version);
        self
    }

    /// Force or forbid custom-domain serving.
    #[must_use]
    pub const fn with_cname(mut self, cname: bool) -> Self {
        self.cname = Some(cname);
        self
    }
}

/// Root project lookup result: the project anchoring path and domain
/// assembly, plus the subproject path segment when one applies.
#[derive(Debug, Clone)]
struct RootLookup {
    root: Project,
    subproject_slug: Option<String>,
}

/// URL resolver over a serving configuration and a project store.
///
/// Holds no mutable state; calls are independent and may run concurrently.
#[derive(Debug)]
pub struct Resolver<'a, S: ProjectStore> {
    config: &'a ServeConfig,
    store: &'a S,
}

impl<'a, S: ProjectStore> Resolver<'a, S> {
    /// Create a resolver over the given serving mode and store.
    pub const fn new(config: &'a ServeConfig, store: &'a S) -> Self {
        Self { config, store }
    }

    /// Resolve a URL path with explicit overrides.
    ///
    /// An empty or missing filename behaves as an index request; the result
    /// always starts with `/` and, for index requests, ends with `/`.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn resolve_path(
        &self,
        project: &Project,
        filename: &str,
        options: &ResolveOptions,
    ) -> Result<String> {
        let filename = normalize_filename(filename);
        let lookup = self.find_root(project)?;

        let single_version = options.single_version.unwrap_or(project.single_version);
        let use_domain = options.cname.unwrap_or(false);

        let mut path = String::from("/");
        // A custom domain or a per-project subdomain already identifies the
        // project; only shared-domain serving needs the /docs/<slug>/ prefix.
        if !use_domain && !self.config.use_subdomain {
            path.push_str("docs/");
            path.push_str(&lookup.root.slug);
            path.push('/');
        }
        if let Some(subproject_slug) = &lookup.subproject_slug {
            path.push_str("projects/");
            path.push_str(subproject_slug);
            path.push('/');
        }
        if !single_version {
            let language = effective_language(project, options);
            let version = options
                .version
                .clone()
                .unwrap_or_else(|| project.default_version.clone());
            path.push_str(&language);
            path.push('/');
            path.push_str(&version);
            path.push('/');
        }
        path.push_str(filename);
        Ok(path)
    }

    /// Resolve a URL path from the project's own state.
    ///
    /// Checks whether the root project carries an active canonical domain
    /// and, if so, resolves in domain mode; otherwise the global serving
    /// mode decides. Language, version, and single-version all come from
    /// stored project attributes.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn smart_resolve_path(&self, project: &Project, filename: &str) -> Result<String> {
        let lookup = self.find_root(project)?;
        let options = if self.store.canonical_domain(&lookup.root)?.is_some() {
            debug!(
                slug = %project.slug,
                root = %lookup.root.slug,
                "canonical domain active, resolving path in domain mode"
            );
            ResolveOptions::default().with_cname(true)
        } else {
            ResolveOptions::default()
        };
        self.resolve_path(project, filename, &options)
    }

    /// Resolve the host serving a project's documentation.
    ///
    /// With `cname` forced, the root project's canonical domain wins when
    /// one exists; otherwise subdomain mode yields
    /// `<root_slug>.<production_domain>` and shared mode the production
    /// domain unmodified. Subprojects and translations always resolve to
    /// their root project's host, never their own slug.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn resolve_domain(&self, project: &Project, cname: Option<bool>) -> Result<String> {
        let lookup = self.find_root(project)?;
        if cname.unwrap_or(false) {
            if let Some(domain) = self.store.canonical_domain(&lookup.root)? {
                let host = domain.host();
                debug!(slug = %project.slug, %host, "resolved canonical domain host");
                return Ok(host);
            }
        }
        if self.config.use_subdomain {
            Ok(format!(
                "{}.{}",
                lookup.root.slug, self.config.production_domain
            ))
        } else {
            Ok(self.config.production_domain.clone())
        }
    }

    /// Resolve the host from the project's own state.
    ///
    /// A canonical domain on the root project is checked first and overrides
    /// the global serving mode entirely.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn smart_resolve_domain(&self, project: &Project) -> Result<String> {
        self.resolve_domain(project, Some(true))
    }

    /// Resolve an absolute URL with explicit overrides.
    ///
    /// Scheme is always `http`; TLS negotiation belongs to the serving
    /// layer.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn resolve(
        &self,
        project: &Project,
        filename: &str,
        options: &ResolveOptions,
    ) -> Result<String> {
        let domain = self.resolve_domain(project, options.cname)?;
        let path = self.resolve_path(project, filename, options)?;
        Ok(format!("http://{domain}{path}"))
    }

    /// Resolve the absolute URL of a project's documentation root.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures unmodified.
    pub fn smart_resolve(&self, project: &Project) -> Result<String> {
        let domain = self.smart_resolve_domain(project)?;
        let path = self.smart_resolve_path(project, "")?;
        Ok(format!("http://{domain}{path}"))
    }

    /// Find the root project anchoring path and domain assembly.
    ///
    /// One explicit hop per link kind, translation before subproject, never
    /// recursive: a translation resolves to its own main-language project
    /// even when that project is itself registered as a subproject elsewhere,
    /// and a subproject's parent is taken as-is.
    fn find_root(&self, project: &Project) -> Result<RootLookup> {
        if let Some(main) = self.store.main_language_project(project)? {
            debug!(slug = %project.slug, root = %main.slug, "translation root");
            return Ok(RootLookup {
                root: main,
                subproject_slug: None,
            });
        }
        if let Some(link) = self.store.subproject_parent(project)? {
            debug!(slug = %project.slug, root = %link.parent.slug, "subproject root");
            return Ok(RootLookup {
                root: link.parent,
                subproject_slug: Some(link.slug),
            });
        }
        Ok(RootLookup {
            root: project.clone(),
            subproject_slug: None,
        })
    }
}

/// Effective language for path segments.
///
/// Translations keep their own stored language even against an explicit
/// override; everything else follows override-then-attribute precedence.
fn effective_language(project: &Project, options: &ResolveOptions) -> String {
    if project.is_translation() {
        project.language.clone()
    } else {
        options
            .language
            .clone()
            .unwrap_or_else(|| project.language.clone())
    }
}

/// Normalize a requested filename into the form appended to the path.
///
/// Strips any leading slash and drops an `index.html` basename, keeping the
/// trailing slash; an empty filename is an index request and stays empty.
fn normalize_filename(filename: &str) -> &str {
    let filename = filename.trim_start_matches('/');
    if filename == "index.html" {
        ""
    } else if let Some(stripped) = filename.strip_suffix("index.html") {
        if stripped.ends_with('/') {
            stripped
        } else {
            filename
        }
    } else {
        filename
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::project::Domain;
    use crate::registry::ProjectRegistry;
    use proptest::prelude::*;

    fn fixture() -> ProjectRegistry {
        let mut registry = ProjectRegistry::new();
        registry.add_project(Project::new("pip"));
        registry.add_project(Project::new("sub").with_language("ja"));
        registry.add_project(Project::new("trans").with_language("ja"));
        registry.add_subproject("pip", "sub").unwrap();
        registry.add_translation("pip", "trans").unwrap();
        registry
    }

    #[test]
    fn test_normalize_filename_index_forms() {
        assert_eq!(normalize_filename(""), "");
        assert_eq!(normalize_filename("index.html"), "");
        assert_eq!(normalize_filename("/index.html"), "");
        assert_eq!(normalize_filename("foo/index.html"), "foo/");
        assert_eq!(normalize_filename("/foo/bar/index.html"), "foo/bar/");
    }

    #[test]
    fn test_normalize_filename_keeps_regular_files() {
        assert_eq!(normalize_filename("foo/bar/blah.html"), "foo/bar/blah.html");
        assert_eq!(
            normalize_filename("/foo/bar/blah.html"),
            "foo/bar/blah.html"
        );
        // Only a whole `index.html` basename is dropped.
        assert_eq!(normalize_filename("myindex.html"), "myindex.html");
        assert_eq!(normalize_filename("foo/myindex.html"), "foo/myindex.html");
    }

    #[test]
    fn test_effective_language_translation_pins_language() {
        let registry = fixture();
        let trans = registry.project("trans").unwrap();
        let options = ResolveOptions::default().with_language("cz");
        assert_eq!(effective_language(&trans, &options), "ja");

        let pip = registry.project("pip").unwrap();
        assert_eq!(effective_language(&pip, &options), "cz");
        assert_eq!(effective_language(&pip, &ResolveOptions::default()), "en");
    }

    #[test]
    fn test_find_root_prefers_translation_over_subproject() {
        // `trans` is registered both as a translation of `pip` and as a
        // subproject of `other`; the translation link must win and no
        // projects/<slug>/ segment may appear.
        let mut registry = fixture();
        registry.add_project(Project::new("other"));
        registry.add_subproject("other", "trans").unwrap();

        let config = ServeConfig::shared("readthedocs.org");
        let resolver = Resolver::new(&config, &registry);
        let trans = registry.project("trans").unwrap();

        let path = resolver.smart_resolve_path(&trans, "").unwrap();
        assert_eq!(path, "/docs/pip/ja/latest/");
    }

    #[test]
    fn test_subproject_with_own_canonical_domain_resolves_via_root() {
        // A domain row attached directly to a subproject is inert while the
        // subproject relation exists; resolution goes through the root.
        let mut registry = fixture();
        registry
            .add_domain("sub", Domain::canonical("http://docs.sub.example.com"))
            .unwrap();

        let config = ServeConfig::shared("readthedocs.org");
        let resolver = Resolver::new(&config, &registry);
        let sub = registry.project("sub").unwrap();

        assert_eq!(
            resolver.smart_resolve_path(&sub, "").unwrap(),
            "/docs/pip/projects/sub/ja/latest/"
        );
        assert_eq!(
            resolver.smart_resolve_domain(&sub).unwrap(),
            "readthedocs.org"
        );
    }

    proptest! {
        #[test]
        fn test_path_always_starts_with_slash(filename in r"[a-z0-9./_-]{0,40}") {
            let registry = fixture();
            let pip = registry.project("pip").unwrap();
            for config in [
                ServeConfig::shared("readthedocs.org"),
                ServeConfig::subdomain("readthedocs.org"),
            ] {
                let resolver = Resolver::new(&config, &registry);
                let path = resolver
                    .resolve_path(&pip, &filename, &ResolveOptions::default())
                    .unwrap();
                prop_assert!(path.starts_with('/'));
            }
        }

        #[test]
        fn test_index_normalization_idempotent(prefix in r"([a-z0-9_-]{1,8}/){0,3}") {
            // '', 'index.html', and '/index.html' under the same prefix all
            // resolve to the identical path.
            let registry = fixture();
            let pip = registry.project("pip").unwrap();
            let config = ServeConfig::shared("readthedocs.org");
            let resolver = Resolver::new(&config, &registry);

            let spellings = [
                format!("{prefix}index.html"),
                format!("/{prefix}index.html"),
                prefix.clone(),
            ];
            let paths: Vec<_> = spellings
                .iter()
                .map(|f| {
                    resolver
                        .resolve_path(&pip, f, &ResolveOptions::default())
                        .unwrap()
                })
                .collect();
            prop_assert_eq!(&paths[0], &paths[1]);
            prop_assert_eq!(&paths[0], &paths[2]);
            prop_assert!(paths[0].ends_with('/'));
        }

        #[test]
        fn test_domain_mode_collapses_serving_modes(filename in r"[a-z0-9./_-]{0,40}") {
            let registry = fixture();
            let pip = registry.project("pip").unwrap();
            let options = ResolveOptions::default().with_cname(true);

            let shared = ServeConfig::shared("readthedocs.org");
            let subdomain = ServeConfig::subdomain("readthedocs.org");
            let path_shared = Resolver::new(&shared, &registry)
                .resolve_path(&pip, &filename, &options)
                .unwrap();
            let path_subdomain = Resolver::new(&subdomain, &registry)
                .resolve_path(&pip, &filename, &options)
                .unwrap();
            prop_assert_eq!(path_shared, path_subdomain);
        }

        #[test]
        fn test_single_version_never_emits_version_segment(
            version in r"[a-z0-9.-]{1,12}",
            by_attribute in any::<bool>(),
        ) {
            let registry = fixture();
            let mut pip = registry.project("pip").unwrap();
            let mut options = ResolveOptions::default().with_version(version);
            if by_attribute {
                pip.single_version = true;
            } else {
                options = options.with_single_version(true);
            }

            let config = ServeConfig::shared("readthedocs.org");
            let resolver = Resolver::new(&config, &registry);
            let path = resolver.resolve_path(&pip, "", &options).unwrap();
            prop_assert_eq!(path, "/docs/pip/");
        }
    }
}
