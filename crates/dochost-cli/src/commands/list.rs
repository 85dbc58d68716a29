//! `list` command implementation.

use anyhow::Result;
use dochost_core::{ProjectStore, Resolver};
use serde::Serialize;

use super::ResolverContext;
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct DomainEntry {
    host: String,
    canonical: bool,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    slug: String,
    language: String,
    single_version: bool,
    default_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    translation_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subproject_of: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    domains: Vec<DomainEntry>,
    url: String,
}

/// List inventory projects with hierarchy links and resolved root URLs.
pub fn list_projects(context: &ResolverContext, output: OutputFormat) -> Result<()> {
    let resolver = Resolver::new(&context.config, &context.registry);

    let mut entries = Vec::new();
    for project in context.registry.projects() {
        let subproject_of = context
            .registry
            .subproject_parent(project)?
            .map(|link| link.parent.slug);
        let domains = context
            .registry
            .domains(&project.slug)
            .iter()
            .map(|domain| DomainEntry {
                host: domain.host(),
                canonical: domain.canonical,
            })
            .collect();

        entries.push(ListEntry {
            slug: project.slug.clone(),
            language: project.language.clone(),
            single_version: project.single_version,
            default_version: project.default_version.clone(),
            translation_of: project.main_language_project.clone(),
            subproject_of,
            domains,
            url: resolver.smart_resolve(project)?,
        });
    }

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                let mut notes = Vec::new();
                if entry.single_version {
                    notes.push("single-version".to_string());
                }
                if let Some(main) = &entry.translation_of {
                    notes.push(format!("translation of {main}"));
                }
                if let Some(parent) = &entry.subproject_of {
                    notes.push(format!("subproject of {parent}"));
                }
                for domain in &entry.domains {
                    if domain.canonical {
                        notes.push(format!("canonical domain {}", domain.host));
                    }
                }

                let annotation = if notes.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", notes.join(", "))
                };
                println!(
                    "{} ({}){}\n   {}",
                    entry.slug, entry.language, annotation, entry.url
                );
            }
        },
    }

    Ok(())
}
