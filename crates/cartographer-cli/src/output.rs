//! Output formatting for the CLI.

use crate::cli::View;
use crate::config::OutputFormat;
use crate::error::Result;
use cartographer_domain::{
    analyze, ArchiveMetadata, DegreeEntry, Domain, Entity, GraphAnalysis, LoadDiagnostic,
    Relationship, Source, Topic,
};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the topic index.
    pub fn format_topics(&self, topics: &[Topic]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = topics
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "id": t.id,
                            "title": t.title,
                            "description": t.description,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(join_ids(topics.iter().map(|t| t.id.as_str()))),
            OutputFormat::Table => {
                if topics.is_empty() {
                    return Ok(self.colorize("No domains found.", "yellow"));
                }
                Ok(self.table(
                    &["ID", "Title", "Description"],
                    topics
                        .iter()
                        .map(|t| vec![t.id.clone(), t.title.clone(), t.description.clone()]),
                ))
            }
        }
    }

    /// Format archive metadata.
    pub fn format_metadata(&self, metadata: &ArchiveMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "created": metadata.created,
                "domains": metadata.domains,
            }))?),
            OutputFormat::Quiet => Ok(metadata.domains.join("\n")),
            OutputFormat::Table => Ok(self.banner(&format!(
                "Archive created: {}, domains: {}",
                metadata.created,
                metadata.domains.join(", ")
            ))),
        }
    }

    /// Format one view of a domain.
    pub fn format_view(&self, view: View, domain: &Domain) -> Result<String> {
        match view {
            View::Entities => self.format_entities(&domain.entities),
            View::Relationships => self.format_relationships(&domain.relationships),
            View::Sources => self.format_sources(&domain.sources),
            View::Analysis => self.format_analysis(&analyze(domain)),
            View::All => self.format_all(domain),
        }
    }

    /// Format every view of a domain.
    fn format_all(&self, domain: &Domain) -> Result<String> {
        if self.format == OutputFormat::Json {
            let analysis = analyze(domain);
            return Ok(serde_json::to_string_pretty(&serde_json::json!({
                "entities": entities_json(&domain.entities),
                "relationships": relationships_json(&domain.relationships),
                "sources": sources_json(&domain.sources),
                "analysis": analysis_json(&analysis),
            }))?);
        }

        let mut sections = Vec::with_capacity(View::SECTIONS.len());
        for view in View::SECTIONS {
            sections.push(self.format_view(view, domain)?);
        }
        Ok(sections.join("\n\n"))
    }

    /// Format entities.
    pub fn format_entities(&self, entities: &[Entity]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entities_json(entities))?),
            OutputFormat::Quiet => Ok(join_ids(entities.iter().map(|e| e.id.as_str()))),
            OutputFormat::Table => {
                let heading = self.heading("Entities");
                if entities.is_empty() {
                    return Ok(format!("{}\n{}", heading, self.colorize("No entities found.", "yellow")));
                }
                let table = self.table(
                    &["ID", "Name", "Type", "Description"],
                    entities.iter().map(|e| {
                        vec![
                            e.id.clone(),
                            e.name.clone(),
                            e.entity_type.clone(),
                            e.description.clone(),
                        ]
                    }),
                );
                Ok(format!("{}\n{}", heading, table))
            }
        }
    }

    /// Format relationships.
    pub fn format_relationships(&self, relationships: &[Relationship]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&relationships_json(
                relationships,
            ))?),
            OutputFormat::Quiet => Ok(relationships
                .iter()
                .map(|r| format!("{} {} {}", r.source, r.target, r.relationship_type))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let heading = self.heading("Relationships");
                if relationships.is_empty() {
                    return Ok(format!(
                        "{}\n{}",
                        heading,
                        self.colorize("No relationships found.", "yellow")
                    ));
                }
                let table = self.table(
                    &["Source", "", "Target", "Type", "Description"],
                    relationships.iter().map(|r| {
                        vec![
                            r.source.clone(),
                            "→".to_string(),
                            r.target.clone(),
                            r.relationship_type.clone(),
                            r.description.clone(),
                        ]
                    }),
                );
                Ok(format!("{}\n{}", heading, table))
            }
        }
    }

    /// Format sources.
    pub fn format_sources(&self, sources: &[Source]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&sources_json(sources))?),
            OutputFormat::Quiet => Ok(join_ids(sources.iter().map(|s| s.id.as_str()))),
            OutputFormat::Table => {
                let heading = self.heading("Sources");
                if sources.is_empty() {
                    return Ok(format!("{}\n{}", heading, self.colorize("No sources found.", "yellow")));
                }
                let table = self.table(
                    &["ID", "Title", "Trust", "URL"],
                    sources.iter().map(|s| {
                        vec![s.id.clone(), s.title.clone(), s.trust.clone(), s.url.clone()]
                    }),
                );
                Ok(format!("{}\n{}", heading, table))
            }
        }
    }

    /// Format a graph analysis.
    pub fn format_analysis(&self, analysis: &GraphAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis_json(analysis))?),
            OutputFormat::Quiet => Ok(join_ids(
                analysis.cluster_centers.iter().map(|d| d.id.as_str()),
            )),
            OutputFormat::Table => {
                let heading = self.heading("Graph Analysis");
                if analysis.is_empty() {
                    return Ok(format!(
                        "{}\n{}",
                        heading,
                        self.colorize("No relationships to analyze.", "yellow")
                    ));
                }

                let table = self.table(
                    &["Entity", "ID", "Connections"],
                    analysis.degrees.iter().map(|d| {
                        vec![d.label.clone(), d.id.clone(), d.degree.to_string()]
                    }),
                );

                let centers: Vec<String> = analysis
                    .cluster_centers
                    .iter()
                    .map(|d| self.banner(&format!("Cluster center: {} ({} connections)", d.label, d.degree)))
                    .collect();

                Ok(format!("{}\n{}\n{}", heading, table, centers.join("\n")))
            }
        }
    }

    /// Format a load diagnostic as a warning.
    pub fn diagnostic(&self, diagnostic: &LoadDiagnostic) -> String {
        self.warning(&diagnostic.to_string())
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a highlighted announcement.
    pub fn banner(&self, message: &str) -> String {
        self.colorize(&format!("★ {}", message), "cyan")
    }

    /// Format a section heading.
    pub fn heading(&self, title: &str) -> String {
        self.colorize(&format!("◆ {} ◆", title), "magenta")
    }

    /// Build a rounded table with a centered header row.
    fn table<I>(&self, header: &[&str], rows: I) -> String
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut builder = Builder::default();
        builder.push_record(header.iter().copied());
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

fn entities_json(entities: &[Entity]) -> Vec<serde_json::Value> {
    entities
        .iter()
        .map(|e| {
            serde_json::json!({
                "id": e.id,
                "name": e.name,
                "type": e.entity_type,
                "description": e.description,
            })
        })
        .collect()
}

fn relationships_json(relationships: &[Relationship]) -> Vec<serde_json::Value> {
    relationships
        .iter()
        .map(|r| {
            serde_json::json!({
                "source": r.source,
                "target": r.target,
                "type": r.relationship_type,
                "description": r.description,
            })
        })
        .collect()
}

fn sources_json(sources: &[Source]) -> Vec<serde_json::Value> {
    sources
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id,
                "title": s.title,
                "url": s.url,
                "trust": s.trust,
            })
        })
        .collect()
}

fn analysis_json(analysis: &GraphAnalysis) -> serde_json::Value {
    let entry = |d: &DegreeEntry| {
        serde_json::json!({
            "id": d.id,
            "label": d.label,
            "degree": d.degree,
        })
    };

    serde_json::json!({
        "degrees": analysis.degrees.iter().map(entry).collect::<Vec<_>>(),
        "cluster_centers": analysis.cluster_centers.iter().map(entry).collect::<Vec<_>>(),
        "max_degree": analysis.max_degree(),
    })
}
