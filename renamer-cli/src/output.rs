use anyhow::Result;
use serde::Serialize;

use renamer_core::{
    duplicate_targets, format_preview, BatchOutcome, ItemGroup, PreviewEntry, RenameOptions,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// How many items of each group the user selected
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionSummary {
    pub assets: usize,
    pub actors: usize,
}

impl SelectionSummary {
    pub fn describe(&self) -> String {
        match (self.assets, self.actors) {
            (0, 0) => "No assets or actors selected".to_string(),
            (assets, 0) => format!("Selected Assets: {}", assets),
            (0, actors) => format!("Selected Actors: {}", actors),
            (assets, actors) => format!("Selected Assets: {}, Selected Actors: {}", assets, actors),
        }
    }
}

#[derive(Serialize)]
struct GroupPreview<'a> {
    group: ItemGroup,
    entries: &'a [PreviewEntry],
    duplicates: Vec<&'a str>,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: &crate::OutputFormat) -> Self {
        let format = match format {
            crate::OutputFormat::Text => OutputFormat::Text,
            crate::OutputFormat::Json => OutputFormat::Json,
            crate::OutputFormat::Markdown => OutputFormat::Markdown,
        };
        Self { format }
    }

    pub fn write_selection(&self, selection: &SelectionSummary) -> Result<()> {
        match self.format {
            // JSON output stays a single document per group
            OutputFormat::Json => {}
            OutputFormat::Text => println!("{}\n", selection.describe()),
            OutputFormat::Markdown => println!("_{}_\n", selection.describe()),
        }
        Ok(())
    }

    pub fn write_preview(&self, group: ItemGroup, entries: &[PreviewEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let preview = GroupPreview {
                    group,
                    entries,
                    duplicates: duplicate_targets(entries),
                };
                println!("{}", serde_json::to_string_pretty(&preview)?);
            }
            OutputFormat::Text => {
                println!("{}s", capitalize(group));
                if entries.is_empty() {
                    println!("  Nothing to rename.");
                } else {
                    println!("{}", format_preview(entries));
                }
            }
            OutputFormat::Markdown => {
                println!("## {}s\n", capitalize(group));
                println!("| # | Old | New | Collision |");
                println!("|---|-----|-----|-----------|");
                for entry in entries {
                    println!(
                        "| {} | `{}` | `{}` | {} |",
                        entry.index,
                        entry.old_name,
                        entry.new_name,
                        if entry.collision { "⚠️ yes" } else { "no" }
                    );
                }
                let duplicates = duplicate_targets(entries);
                if !duplicates.is_empty() {
                    println!("\n**Produced more than once:** {}", duplicates.join(", "));
                }
                println!();
            }
        }
        Ok(())
    }

    pub fn write_outcome(&self, outcome: &BatchOutcome) -> Result<()> {
        if let OutputFormat::Json = self.format {
            println!("{}", serde_json::to_string_pretty(outcome)?);
            return Ok(());
        }

        match outcome {
            BatchOutcome::Skipped { group } => {
                println!("Skipping {}s (disabled in options)", group);
            }
            BatchOutcome::DryRun { group, entries } => {
                self.write_preview(*group, entries)?;
                println!("Dry run: no rename executed.");
                println!("\n💡 Pass --commit to apply these changes");
            }
            BatchOutcome::Applied { group, result } => match self.format {
                OutputFormat::Markdown => {
                    println!("## {}s\n", capitalize(*group));
                    println!("| Metric | Value |");
                    println!("|--------|-------|");
                    println!("| Renamed | {} |", result.success_count);
                    println!("| Failed | {} |", result.failure_count);
                    if !result.failures.is_empty() {
                        println!("\n### Failures\n");
                        for failure in &result.failures {
                            println!("- {}", failure);
                        }
                    }
                    println!();
                }
                _ => {
                    println!("{}s", capitalize(*group));
                    println!("{}", result.format_summary());
                }
            },
        }
        Ok(())
    }

    pub fn write_options(&self, options: &RenameOptions) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(options)?),
            OutputFormat::Text => print!("{}", options.to_toml_string()?),
            OutputFormat::Markdown => {
                println!("```toml\n{}```", options.to_toml_string()?);
            }
        }
        Ok(())
    }

    pub fn write_error(&self, error: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct ErrorResponse {
                    error: String,
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse {
                        error: error.to_string()
                    })?
                );
            }
            OutputFormat::Text | OutputFormat::Markdown => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

fn capitalize(group: ItemGroup) -> String {
    match group {
        ItemGroup::Asset => "Asset".to_string(),
        ItemGroup::Actor => "Actor".to_string(),
    }
}
