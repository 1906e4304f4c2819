use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod hosts;
mod output;

use commands::{RuleArgs, SourceArgs};

#[derive(Parser)]
#[command(name = "renamer")]
#[command(author, version, long_about = None)]
#[command(
    about = "Batch rename files and scene actors",
    long_about = "Batch renaming with find/replace, case transforms, prefixes, suffixes and \
                  running numbers. Preview shows every Old -> New pair and flags names that \
                  already exist; apply commits the renames and reports per-item failures."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, markdown)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the new name of every selected item and flag collisions
    Preview {
        #[command(flatten)]
        rules: RuleArgs,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Rename the selected items (a dry run unless --commit or the preset says otherwise)
    Apply {
        #[command(flatten)]
        rules: RuleArgs,

        #[command(flatten)]
        sources: SourceArgs,

        /// Actually rename, overriding `dry_run` in the preset
        #[arg(long, conflicts_with = "dry_run")]
        commit: bool,

        /// Only show what would happen
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the default preset, or write it with --write
    Defaults {
        /// Write the preset to this file instead of printing it
        #[arg(short, long)]
        write: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "renamer=debug,renamer_core=debug"
    } else {
        "renamer=info,renamer_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Preview { rules, sources } => commands::preview::run(rules, sources, &cli.format),
        Commands::Apply {
            rules,
            sources,
            commit,
            dry_run,
        } => commands::apply::run(rules, sources, *commit, *dry_run, &cli.format),
        Commands::Defaults { write } => commands::defaults::run(write.clone(), &cli.format),
    };

    if let Err(e) = &result {
        output::OutputWriter::new(&cli.format).write_error(&format!("{:#}", e))?;
        std::process::exit(1);
    }

    Ok(())
}
