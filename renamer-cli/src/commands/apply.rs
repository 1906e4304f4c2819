use anyhow::Result;

use renamer_core::{execute_batch, BatchOutcome, RenameHost, RenameOptions};

use super::{RuleArgs, SourceArgs, Sources};
use crate::hosts::WithProgress;
use crate::output::OutputWriter;

pub fn run(
    rules: &RuleArgs,
    sources: &SourceArgs,
    commit: bool,
    dry_run: bool,
    format: &crate::OutputFormat,
) -> Result<()> {
    apply_sources(rules.resolve()?, sources, commit, dry_run, format)
}

/// Commit every group in `sources` with already resolved `options`
fn apply_sources(
    mut options: RenameOptions,
    sources: &SourceArgs,
    commit: bool,
    dry_run: bool,
    format: &crate::OutputFormat,
) -> Result<()> {
    if commit {
        options.dry_run = false;
    }
    if dry_run {
        options.dry_run = true;
    }

    let mut sources = Sources::load(sources)?;
    let writer = OutputWriter::new(format);

    let summary = sources.summary();
    tracing::info!("{}", summary.describe());
    writer.write_selection(&summary)?;

    let show_progress = matches!(format, crate::OutputFormat::Text);
    let mut failed = 0;

    if let Some((folder, assets)) = &mut sources.assets {
        let outcome = commit_group(assets.as_slice(), &options, folder, show_progress);
        failed += failure_count(&outcome);
        writer.write_outcome(&outcome)?;
    }

    if let Some((scene, actors)) = &mut sources.actors {
        let outcome = commit_group(actors.as_slice(), &options, scene, show_progress);
        failed += failure_count(&outcome);
        scene.save()?;
        writer.write_outcome(&outcome)?;
    }

    if failed > 0 {
        anyhow::bail!("{} rename(s) failed", failed);
    }

    Ok(())
}

fn commit_group<H>(
    items: &[H::Item],
    options: &RenameOptions,
    host: &mut H,
    show_progress: bool,
) -> BatchOutcome
where
    H: RenameHost,
{
    let mut host = if show_progress && !options.dry_run && options.applies_to(host.group()) {
        WithProgress::new(host, items.len())
    } else {
        WithProgress::hidden(host)
    };

    execute_batch(items, options, &mut host)
}

fn failure_count(outcome: &BatchOutcome) -> usize {
    outcome.result().map_or(0, |result| result.failure_count)
}
