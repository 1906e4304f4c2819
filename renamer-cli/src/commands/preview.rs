use anyhow::Result;

use renamer_core::{BatchRenamer, ItemGroup};

use super::{RuleArgs, SourceArgs, Sources};
use crate::output::OutputWriter;

pub fn run(rules: &RuleArgs, sources: &SourceArgs, format: &crate::OutputFormat) -> Result<()> {
    let options = rules.resolve()?;
    let sources = Sources::load(sources)?;
    let writer = OutputWriter::new(format);

    let summary = sources.summary();
    tracing::info!("{}", summary.describe());
    writer.write_selection(&summary)?;

    let renamer = BatchRenamer::new(&options);

    if let Some((folder, assets)) = &sources.assets {
        if options.applies_to(ItemGroup::Asset) {
            writer.write_preview(ItemGroup::Asset, &renamer.preview_with(assets.as_slice(), folder))?;
        }
    }

    if let Some((scene, actors)) = &sources.actors {
        if options.applies_to(ItemGroup::Actor) {
            writer.write_preview(ItemGroup::Actor, &renamer.preview_with(actors.as_slice(), scene))?;
        }
    }

    Ok(())
}
