pub mod apply;
pub mod defaults;
pub mod preview;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use renamer_core::{CaseOp, PresetLoader, RenameOptions};

use crate::hosts::{AssetFolder, FileAsset, Scene, SceneActor};
use crate::output::SelectionSummary;

/// Rename rules. Every flag overrides the matching field of the loaded preset.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Preset file (defaults to ./renamer.toml layered over the global preset)
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Text prepended to every name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Text appended to every name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Case-sensitive text to find (empty disables replacement)
    #[arg(long)]
    pub find: Option<String>,

    /// Replacement for every occurrence of --find
    #[arg(long)]
    pub replace: Option<String>,

    /// Append a running number to each name
    #[arg(long, conflicts_with = "no_numbering")]
    pub numbering: bool,

    /// Do not append a running number
    #[arg(long)]
    pub no_numbering: bool,

    /// Number given to the first item
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i32>,

    /// Minimum number of digits (values below 1 count as 1)
    #[arg(long, allow_negative_numbers = true)]
    pub padding: Option<i32>,

    /// Case transform: none, upper, lower, capitalize-first
    #[arg(long = "case")]
    pub case_op: Option<CaseOp>,

    /// Leave assets untouched
    #[arg(long)]
    pub no_assets: bool,

    /// Leave actors untouched
    #[arg(long)]
    pub no_actors: bool,
}

impl RuleArgs {
    pub fn resolve(&self) -> Result<RenameOptions> {
        self.resolve_with(PresetLoader::new())
    }

    /// Load the preset layers of `loader` (plus `--preset`), then overlay the flags
    pub fn resolve_with(&self, loader: PresetLoader) -> Result<RenameOptions> {
        let base = loader
            .explicit(self.preset.clone())
            .load()
            .context("Failed to load rename preset")?;
        Ok(self.apply_to(base))
    }

    /// Overlay the flags onto `options`
    pub fn apply_to(&self, mut options: RenameOptions) -> RenameOptions {
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            options.suffix = suffix.clone();
        }
        if let Some(find) = &self.find {
            options.find = find.clone();
        }
        if let Some(replace) = &self.replace {
            options.replace = replace.clone();
        }
        if self.numbering {
            options.use_numbering = true;
        }
        if self.no_numbering {
            options.use_numbering = false;
        }
        if let Some(start) = self.start {
            options.start_number = start;
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }
        if let Some(case_op) = self.case_op {
            options.case_op = case_op;
        }
        if self.no_assets {
            options.apply_to_assets = false;
        }
        if self.no_actors {
            options.apply_to_actors = false;
        }
        options
    }
}

/// Where the items to rename come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory whose files are renamed as assets
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Only files whose name matches this glob (e.g. "*.png")
    #[arg(short = 'g', long, requires = "dir")]
    pub glob: Option<String>,

    /// Include files in subdirectories
    #[arg(short = 'r', long, requires = "dir")]
    pub recursive: bool,

    /// Explicit files to rename, relative to --dir
    #[arg(long = "file", requires = "dir")]
    pub files: Vec<PathBuf>,

    /// JSON scene manifest whose actors are renamed
    #[arg(short = 's', long)]
    pub scene: Option<PathBuf>,

    /// Actor ids to rename (defaults to every actor in the scene)
    #[arg(long, value_delimiter = ',', requires = "scene")]
    pub select: Vec<String>,
}

/// Loaded hosts together with the items selected from each
pub struct Sources {
    pub assets: Option<(AssetFolder, Vec<FileAsset>)>,
    pub actors: Option<(Scene, Vec<SceneActor>)>,
}

impl Sources {
    pub fn load(args: &SourceArgs) -> Result<Self> {
        if args.dir.is_none() && args.scene.is_none() {
            anyhow::bail!("Nothing to rename: pass --dir and/or --scene");
        }

        let assets = match &args.dir {
            Some(dir) => {
                let folder = AssetFolder::open(dir.clone(), args.glob.as_deref(), args.recursive)?;
                let items = if args.files.is_empty() {
                    folder.collect_assets()?
                } else {
                    folder.select(&args.files)
                };
                Some((folder, items))
            }
            None => None,
        };

        let actors = match &args.scene {
            Some(path) => {
                let scene = Scene::load(path)?;
                let items = if args.select.is_empty() {
                    scene.select_all()
                } else {
                    scene.select(&args.select)
                };
                Some((scene, items))
            }
            None => None,
        };

        Ok(Self { assets, actors })
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            assets: self.assets.as_ref().map_or(0, |(_, items)| items.len()),
            actors: self.actors.as_ref().map_or(0, |(_, items)| items.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_override_preset_fields() {
        let args = RuleArgs {
            prefix: Some("SM_".to_string()),
            no_numbering: true,
            padding: Some(0),
            case_op: Some(CaseOp::Lower),
            no_actors: true,
            ..RuleArgs::default()
        };

        let base = RenameOptions {
            suffix: "_keep".to_string(),
            ..RenameOptions::default()
        };
        let options = args.apply_to(base);

        assert_eq!(options.prefix, "SM_");
        assert_eq!(options.suffix, "_keep");
        assert!(!options.use_numbering);
        assert_eq!(options.padding, 0);
        assert_eq!(options.case_op, CaseOp::Lower);
        assert!(options.apply_to_assets);
        assert!(!options.apply_to_actors);
    }

    #[test]
    fn test_no_flags_keep_preset() {
        let base = RenameOptions {
            find: "old".to_string(),
            replace: "new".to_string(),
            ..RenameOptions::default()
        };
        assert_eq!(RuleArgs::default().apply_to(base.clone()), base);
    }

    #[test]
    fn test_resolve_with_isolated_loader() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let project = temp.path().join("renamer.toml");
        std::fs::write(&project, "prefix = \"SM_\"\npadding = 4\n")?;

        let args = RuleArgs {
            padding: Some(1),
            ..RuleArgs::default()
        };
        let options = args.resolve_with(PresetLoader::with_paths(None, Some(project)))?;

        assert_eq!(options.prefix, "SM_");
        assert_eq!(options.padding, 1);
        Ok(())
    }

    #[test]
    fn test_sources_require_something() {
        assert!(Sources::load(&SourceArgs::default()).is_err());
    }
}
