use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use renamer_core::{ItemGroup, NamedItem, RenameHost};

/// A file treated as an asset: its name is the file stem, its container is the
/// directory it lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAsset {
    path: PathBuf,
    name: String,
}

impl FileAsset {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn container(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path the asset would have under `new_name`, keeping its extension
    pub fn renamed_path(&self, new_name: &str) -> PathBuf {
        let file_name = match self.path.extension() {
            Some(ext) => format!("{}.{}", new_name, ext.to_string_lossy()),
            None => new_name.to_string(),
        };
        self.container().join(file_name)
    }
}

impl NamedItem for FileAsset {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        self.path.is_file()
    }
}

/// Stem -> files carrying it, for one directory
type StemIndex = HashMap<String, Vec<PathBuf>>;

/// A directory of files acting as the asset registry.
///
/// Two files in one directory may not share a stem, whatever their extensions.
/// Previews check a cached stem index per directory, rebuilt by
/// `refresh_index` after a batch renames something. Renames rescan the
/// directory so earlier renames in the same batch are seen.
pub struct AssetFolder {
    root: PathBuf,
    recursive: bool,
    pattern: Option<glob::Pattern>,
    index: HashMap<PathBuf, StemIndex>,
}

impl AssetFolder {
    pub fn open(root: PathBuf, pattern: Option<&str>, recursive: bool) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Not a directory: {}", root.display());
        }

        let pattern = pattern
            .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid glob pattern: {}", p)))
            .transpose()?;

        let mut folder = Self {
            root,
            recursive,
            pattern,
            index: HashMap::new(),
        };
        folder.rebuild_index()?;
        Ok(folder)
    }

    /// All files under the root matching the pattern, sorted by path
    pub fn collect_assets(&self) -> Result<Vec<FileAsset>> {
        let mut assets = Vec::new();

        for path in self.walk()? {
            if self.matches_pattern(&path) {
                assets.push(FileAsset::new(path));
            }
        }

        Ok(assets)
    }

    /// Resolve explicitly selected files relative to the root. Missing files
    /// stay in the list as stale handles.
    pub fn select(&self, files: &[PathBuf]) -> Vec<FileAsset> {
        files
            .iter()
            .map(|file| {
                if file.is_absolute() {
                    FileAsset::new(file.clone())
                } else {
                    FileAsset::new(self.root.join(file))
                }
            })
            .collect()
    }

    fn walk(&self) -> Result<Vec<PathBuf>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Failed to scan {}", self.root.display()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn matches_pattern(&self, path: &Path) -> bool {
        match (&self.pattern, path.file_name()) {
            (Some(pattern), Some(name)) => pattern.matches(&name.to_string_lossy()),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    fn rebuild_index(&mut self) -> Result<()> {
        self.index.clear();

        for path in self.walk()? {
            let asset = FileAsset::new(path);
            self.index
                .entry(asset.container().to_path_buf())
                .or_default()
                .entry(asset.name)
                .or_default()
                .push(asset.path);
        }

        tracing::debug!(
            "Indexed {} director{} under {}",
            self.index.len(),
            if self.index.len() == 1 { "y" } else { "ies" },
            self.root.display()
        );
        Ok(())
    }
}

/// Another file in `dir` (other than `except`) whose stem is `stem`
fn stem_holder(dir: &Path, stem: &str, except: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to scan {}", dir.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to scan {}", dir.display()))?
            .path();
        if path == except || !path.is_file() {
            continue;
        }
        if path.file_stem().is_some_and(|s| s.to_string_lossy() == stem) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

impl RenameHost for AssetFolder {
    type Item = FileAsset;
    type Error = anyhow::Error;

    fn group(&self) -> ItemGroup {
        ItemGroup::Asset
    }

    fn name_exists(&self, item: &FileAsset, candidate: &str) -> bool {
        self.index
            .get(item.container())
            .and_then(|stems| stems.get(candidate))
            .is_some_and(|paths| paths.iter().any(|p| *p != item.path))
    }

    fn rename(&mut self, item: &FileAsset, new_name: &str) -> Result<()> {
        if new_name.is_empty() {
            anyhow::bail!("new name is empty");
        }

        let target = item.renamed_path(new_name);
        if target == item.path {
            return Ok(());
        }
        if let Some(holder) = stem_holder(item.container(), new_name, &item.path)? {
            anyhow::bail!("name already taken by {}", holder.display());
        }

        fs::rename(&item.path, &target).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                item.path.display(),
                target.display()
            )
        })
    }

    fn refresh_index(&mut self) {
        if let Err(e) = self.rebuild_index() {
            tracing::warn!("Failed to refresh asset index: {:#}", e);
        }
    }
}
