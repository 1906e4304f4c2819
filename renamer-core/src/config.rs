use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenameError, Result};
use crate::options::RenameOptions;

/// File name of the project-level preset
pub const PROJECT_PRESET_FILE: &str = "renamer.toml";

/// Resolves a `RenameOptions` preset from layered TOML files.
///
/// **Priority (highest to lowest):**
/// 1. An explicit preset file (`--preset`)
/// 2. `./renamer.toml` (project preset)
/// 3. `<config dir>/renamer/config.toml` (global user preset)
/// 4. Built-in defaults
///
/// Layers merge per field: a project preset that only sets `prefix` keeps
/// every other field from the global preset.
#[derive(Debug, Clone)]
pub struct PresetLoader {
    global: Option<PathBuf>,
    project: Option<PathBuf>,
    explicit: Option<PathBuf>,
}

impl Default for PresetLoader {
    fn default() -> Self {
        Self {
            global: global_preset_path(),
            project: Some(PathBuf::from(PROJECT_PRESET_FILE)),
            explicit: None,
        }
    }
}

impl PresetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader that only reads the given layers
    pub fn with_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            global,
            project,
            explicit: None,
        }
    }

    pub fn explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn load(&self) -> Result<RenameOptions> {
        let mut merged = toml::Table::new();

        for path in [&self.global, &self.project].into_iter().flatten() {
            if path.exists() {
                tracing::info!("Loading preset from: {}", path.display());
                merged.extend(read_table(path)?);
            }
        }

        // An explicit preset must exist
        if let Some(path) = &self.explicit {
            tracing::info!("Loading preset from: {}", path.display());
            merged.extend(read_table(path)?);
        }

        let path = self
            .explicit
            .clone()
            .or_else(|| self.project.clone())
            .unwrap_or_default();

        toml::Value::Table(merged)
            .try_into()
            .map_err(|source| RenameError::ConfigParse { path, source })
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let contents = fs::read_to_string(path).map_err(|source| RenameError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    contents.parse::<toml::Table>().map_err(|source| RenameError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// `<config dir>/renamer/config.toml`
pub fn global_preset_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("renamer").join("config.toml"))
}

/// Write `options` as a TOML preset, creating parent directories
pub fn save_preset(options: &RenameOptions, path: &Path) -> Result<()> {
    let contents = options.to_toml_string()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RenameError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, contents).map_err(|source| RenameError::Io {
        path: path.to_path_buf(),
        source,
    })
}
