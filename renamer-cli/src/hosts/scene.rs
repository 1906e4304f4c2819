use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use renamer_core::{ItemGroup, NamedItem, RenameHost};

/// One actor in a scene manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: String,
    pub label: String,

    /// Actors only collide with labels in the same world
    #[serde(default = "default_world")]
    pub world: String,
}

fn default_world() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub actors: Vec<ActorRecord>,
}

/// Reference to an actor by id, with the label it had when selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneActor {
    id: String,
    label: String,
    resolved: bool,
}

impl NamedItem for SceneActor {
    fn name(&self) -> &str {
        &self.label
    }

    fn is_valid(&self) -> bool {
        self.resolved
    }
}

/// A scene loaded from a JSON manifest
pub struct Scene {
    path: PathBuf,
    manifest: SceneManifest,
    dirty: bool,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene: {}", path.display()))?;
        let manifest: SceneManifest = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scene: {}", path.display()))?;

        tracing::debug!("Loaded {} actor(s) from {}", manifest.actors.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            manifest,
            dirty: false,
        })
    }

    /// Every actor in manifest order
    pub fn select_all(&self) -> Vec<SceneActor> {
        self.manifest
            .actors
            .iter()
            .map(|record| SceneActor {
                id: record.id.clone(),
                label: record.label.clone(),
                resolved: true,
            })
            .collect()
    }

    /// Actors by id, in the order given. Unknown ids become stale handles.
    pub fn select(&self, ids: &[String]) -> Vec<SceneActor> {
        ids.iter()
            .map(|id| match self.find(id) {
                Some(record) => SceneActor {
                    id: record.id.clone(),
                    label: record.label.clone(),
                    resolved: true,
                },
                None => SceneActor {
                    id: id.clone(),
                    label: id.clone(),
                    resolved: false,
                },
            })
            .collect()
    }

    /// Write the manifest back if any label changed
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let contents = serde_json::to_string_pretty(&self.manifest)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write scene: {}", self.path.display()))?;
        self.dirty = false;
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&ActorRecord> {
        self.manifest.actors.iter().find(|a| a.id == id)
    }
}

impl RenameHost for Scene {
    type Item = SceneActor;
    type Error = anyhow::Error;

    fn group(&self) -> ItemGroup {
        ItemGroup::Actor
    }

    fn name_exists(&self, item: &SceneActor, candidate: &str) -> bool {
        let Some(world) = self.find(&item.id).map(|a| a.world.as_str()) else {
            return false;
        };

        self.manifest
            .actors
            .iter()
            .any(|other| other.id != item.id && other.world == world && other.label == candidate)
    }

    fn rename(&mut self, item: &SceneActor, new_name: &str) -> Result<()> {
        let record = self
            .manifest
            .actors
            .iter_mut()
            .find(|a| a.id == item.id)
            .ok_or_else(|| anyhow::anyhow!("actor '{}' is no longer in the scene", item.id))?;

        record.label = new_name.to_string();
        self.dirty = true;
        Ok(())
    }
}
