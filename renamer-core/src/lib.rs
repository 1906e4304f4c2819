//! Batch renaming engine.
//!
//! Names are computed by [`generate_name`] from an item's current name, a
//! [`RenameOptions`] value and the item's position in the batch. A
//! [`BatchRenamer`] turns a list of [`NamedItem`]s into a collision-checked
//! preview and commits renames through host-supplied callbacks, collecting
//! per-item failures in a [`BatchResult`].

pub mod batch;
pub mod config;
pub mod error;
pub mod generator;
pub mod item;
pub mod options;
pub mod preview;
pub mod result;

pub use batch::{execute_batch, BatchOutcome, BatchRenamer};
pub use config::{global_preset_path, save_preset, PresetLoader, PROJECT_PRESET_FILE};
pub use error::{RenameError, Result};
pub use generator::{generate_name, numbering_segment};
pub use item::{NamedItem, RenameHost};
pub use options::{CaseOp, ItemGroup, RenameOptions};
pub use preview::{duplicate_targets, format_preview, PreviewEntry};
pub use result::{BatchResult, FailureReason, RenameFailure};
