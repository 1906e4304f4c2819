use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info, warn};

use crate::generator::generate_name;
use crate::item::{NamedItem, RenameHost};
use crate::options::{ItemGroup, RenameOptions};
use crate::preview::PreviewEntry;
use crate::result::{BatchResult, FailureReason};

/// Builds previews and commits renames for one set of options.
///
/// Holds no state beyond the borrowed options, so `preview` and `apply` can be
/// called any number of times and always recompute names from scratch.
#[derive(Debug, Clone, Copy)]
pub struct BatchRenamer<'a> {
    options: &'a RenameOptions,
}

impl<'a> BatchRenamer<'a> {
    pub fn new(options: &'a RenameOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenameOptions {
        self.options
    }

    /// Preview every valid item. Invalid items produce no entry but still
    /// occupy their index, so numbering never shifts.
    ///
    /// `exists` is asked about every entry, unchanged names included, and must
    /// not count the item itself as holding the candidate name.
    pub fn preview<I, F>(&self, items: &[I], mut exists: F) -> Vec<PreviewEntry>
    where
        I: NamedItem,
        F: FnMut(&I, &str) -> bool,
    {
        let mut entries = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            if !item.is_valid() {
                debug!("Skipping invalid item at index {}", index);
                continue;
            }

            let old_name = item.name();
            let new_name = generate_name(old_name, self.options, index);

            let collision = exists(item, &new_name);

            debug!("Preview #{}: '{}' -> '{}' (collision: {})", index, old_name, new_name, collision);

            entries.push(PreviewEntry {
                index,
                old_name: old_name.to_string(),
                new_name,
                collision,
            });
        }

        entries
    }

    /// Rename every item through `rename`, recording failures instead of
    /// stopping. Does not consult `dry_run`; see [`execute_batch`].
    pub fn apply<I, F, E>(&self, items: &[I], mut rename: F) -> BatchResult
    where
        I: NamedItem,
        F: FnMut(&I, &str) -> Result<(), E>,
        E: Display,
    {
        let mut result = BatchResult::new();

        for (index, item) in items.iter().enumerate() {
            if !item.is_valid() {
                warn!("Skipping invalid item at index {}", index);
                result.record_failure(index, item.name(), FailureReason::Unresolvable);
                continue;
            }

            let old_name = item.name().to_string();
            let new_name = generate_name(&old_name, self.options, index);

            debug!("Attempting to rename '{}' -> '{}'", old_name, new_name);

            match rename(item, &new_name) {
                Ok(()) => {
                    info!("Renamed '{}' -> '{}'", old_name, new_name);
                    result.record_success();
                }
                Err(e) => {
                    warn!("Failed to rename '{}' -> '{}': {}", old_name, new_name, e);
                    result.record_failure(
                        index,
                        old_name,
                        FailureReason::RenameFailed {
                            detail: Some(e.to_string()),
                        },
                    );
                }
            }
        }

        result.index_refresh_requested = result.success_count > 0;

        info!(
            "Rename batch completed. Success: {}, Failed: {}",
            result.success_count, result.failure_count
        );

        result
    }

    pub fn preview_with<H: RenameHost>(&self, items: &[H::Item], host: &H) -> Vec<PreviewEntry> {
        self.preview(items, |item, candidate| host.name_exists(item, candidate))
    }

    /// `apply` through a host, then ask it to refresh its name index when
    /// anything was renamed
    pub fn apply_with<H: RenameHost>(&self, items: &[H::Item], host: &mut H) -> BatchResult {
        let result = self.apply(items, |item, new_name| host.rename(item, new_name));

        if result.index_refresh_requested {
            debug!("Refreshing {} index after {} rename(s)", host.group(), result.success_count);
            host.refresh_index();
        }

        result
    }
}

/// Outcome of committing one group of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// The group is switched off in the options
    Skipped { group: ItemGroup },

    /// Dry run: nothing was renamed, this is what would happen
    DryRun {
        group: ItemGroup,
        entries: Vec<PreviewEntry>,
    },

    Applied {
        group: ItemGroup,
        result: BatchResult,
    },
}

impl BatchOutcome {
    pub fn group(&self) -> ItemGroup {
        match self {
            BatchOutcome::Skipped { group }
            | BatchOutcome::DryRun { group, .. }
            | BatchOutcome::Applied { group, .. } => *group,
        }
    }

    pub fn result(&self) -> Option<&BatchResult> {
        match self {
            BatchOutcome::Applied { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Commit entry point for a host: honours the group switches and the dry-run
/// flag before any rename is attempted.
pub fn execute_batch<H: RenameHost>(
    items: &[H::Item],
    options: &RenameOptions,
    host: &mut H,
) -> BatchOutcome {
    let group = host.group();

    if !options.applies_to(group) {
        debug!("Renaming {}s is disabled, skipping {} item(s)", group, items.len());
        return BatchOutcome::Skipped { group };
    }

    let renamer = BatchRenamer::new(options);

    if options.dry_run {
        info!("Dry run: no {} rename executed", group);
        return BatchOutcome::DryRun {
            group,
            entries: renamer.preview_with(items, host),
        };
    }

    if items.is_empty() {
        return BatchOutcome::Applied {
            group,
            result: BatchResult::new(),
        };
    }

    BatchOutcome::Applied {
        group,
        result: renamer.apply_with(items, host),
    }
}
