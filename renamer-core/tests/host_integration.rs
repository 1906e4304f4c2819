use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use renamer_core::{
    execute_batch, BatchOutcome, BatchRenamer, FailureReason, ItemGroup, NamedItem, RenameHost,
    RenameOptions,
};

/// Handle into the in-memory registry below
#[derive(Debug, Clone)]
struct Handle {
    id: u32,
    name: String,
    live: bool,
}

impl NamedItem for Handle {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        self.live
    }
}

#[derive(Default)]
struct Registry {
    names: BTreeMap<u32, String>,
    reject: Vec<u32>,
    rename_calls: usize,
    refreshes: usize,
}

impl Registry {
    fn with(names: &[(u32, &str)]) -> Self {
        Self {
            names: names.iter().map(|(id, n)| (*id, n.to_string())).collect(),
            ..Self::default()
        }
    }

    fn handles(&self) -> Vec<Handle> {
        self.names
            .iter()
            .map(|(id, name)| Handle {
                id: *id,
                name: name.clone(),
                live: true,
            })
            .collect()
    }
}

impl RenameHost for Registry {
    type Item = Handle;
    type Error = String;

    fn group(&self) -> ItemGroup {
        ItemGroup::Asset
    }

    fn name_exists(&self, item: &Handle, candidate: &str) -> bool {
        self.names
            .iter()
            .any(|(id, name)| *id != item.id && name == candidate)
    }

    fn rename(&mut self, item: &Handle, new_name: &str) -> Result<(), String> {
        self.rename_calls += 1;
        if self.reject.contains(&item.id) {
            return Err(format!("{} is read-only", item.name));
        }
        self.names.insert(item.id, new_name.to_string());
        Ok(())
    }

    fn refresh_index(&mut self) {
        self.refreshes += 1;
    }
}

fn committing(options: RenameOptions) -> RenameOptions {
    RenameOptions {
        dry_run: false,
        ..options
    }
}

#[test]
fn test_dry_run_never_renames() {
    let mut registry = Registry::with(&[(1, "Rock"), (2, "Tree")]);
    let items = registry.handles();
    let options = RenameOptions::default();
    assert!(options.dry_run);

    for _ in 0..3 {
        let outcome = execute_batch(items.as_slice(), &options, &mut registry);
        match outcome {
            BatchOutcome::DryRun { entries, .. } => assert_eq!(entries.len(), 2),
            other => panic!("expected dry run, got {:?}", other),
        }
    }

    assert_eq!(registry.rename_calls, 0);
    assert_eq!(registry.refreshes, 0);
    assert_eq!(registry.names[&1], "Rock");
}

#[test]
fn test_disabled_group_is_skipped() {
    let mut registry = Registry::with(&[(1, "Rock")]);
    let items = registry.handles();
    let options = committing(RenameOptions {
        apply_to_assets: false,
        ..RenameOptions::default()
    });

    let outcome = execute_batch(items.as_slice(), &options, &mut registry);
    assert_eq!(outcome, BatchOutcome::Skipped { group: ItemGroup::Asset });
    assert_eq!(registry.rename_calls, 0);
}

#[test]
fn test_partial_failure_accounting() {
    let mut registry = Registry::with(&[(0, "a"), (1, "b"), (2, "c"), (3, "d"), (4, "e")]);
    registry.reject = vec![1, 3];
    let items = registry.handles();
    let options = committing(RenameOptions {
        prefix: "X_".to_string(),
        ..RenameOptions::identity()
    });

    let outcome = execute_batch(items.as_slice(), &options, &mut registry);
    let result = outcome.result().expect("batch should be applied");

    assert_eq!(result.success_count, 3);
    assert_eq!(result.failure_count, 2);
    assert_eq!(result.failures[0].index, 1);
    assert_eq!(result.failures[1].index, 3);
    assert_eq!(
        result.failures[0].reason,
        FailureReason::RenameFailed {
            detail: Some("b is read-only".to_string())
        }
    );
    assert_eq!(registry.refreshes, 1);
    assert_eq!(registry.names[&0], "X_a");
    assert_eq!(registry.names[&1], "b");
}

#[test]
fn test_all_failures_skip_refresh() {
    let mut registry = Registry::with(&[(0, "a")]);
    registry.reject = vec![0];
    let items = registry.handles();
    let options = committing(RenameOptions::default());

    let outcome = execute_batch(items.as_slice(), &options, &mut registry);
    assert_eq!(outcome.result().unwrap().failure_count, 1);
    assert_eq!(registry.refreshes, 0);
}

#[test]
fn test_stale_handle_keeps_numbering_stable() {
    let mut registry = Registry::with(&[(0, "A"), (1, "B"), (2, "C"), (3, "D")]);
    let mut items = registry.handles();
    items[2].live = false;

    let options = RenameOptions {
        start_number: 1,
        padding: 2,
        ..RenameOptions::default()
    };

    let entries = BatchRenamer::new(&options).preview_with(items.as_slice(), &registry);
    let previewed: Vec<_> = entries
        .iter()
        .map(|e| (e.old_name.as_str(), e.new_name.as_str()))
        .collect();
    assert_eq!(previewed, vec![("A", "A_01"), ("B", "B_02"), ("D", "D_04")]);

    let result = BatchRenamer::new(&options).apply_with(items.as_slice(), &mut registry);
    assert_eq!(result.success_count, 3);
    assert_eq!(result.failures[0].index, 2);
    assert_eq!(result.failures[0].reason, FailureReason::Unresolvable);
    assert_eq!(registry.names[&3], "D_04");
}

#[test]
fn test_preview_detects_collision_with_sibling() {
    let registry = Registry::with(&[(0, "Door"), (1, "SM_Door")]);
    let items = vec![registry.handles()[0].clone()];
    let options = RenameOptions {
        prefix: "SM_".to_string(),
        ..RenameOptions::identity()
    };

    let entries = BatchRenamer::new(&options).preview_with(items.as_slice(), &registry);
    assert!(entries[0].collision);
}

#[test]
fn test_preview_matches_apply_names() {
    let mut registry = Registry::with(&[(0, "wall"), (1, "floor")]);
    let items = registry.handles();
    let options = committing(RenameOptions {
        find: "l".to_string(),
        replace: "L".to_string(),
        start_number: 7,
        padding: 3,
        ..RenameOptions::default()
    });

    let previewed: Vec<String> = BatchRenamer::new(&options)
        .preview_with(items.as_slice(), &registry)
        .into_iter()
        .map(|e| e.new_name)
        .collect();

    execute_batch(items.as_slice(), &options, &mut registry);
    let applied: Vec<String> = registry.names.values().cloned().collect();

    assert_eq!(previewed, vec!["waLL_007", "fLoor_008"]);
    assert_eq!(applied, previewed);
}
