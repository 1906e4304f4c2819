use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One row of a rename preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    /// Position of the item in the input list (also its numbering seed)
    pub index: usize,

    pub old_name: String,
    pub new_name: String,

    /// Another entity already holds `new_name` in the item's scope
    pub collision: bool,
}

impl PreviewEntry {
    pub fn is_unchanged(&self) -> bool {
        self.old_name == self.new_name
    }
}

impl fmt::Display for PreviewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old_name, self.new_name)?;
        if self.collision {
            f.write_str(" (Collision)")?;
        }
        Ok(())
    }
}

/// New names produced by more than one entry, in first-seen order.
///
/// These would collide with each other once applied even if nothing outside
/// the batch holds the name yet.
pub fn duplicate_targets(entries: &[PreviewEntry]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.new_name.as_str()).or_insert(0) += 1;
    }

    let mut duplicates = Vec::new();
    for entry in entries {
        let name = entry.new_name.as_str();
        if counts.get(name).copied().unwrap_or(0) > 1 && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }
    duplicates
}

/// Human-readable preview report
pub fn format_preview(entries: &[PreviewEntry]) -> String {
    let mut output = String::new();

    let total = entries.len();
    let collisions = entries.iter().filter(|e| e.collision).count();

    output.push_str("========================================\n");
    output.push_str("        PREVIEW (Old -> New)\n");
    output.push_str("========================================\n\n");
    output.push_str(&format!(
        "📊 {} item{}, {} collision{}\n\n",
        total,
        if total == 1 { "" } else { "s" },
        collisions,
        if collisions == 1 { "" } else { "s" }
    ));

    for entry in entries {
        output.push_str(&format!("  {}\n", entry));
    }

    let duplicates = duplicate_targets(entries);
    if !duplicates.is_empty() {
        output.push_str("\n⚠️  Names produced more than once in this batch:\n");
        for name in duplicates {
            output.push_str(&format!("   {}\n", name));
        }
    }

    output.push_str("\n========================================\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(index: usize, old: &str, new: &str, collision: bool) -> PreviewEntry {
        PreviewEntry {
            index,
            old_name: old.to_string(),
            new_name: new.to_string(),
            collision,
        }
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(entry(0, "Cube", "SM_Cube", false).to_string(), "Cube -> SM_Cube");
        assert_eq!(
            entry(0, "Cube", "Sphere", true).to_string(),
            "Cube -> Sphere (Collision)"
        );
    }

    #[test]
    fn test_duplicate_targets() {
        let entries = vec![
            entry(0, "a", "X", false),
            entry(1, "b", "Y", false),
            entry(2, "c", "X", false),
            entry(3, "d", "X", false),
        ];
        assert_eq!(duplicate_targets(&entries), vec!["X"]);
    }

    #[test]
    fn test_format_preview() {
        let entries = vec![entry(0, "Rock", "Rock_01", false), entry(2, "Tree", "Rock_01", true)];
        let report = format_preview(&entries);

        assert!(report.contains("2 items, 1 collision"));
        assert!(report.contains("Tree -> Rock_01 (Collision)"));
        assert!(report.contains("more than once"));
    }
}
