use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RenameError;

/// Case transformation applied after find/replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOp {
    #[default]
    None,
    Upper,
    Lower,
    CapitalizeFirst,
}

impl CaseOp {
    pub fn apply(self, input: &str) -> String {
        match self {
            CaseOp::None => input.to_string(),
            CaseOp::Upper => input.to_uppercase(),
            CaseOp::Lower => input.to_lowercase(),
            CaseOp::CapitalizeFirst => {
                let mut chars = input.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl FromStr for CaseOp {
    type Err = RenameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "None" => Ok(CaseOp::None),
            "upper" | "UPPERCASE" => Ok(CaseOp::Upper),
            "lower" | "lowercase" => Ok(CaseOp::Lower),
            "capitalize" | "capitalize-first" | "capitalize_first" | "CapitalizeFirst" => {
                Ok(CaseOp::CapitalizeFirst)
            }
            other => Err(RenameError::InvalidOption(format!(
                "unknown case operation '{}' (expected none, upper, lower, capitalize-first)",
                other
            ))),
        }
    }
}

impl fmt::Display for CaseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CaseOp::None => "none",
            CaseOp::Upper => "upper",
            CaseOp::Lower => "lower",
            CaseOp::CapitalizeFirst => "capitalize-first",
        };
        f.write_str(label)
    }
}

/// The two kinds of renamable entity a host can hand to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemGroup {
    /// Registry-backed assets living in a container path
    Asset,
    /// Live scene objects identified by a label
    Actor,
}

impl fmt::Display for ItemGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemGroup::Asset => f.write_str("asset"),
            ItemGroup::Actor => f.write_str("actor"),
        }
    }
}

/// All text-transformation rules for one batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    /// Prepended to every new name
    #[serde(default)]
    pub prefix: String,

    /// Appended after the numbering segment
    #[serde(default)]
    pub suffix: String,

    /// Case-sensitive substring to search for (empty disables replacement)
    #[serde(default)]
    pub find: String,

    /// Replacement for every occurrence of `find`
    #[serde(default)]
    pub replace: String,

    /// Append `_<number>` to each name
    #[serde(default = "default_use_numbering")]
    pub use_numbering: bool,

    /// Number given to the item at index 0
    #[serde(default = "default_start_number")]
    pub start_number: i32,

    /// Minimum digit count; anything below 1 is treated as 1
    #[serde(default = "default_padding")]
    pub padding: i32,

    #[serde(default)]
    pub case_op: CaseOp,

    #[serde(default = "default_apply_to_group")]
    pub apply_to_assets: bool,

    #[serde(default = "default_apply_to_group")]
    pub apply_to_actors: bool,

    /// Preview only. Checked by the caller before committing a batch.
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
}

fn default_use_numbering() -> bool {
    true
}

fn default_start_number() -> i32 {
    1
}

fn default_padding() -> i32 {
    2
}

fn default_apply_to_group() -> bool {
    true
}

fn default_dry_run() -> bool {
    true
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            find: String::new(),
            replace: String::new(),
            use_numbering: default_use_numbering(),
            start_number: default_start_number(),
            padding: default_padding(),
            case_op: CaseOp::None,
            apply_to_assets: default_apply_to_group(),
            apply_to_actors: default_apply_to_group(),
            dry_run: default_dry_run(),
        }
    }
}

impl RenameOptions {
    /// Options that leave every name untouched
    pub fn identity() -> Self {
        Self {
            use_numbering: false,
            ..Self::default()
        }
    }

    /// Padding after clamping to the one-digit floor
    pub fn effective_padding(&self) -> usize {
        self.padding.max(1) as usize
    }

    pub fn applies_to(&self, group: ItemGroup) -> bool {
        match group {
            ItemGroup::Asset => self.apply_to_assets,
            ItemGroup::Actor => self.apply_to_actors,
        }
    }

    /// Restore every field to its default value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_tool_defaults() {
        let options = RenameOptions::default();
        assert!(options.use_numbering);
        assert_eq!(options.start_number, 1);
        assert_eq!(options.padding, 2);
        assert_eq!(options.case_op, CaseOp::None);
        assert!(options.apply_to_assets);
        assert!(options.apply_to_actors);
        assert!(options.dry_run);
    }

    #[test]
    fn test_effective_padding_floor() {
        let mut options = RenameOptions::default();
        options.padding = 0;
        assert_eq!(options.effective_padding(), 1);
        options.padding = -4;
        assert_eq!(options.effective_padding(), 1);
        options.padding = 5;
        assert_eq!(options.effective_padding(), 5);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(CaseOp::CapitalizeFirst.apply(""), "");
        assert_eq!(CaseOp::CapitalizeFirst.apply("a"), "A");
        assert_eq!(CaseOp::CapitalizeFirst.apply("hello World"), "Hello World");
        assert_eq!(CaseOp::CapitalizeFirst.apply("ßig"), "SSig");
    }

    #[test]
    fn test_case_op_parsing() {
        assert_eq!("UPPERCASE".parse::<CaseOp>().unwrap(), CaseOp::Upper);
        assert_eq!("lower".parse::<CaseOp>().unwrap(), CaseOp::Lower);
        assert_eq!(
            "capitalize-first".parse::<CaseOp>().unwrap(),
            CaseOp::CapitalizeFirst
        );
        assert!("title".parse::<CaseOp>().is_err());
    }

    #[test]
    fn test_group_filter() {
        let mut options = RenameOptions::default();
        options.apply_to_actors = false;
        assert!(options.applies_to(ItemGroup::Asset));
        assert!(!options.applies_to(ItemGroup::Actor));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options = RenameOptions::from_toml_str(
            r#"
            prefix = "SM_"
            case_op = "upper"
            dry_run = false
            "#,
        )
        .unwrap();

        assert_eq!(options.prefix, "SM_");
        assert_eq!(options.case_op, CaseOp::Upper);
        assert!(!options.dry_run);
        assert_eq!(options.padding, 2);
        assert!(options.use_numbering);
    }

    #[test]
    fn test_reset() {
        let mut options = RenameOptions {
            prefix: "X".to_string(),
            padding: 9,
            dry_run: false,
            ..RenameOptions::default()
        };
        options.reset();
        assert_eq!(options, RenameOptions::default());
    }
}
