use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a single item in a batch was not renamed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    #[error("unresolvable item")]
    Unresolvable,

    #[error("rename operation failed{}", detail_suffix(.detail))]
    RenameFailed { detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// A single failed item, identified by its position in the input list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameFailure {
    pub index: usize,
    pub name: String,
    pub reason: FailureReason,
}

impl fmt::Display for RenameFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} '{}': {}", self.index, self.name, self.reason)
    }
}

/// Result of one `apply` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub success_count: usize,
    pub failure_count: usize,

    /// Failed items in input order
    pub failures: Vec<RenameFailure>,

    /// Set when at least one rename succeeded and cached name indexes are stale
    pub index_refresh_requested: bool,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, index: usize, name: impl Into<String>, reason: FailureReason) {
        self.failure_count += 1;
        self.failures.push(RenameFailure {
            index,
            name: name.into(),
            reason,
        });
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }

    /// Format result for display
    pub fn format_summary(&self) -> String {
        let mut output = String::new();

        output.push_str("========================================\n");
        output.push_str("          RENAME BATCH RESULT\n");
        output.push_str("========================================\n\n");

        if self.is_success() {
            output.push_str("✅ Batch completed successfully\n\n");
        } else {
            output.push_str("⚠️  Batch completed with failures\n\n");
        }

        output.push_str(&format!(
            "📊 {} item{} processed\n",
            self.total(),
            if self.total() == 1 { "" } else { "s" }
        ));
        output.push_str(&format!("✅ {} renamed\n", self.success_count));

        if self.failure_count > 0 {
            output.push_str(&format!("❌ {} failed\n", self.failure_count));
            output.push_str("\nFailures:\n");
            for failure in &self.failures {
                output.push_str(&format!("   {}\n", failure));
            }
        }

        output.push_str("\n========================================\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(FailureReason::Unresolvable.to_string(), "unresolvable item");
        assert_eq!(
            FailureReason::RenameFailed { detail: None }.to_string(),
            "rename operation failed"
        );
        assert_eq!(
            FailureReason::RenameFailed {
                detail: Some("target exists".to_string())
            }
            .to_string(),
            "rename operation failed: target exists"
        );
    }

    #[test]
    fn test_counts_and_summary() {
        let mut result = BatchResult::new();
        result.record_success();
        result.record_failure(1, "Crate", FailureReason::Unresolvable);
        result.record_success();

        assert_eq!(result.total(), 3);
        assert!(!result.is_success());

        let summary = result.format_summary();
        assert!(summary.contains("3 items processed"));
        assert!(summary.contains("2 renamed"));
        assert!(summary.contains("1 failed"));
        assert!(summary.contains("#1 'Crate': unresolvable item"));
    }

    #[test]
    fn test_serializes_reason_with_kind_tag() {
        let mut result = BatchResult::new();
        result.record_failure(
            0,
            "Barrel",
            FailureReason::RenameFailed {
                detail: Some("locked".to_string()),
            },
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["failures"][0]["reason"]["kind"], "rename_failed");
        assert_eq!(json["failures"][0]["reason"]["detail"], "locked");
    }
}
