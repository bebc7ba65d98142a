use serde::Serialize;

/// Record of a single key rename applied during the upgrade
#[derive(Debug, Clone, Serialize)]
pub struct RenamedKey {
    /// Dot-notation path of the enclosing object (empty string at the root)
    pub path: String,
    pub old_key: String,
    pub new_key: String,
}

/// Record of a single key (and its value) removed during the upgrade
#[derive(Debug, Clone, Serialize)]
pub struct DroppedKey {
    /// Dot-notation path of the enclosing object (empty string at the root)
    pub path: String,
    pub key: String,
}

/// Accumulated record of everything the upgrade changed in the document
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpgradeReport {
    pub renamed: Vec<RenamedKey>,
    pub dropped: Vec<DroppedKey>,
}

impl UpgradeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rename(&mut self, path: &str, old_key: &str, new_key: &str) {
        self.renamed.push(RenamedKey {
            path: path.to_string(),
            old_key: old_key.to_string(),
            new_key: new_key.to_string(),
        });
    }

    pub fn record_drop(&mut self, path: &str, key: &str) {
        self.dropped.push(DroppedKey {
            path: path.to_string(),
            key: key.to_string(),
        });
    }

    /// True when the input document was already in the v3 schema
    pub fn is_noop(&self) -> bool {
        self.renamed.is_empty() && self.dropped.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.renamed.len() + self.dropped.len()
    }

    /// Format the report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Key Migration: v2 → v3 ===\n");

        if self.is_noop() {
            output.push_str("  ℹ No v2 keys found; configuration is already in v3 format\n");
            return output;
        }

        for rename in &self.renamed {
            output.push_str(&format!(
                "  ✓ Renamed: {} → {}\n",
                join_path(&rename.path, &rename.old_key),
                rename.new_key
            ));
        }
        for removed in &self.dropped {
            output.push_str(&format!(
                "  ✓ Removed: {} (no v3 equivalent)\n",
                join_path(&removed.path, &removed.key)
            ));
        }

        output.push_str(&format!(
            "  ℹ {} change(s) applied: {} renamed, {} removed\n",
            self.total_changes(),
            self.renamed.len(),
            self.dropped.len()
        ));

        output
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_noop() {
        let report = UpgradeReport::new();
        assert!(report.is_noop());
        assert_eq!(report.total_changes(), 0);
        assert!(report.format_console().contains("already in v3 format"));
    }

    #[test]
    fn test_report_records_changes() {
        let mut report = UpgradeReport::new();
        report.record_rename("descriptions.0", "dataType", "datatype");
        report.record_drop("descriptions.0", "intendedFor");

        assert!(!report.is_noop());
        assert_eq!(report.total_changes(), 2);
        assert_eq!(report.renamed[0].new_key, "datatype");
        assert_eq!(report.dropped[0].key, "intendedFor");
    }

    #[test]
    fn test_console_format_uses_dot_paths() {
        let mut report = UpgradeReport::new();
        report.record_rename("descriptions.2", "modalityLabel", "suffix");
        report.record_drop("", "intendedFor");

        let output = report.format_console();
        assert!(output.contains("Renamed: descriptions.2.modalityLabel → suffix"));
        assert!(output.contains("Removed: intendedFor"));
        assert!(output.contains("2 change(s) applied: 1 renamed, 1 removed"));
    }
}
