use serde_json::{Map, Value};

use crate::reporter::UpgradeReport;
use crate::rules::{is_dropped_key, renamed_key};

/// Recursively upgrade a JSON document from the v2 schema to the v3 schema.
///
/// Object keys listed in the rename table are replaced in place, keys in the
/// drop set are removed together with their values, and everything else is
/// preserved: array order and length, scalar values, and the insertion order
/// of the surviving object keys.
pub fn upgrade_tree(value: &Value) -> Value {
    let mut report = UpgradeReport::new();
    upgrade_tree_with_report(value, &mut report)
}

/// Same as [`upgrade_tree`], but records every rename and removal (with the
/// dot-notation path of the enclosing object) into the given report.
pub fn upgrade_tree_with_report(value: &Value, report: &mut UpgradeReport) -> Value {
    let mut path = String::new();
    walk(value, &mut path, report)
}

fn walk(value: &Value, path: &mut String, report: &mut UpgradeReport) -> Value {
    match value {
        Value::Object(map) => {
            let mut updated = Map::with_capacity(map.len());

            for (key, nested) in map {
                // Dropped keys are skipped entirely; their values are not visited.
                if is_dropped_key(key) {
                    report.record_drop(path, key);
                    continue;
                }

                let updated_key = match renamed_key(key) {
                    Some(new_key) => {
                        report.record_rename(path, key, new_key);
                        new_key.to_string()
                    }
                    None => key.clone(),
                };

                let prev_len = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(key);
                let updated_value = walk(nested, path, report);
                path.truncate(prev_len);

                updated.insert(updated_key, updated_value);
            }

            Value::Object(updated)
        }
        Value::Array(items) => {
            let mut updated = Vec::with_capacity(items.len());

            for (index, item) in items.iter().enumerate() {
                let prev_len = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(&index.to_string());
                updated.push(walk(item, path, report));
                path.truncate(prev_len);
            }

            Value::Array(updated)
        }
        scalar => scalar.clone(),
    }
}
