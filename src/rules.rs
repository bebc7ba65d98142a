/// Key rename table for the dcm2bids v2 → v3 configuration schema change.
///
/// Each entry maps an old (v2) object key to its v3 replacement. The table is
/// fixed at compile time; it is not user-configurable. Note that both
/// `customEntities` and `customLabels` map to `custom_entities` — if both
/// appear as siblings the later one wins (last-write-wins), matching the
/// behavior of the upstream conversion script.
pub const KEY_RENAMES: [(&str, &str); 8] = [
    ("dataType", "datatype"),
    ("modalityLabel", "suffix"),
    ("customEntities", "custom_entities"),
    ("customLabels", "custom_entities"),
    ("sidecarChanges", "sidecar_changes"),
    ("caseSensitive", "case_sensitive"),
    ("defaceTpl", "post_op"),
    ("searchMethod", "search_method"),
];

/// Keys removed entirely from the configuration, together with their values.
/// `intendedFor` has no v3 equivalent in the config file.
pub const DROPPED_KEYS: [&str; 1] = ["intendedFor"];

/// Look up the v3 replacement for an object key, if the key is renamed.
pub fn renamed_key(key: &str) -> Option<&'static str> {
    KEY_RENAMES
        .iter()
        .find(|(old, _)| *old == key)
        .map(|(_, new)| *new)
}

/// Whether an object key is dropped outright during the upgrade.
pub fn is_dropped_key(key: &str) -> bool {
    DROPPED_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_key_known_keys() {
        assert_eq!(renamed_key("dataType"), Some("datatype"));
        assert_eq!(renamed_key("modalityLabel"), Some("suffix"));
        assert_eq!(renamed_key("defaceTpl"), Some("post_op"));
        assert_eq!(renamed_key("searchMethod"), Some("search_method"));
    }

    #[test]
    fn test_renamed_key_collision_pair_shares_target() {
        assert_eq!(renamed_key("customEntities"), Some("custom_entities"));
        assert_eq!(renamed_key("customLabels"), Some("custom_entities"));
    }

    #[test]
    fn test_renamed_key_unknown_key() {
        assert_eq!(renamed_key("descriptions"), None);
        assert_eq!(renamed_key("datatype"), None);
    }

    #[test]
    fn test_is_dropped_key() {
        assert!(is_dropped_key("intendedFor"));
        assert!(!is_dropped_key("dataType"));
        assert!(!is_dropped_key("IntendedFor"));
    }

    #[test]
    fn test_no_new_name_is_also_an_old_name() {
        // The table must be safely re-applicable to already-converted files.
        for (_, new) in KEY_RENAMES {
            assert_eq!(renamed_key(new), None);
        }
    }
}
