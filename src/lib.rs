// dcm2bids v2 → v3 configuration upgrade
pub mod config_io;
pub mod reporter;
pub mod rules;
pub mod transform;

// Re-export core types for convenience
pub use config_io::{read_config, write_config, ConfigError};
pub use reporter::{DroppedKey, RenamedKey, UpgradeReport};
pub use rules::{is_dropped_key, renamed_key, DROPPED_KEYS, KEY_RENAMES};
pub use transform::{upgrade_tree, upgrade_tree_with_report};
