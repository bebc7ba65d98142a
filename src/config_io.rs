use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or saving a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid JSON format in file: {path}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read and parse a JSON configuration file.
///
/// A missing input file and malformed JSON map to their own error variants so
/// the CLI can report them distinctly; every other I/O failure passes through
/// as [`ConfigError::Io`].
pub fn read_config(path: &Path) -> Result<Value, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::Io(e)
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a JSON configuration file with 4-space indentation, matching the
/// layout dcm2bids ships in its generated scaffolding.
pub fn write_config(path: &Path, value: &Value) -> Result<(), ConfigError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(ConfigError::Serialize)?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
