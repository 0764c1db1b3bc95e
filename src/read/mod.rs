//! Format-reader registry and built-in decoders
//!
//! Decoders are looked up by the target file's extension, lower-cased with
//! the leading dot stripped. Built-ins cover TOML, JSON, YAML and INI;
//! caller-supplied readers overlay the built-in table for the duration of
//! one resolution call, replacing the built-in for the same extension.

mod formats;
mod ini;

use crate::error::{ConfigError, DecodeError};
use crate::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoder capability: raw file bytes of one format into a nested mapping.
pub type Decoder = Arc<dyn Fn(&[u8]) -> Result<Value, DecodeError> + Send + Sync>;

static BUILTIN_READERS: Lazy<HashMap<String, Decoder>> = Lazy::new(|| {
    let mut readers: HashMap<String, Decoder> = HashMap::new();
    readers.insert("toml".into(), Arc::new(formats::decode_toml));
    readers.insert("json".into(), Arc::new(formats::decode_json));
    readers.insert("yaml".into(), Arc::new(formats::decode_yaml));
    readers.insert("yml".into(), Arc::new(formats::decode_yaml));
    readers.insert("ini".into(), Arc::new(ini::decode_ini));
    readers
});

/// Per-call view of the decoder table.
pub struct ReaderRegistry {
    readers: HashMap<String, Decoder>,
}

impl ReaderRegistry {
    /// The built-in decoder set alone.
    pub fn builtin() -> Self {
        Self { readers: BUILTIN_READERS.clone() }
    }

    /// Built-ins overlaid with `overrides`; an override for an already
    /// registered extension replaces the built-in decoder.
    pub fn with_overrides(overrides: HashMap<String, Decoder>) -> Self {
        let mut readers = BUILTIN_READERS.clone();
        for (extension, decoder) in overrides {
            readers.insert(normalize_extension(&extension), decoder);
        }
        Self { readers }
    }

    /// Look up the decoder registered for `path`'s extension.
    pub fn resolve(&self, path: &Path) -> Result<&Decoder, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(normalize_extension)
            .unwrap_or_default();
        self.readers
            .get(&extension)
            .ok_or(ConfigError::UnsupportedFormat(extension))
    }

    /// Read and decode `path` with the decoder for its extension.
    pub fn read(&self, path: &Path) -> Result<Value, ConfigError> {
        let decoder = self.resolve(path)?;
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        decoder(&bytes).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// Parse the file at `path` with the built-in decoder for its extension.
pub fn config_reader(path: &Path) -> Result<Value, ConfigError> {
    ReaderRegistry::builtin().read(path)
}
