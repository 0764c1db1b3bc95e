//! Typed failures surfaced by the resolution pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Failure produced by a format decoder on malformed input.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// Everything that can go wrong while resolving configuration.
///
/// No variant is retried internally; each carries enough context (file
/// name, extension, key prefix) to diagnose the failure at the call site.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The target file was absent from the starting directory through the
    /// filesystem root.
    #[error("'{0}' was not found in any ancestor directory")]
    NotFound(String),

    /// No decoder is registered for the file's extension.
    #[error("no reader registered for extension '{0}'")]
    UnsupportedFormat(String),

    /// A registered decoder could not parse the file's bytes.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The requested key path diverged from the document's shape. `prefix`
    /// is the portion of the path consumed so far, including the key that
    /// was missing.
    #[error("configuration '{}' not found", prefix.join("."))]
    ConfigNotFound { prefix: Vec<String> },

    /// A located file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
