//! Resolution pipeline: locate, read, walk and combine
//!
//! A single target runs locate → read → walk. Multiple targets run the same
//! pipeline per file and fold the walked sub-sections left to right through
//! the combiner, so later files in the list override earlier ones.

use crate::combine::combine_values;
use crate::error::ConfigError;
use crate::locate::{Locator, SearchStrategy};
use crate::read::{Decoder, ReaderRegistry};
use crate::walk::config_walker;
use crate::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// One configuration file name or several, in override order.
///
/// Conversions from single names and from lists let [`config_finder`]
/// accept either call shape.
pub struct Targets(Vec<String>);

impl From<&str> for Targets {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for Targets {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for Targets {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for Targets {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Targets {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|name| name.to_string()).collect())
    }
}

/// Builder for one resolution request.
///
/// Holds the target list, the key path, the search strategy, the
/// missing-file policy and any per-call reader overrides. Nothing here
/// persists past [`ConfigFinder::resolve`]; each call re-walks the
/// filesystem and re-parses the files it finds.
pub struct ConfigFinder {
    targets: Vec<String>,
    key_path: Vec<String>,
    strategy: SearchStrategy,
    raise_on_missing: bool,
    additional_readers: HashMap<String, Decoder>,
    origin: Option<PathBuf>,
}

impl ConfigFinder {
    pub fn new(targets: impl Into<Targets>) -> Self {
        Self {
            targets: targets.into().0,
            key_path: Vec::new(),
            strategy: SearchStrategy::default(),
            raise_on_missing: true,
            additional_readers: HashMap::new(),
            origin: None,
        }
    }

    /// Set the key path to walk inside each parsed document.
    pub fn key_path<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.key_path = keys.iter().map(|key| key.as_ref().to_string()).collect();
        self
    }

    /// Set the starting-directory strategy.
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether a missing file fails the whole call (the default) or is
    /// skipped silently. Absent keys inside a present file always fail.
    pub fn raise_on_missing(mut self, raise: bool) -> Self {
        self.raise_on_missing = raise;
        self
    }

    /// Register a per-call reader for `extension`, replacing any built-in
    /// registered under the same token.
    pub fn reader(mut self, extension: impl Into<String>, decoder: Decoder) -> Self {
        self.additional_readers.insert(extension.into(), decoder);
        self
    }

    /// Pin the starting directory for the upward search, bypassing the
    /// strategy. Intended for tests and embedding hosts.
    pub fn origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Run the pipeline and return the merged value at the key path.
    pub fn resolve(self) -> Result<Value, ConfigError> {
        let ConfigFinder {
            targets,
            key_path,
            strategy,
            raise_on_missing,
            additional_readers,
            origin,
        } = self;

        let registry = ReaderRegistry::with_overrides(additional_readers);
        let mut locator = Locator::new().strategy(strategy);
        if let Some(origin) = origin {
            locator = locator.origin(origin);
        }

        let mut documents = Vec::new();
        for name in &targets {
            match locator.locate(name) {
                Ok(path) => documents.push(registry.read(&path)?),
                Err(ConfigError::NotFound(_)) if !raise_on_missing => {
                    debug!(%name, "skipping missing configuration file");
                }
                Err(err) => return Err(err),
            }
        }

        // fold combine(later, accumulated): later files override earlier
        // ones while still contributing keys absent from them
        let mut resolved = Value::Object(Map::new());
        for document in &documents {
            let section = config_walker(document, &key_path)?;
            resolved = combine_values(section, &resolved);
        }
        if documents.is_empty() {
            // empty target list, or every target skipped under the tolerant
            // policy: the empty accumulator is all there is to walk
            return config_walker(&resolved, &key_path).cloned();
        }
        Ok(resolved)
    }
}

/// Resolve one file name — or a list of them, later entries overriding
/// earlier ones — to the value at `key_path`, with built-in readers and the
/// default strategy. Use [`ConfigFinder`] for the remaining knobs.
pub fn config_finder<S: AsRef<str>>(
    targets: impl Into<Targets>,
    key_path: &[S],
) -> Result<Value, ConfigError> {
    ConfigFinder::new(targets).key_path(key_path).resolve()
}

/// The explicit multi-target form of [`config_finder`].
pub fn multi_config_finder<S: AsRef<str>>(
    names: &[&str],
    key_path: &[S],
) -> Result<Value, ConfigError> {
    ConfigFinder::new(names).key_path(key_path).resolve()
}
