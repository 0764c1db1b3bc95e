//! Upward file search from a strategy-selected starting directory

mod strategy;

pub use strategy::SearchStrategy;

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upward file locator.
///
/// Walks from a starting directory through every ancestor up to and
/// including the filesystem root, returning the first match. The starting
/// directory comes from the configured [`SearchStrategy`], or from
/// [`Locator::origin`] which pins a synthetic start so tests never touch
/// process state.
pub struct Locator {
    strategy: SearchStrategy,
    origin: Option<PathBuf>,
}

impl Locator {
    pub fn new() -> Self {
        Self { strategy: SearchStrategy::default(), origin: None }
    }

    /// Set the starting-directory strategy.
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Pin the starting directory, bypassing the strategy.
    pub fn origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Locate `file_name` in the starting directory or any ancestor of it.
    pub fn locate(&self, file_name: &str) -> Result<PathBuf, ConfigError> {
        let start = match &self.origin {
            Some(origin) => origin.clone(),
            None => self.strategy.starting_dir()?,
        };
        debug!(start = %start.display(), file_name, "searching upward");
        locate_from(&start, file_name)
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk up from `start` looking for `file_name`.
///
/// The search is inclusive of `start` and of every ancestor up to the
/// filesystem root; it never descends into siblings or children. For a
/// fixed filesystem state the result is a pure function of `start`.
pub fn locate_from(start: &Path, file_name: &str) -> Result<PathBuf, ConfigError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(file_name);
        if candidate.exists() {
            debug!(path = %candidate.display(), "found");
            return Ok(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(file_name.to_string())),
        }
    }
}

/// Locate `name` with the given strategy.
pub fn find_file(name: &str, strategy: SearchStrategy) -> Result<PathBuf, ConfigError> {
    Locator::new().strategy(strategy).locate(name)
}
