//! Starting-directory strategies for the upward walk

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Policy for computing the starting directory of the upward search.
///
/// Chosen once per locate call; the walk itself is independent of how the
/// start was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Directory containing the running program's executable. Falls back to
    /// [`SearchStrategy::Frame`] when that information is unavailable.
    #[default]
    EntryPoint,
    /// Canonicalized working directory, the fallback for contexts with no
    /// usable entry point.
    Frame,
    /// The process's working directory as reported, independent of where
    /// the code lives.
    Cwd,
}

impl SearchStrategy {
    /// Compute the starting directory for the upward walk.
    pub fn starting_dir(self) -> Result<PathBuf, ConfigError> {
        match self {
            SearchStrategy::EntryPoint => match entry_point_dir() {
                Some(dir) => Ok(dir),
                None => SearchStrategy::Frame.starting_dir(),
            },
            SearchStrategy::Frame => {
                let cwd = current_dir()?;
                Ok(cwd.canonicalize().unwrap_or(cwd))
            }
            SearchStrategy::Cwd => current_dir(),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entry-point" => Ok(Self::EntryPoint),
            "frame" => Ok(Self::Frame),
            "cwd" => Ok(Self::Cwd),
            other => Err(format!(
                "unknown strategy '{other}' (expected entry-point, frame or cwd)"
            )),
        }
    }
}

fn entry_point_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
}

fn current_dir() -> Result<PathBuf, ConfigError> {
    env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_parse_from_their_cli_tokens() {
        assert_eq!("entry-point".parse(), Ok(SearchStrategy::EntryPoint));
        assert_eq!("frame".parse(), Ok(SearchStrategy::Frame));
        assert_eq!("cwd".parse(), Ok(SearchStrategy::Cwd));
        assert!("upward".parse::<SearchStrategy>().is_err());
    }

    #[test]
    fn every_strategy_yields_a_directory() {
        for strategy in [
            SearchStrategy::EntryPoint,
            SearchStrategy::Frame,
            SearchStrategy::Cwd,
        ] {
            let dir = strategy.starting_dir().expect("starting dir");
            assert!(dir.is_dir(), "{strategy:?} produced {dir:?}");
        }
    }
}
