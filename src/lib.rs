//! upconf: locate and merge nested configuration upward from the entry point
//!
//! Given one or more configuration file names and a path of nested keys,
//! this crate searches ancestor directories for each file, decodes whatever
//! serialization format the file uses, descends to the requested sub-section
//! and deep-merges the results so that later files override earlier ones.

pub mod combine;
pub mod error;
pub mod locate;
pub mod read;
pub mod resolve;
pub mod walk;

pub use combine::combine_dictionaries;
pub use error::{ConfigError, DecodeError};
pub use locate::{find_file, Locator, SearchStrategy};
pub use read::{config_reader, Decoder, ReaderRegistry};
pub use resolve::{config_finder, multi_config_finder, ConfigFinder, Targets};
pub use walk::config_walker;

/// A parsed configuration document: mappings, sequences and scalar leaves.
pub type Value = serde_json::Value;

/// Interior node of a [`Value`] tree.
pub type Map = serde_json::Map<String, serde_json::Value>;
