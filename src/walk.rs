//! Key-path descent through a parsed configuration tree

use crate::error::ConfigError;
use crate::Value;

/// Descend `keys` one at a time, returning the node at the end of the path.
///
/// An empty path returns the document itself. The first key that is absent
/// (or reached through a non-mapping node) fails with
/// [`ConfigError::ConfigNotFound`] carrying the consumed prefix including
/// the failing key, so callers can see exactly how far the lookup got.
/// Walking never mutates the input.
pub fn config_walker<'a, S: AsRef<str>>(
    document: &'a Value,
    keys: &[S],
) -> Result<&'a Value, ConfigError> {
    let mut current = document;
    for (index, key) in keys.iter().enumerate() {
        match current.as_object().and_then(|node| node.get(key.as_ref())) {
            Some(child) => current = child,
            None => {
                return Err(ConfigError::ConfigNotFound {
                    prefix: keys[..=index].iter().map(|k| k.as_ref().to_string()).collect(),
                })
            }
        }
    }
    Ok(current)
}
