//! INI decoding normalized into the shared nested-mapping shape
//!
//! Each `[section]` becomes a mapping keyed by its section name; keys and
//! values are kept as strings. Entries appearing before any section header
//! land in the reserved `DEFAULT` section, which is always present in the
//! decoded document.

use crate::error::DecodeError;
use crate::{Map, Value};

const DEFAULT_SECTION: &str = "DEFAULT";

pub(super) fn decode_ini(bytes: &[u8]) -> Result<Value, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|err| DecodeError(format!("invalid UTF-8: {err}")))?;

    let mut document = Map::new();
    flush_section(&mut document, DEFAULT_SECTION, Map::new());

    let mut section = DEFAULT_SECTION.to_string();
    let mut entries = Map::new();

    for (line_number, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            flush_section(&mut document, &section, std::mem::take(&mut entries));
            section = name.trim().to_string();
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(DecodeError(format!(
                "line {}: expected 'key = value' or '[section]', got '{raw_line}'",
                line_number + 1
            )));
        };
        entries.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
    }
    flush_section(&mut document, &section, entries);

    Ok(Value::Object(document))
}

/// Merge a section's entries into the document, extending the section's
/// mapping when the same header appeared earlier.
fn flush_section(document: &mut Map, name: &str, entries: Map) {
    match document.get_mut(name).and_then(Value::as_object_mut) {
        Some(existing) => existing.extend(entries),
        None => {
            document.insert(name.to_string(), Value::Object(entries));
        }
    }
}
