//! Built-in decoders for TOML, JSON and YAML

use crate::error::DecodeError;
use crate::Value;

pub(super) fn decode_toml(bytes: &[u8]) -> Result<Value, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|err| DecodeError(format!("invalid UTF-8: {err}")))?;
    let parsed: toml::Value =
        toml::from_str(text).map_err(|err| DecodeError(format!("invalid TOML: {err}")))?;
    serde_json::to_value(parsed)
        .map_err(|err| DecodeError(format!("unrepresentable TOML value: {err}")))
}

pub(super) fn decode_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError(format!("invalid JSON: {err}")))
}

pub(super) fn decode_yaml(bytes: &[u8]) -> Result<Value, DecodeError> {
    let parsed: serde_yaml::Value = serde_yaml::from_slice(bytes)
        .map_err(|err| DecodeError(format!("invalid YAML: {err}")))?;
    serde_json::to_value(parsed)
        .map_err(|err| DecodeError(format!("unrepresentable YAML value: {err}")))
}
