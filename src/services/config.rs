use crate::domain::constants::PLUGIN_CONFIG_KEY;
use crate::domain::errors::AttestError;
use crate::domain::models::AttestationConfig;
use serde_json::Value;
use std::path::Path;

/// Load attestation options from an explicit config file.
///
/// `.toml` is parsed as TOML, anything else as JSON. A full runner config
/// with a `plugins.inspec-reporter-json-hdf` section is accepted as well as a
/// bare section. A relative `include-attestations-file.path` is resolved
/// against the config file's directory.
pub fn load_config(path: &Path) -> Result<AttestationConfig, AttestError> {
    let raw = std::fs::read_to_string(path).map_err(|e| AttestError::config(path, e))?;
    let value = if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("toml")) {
        let parsed: toml::Value = toml::from_str(&raw).map_err(|e| AttestError::config(path, e))?;
        toml_to_json(parsed)
    } else {
        serde_json::from_str(&raw).map_err(|e| AttestError::config(path, e))?
    };

    let mut config = parse_config(value).map_err(|e| AttestError::config(path, e))?;
    if let Some(file) = config.include_attestations_file.as_mut() {
        if file.path.is_relative() {
            if let Some(dir) = path.parent() {
                file.path = dir.join(&file.path);
            }
        }
    }
    Ok(config)
}

pub fn parse_config(mut value: Value) -> Result<AttestationConfig, serde_json::Error> {
    let section = value
        .get_mut("plugins")
        .and_then(|p| p.get_mut(PLUGIN_CONFIG_KEY))
        .map(Value::take);
    serde_json::from_value(section.unwrap_or(value))
}

/// TOML dates come through as strings so the validator sees the same
/// shape as a JSON config.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
