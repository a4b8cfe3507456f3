use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Options that change how a `TypeConverter` treats its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// When true, map keys with no matching writable bean property are skipped.
    /// When false they fail the conversion with `unassignable-property`.
    pub ignore_unknown_properties: bool,
    /// When true, an empty string converts to a primitive-like type as null would.
    pub empty_string_as_null: bool,
}

impl ConverterConfig {
    /// Creates a new `ConverterConfig` with default settings:
    /// - `ignore_unknown_properties`: `true`
    /// - `empty_string_as_null`: `true`
    pub fn new() -> Self {
        Self {
            ignore_unknown_properties: true,
            empty_string_as_null: true,
        }
    }

    /// Default settings, except unknown bean properties are rejected.
    pub fn strict() -> Self {
        Self::new().ignore_unknown_properties(false)
    }

    pub fn ignore_unknown_properties(mut self, ignore: bool) -> Self {
        self.ignore_unknown_properties = ignore;
        self
    }

    pub fn empty_string_as_null(mut self, enabled: bool) -> Self {
        self.empty_string_as_null = enabled;
        self
    }

    /// Loads settings from a `.json`, `.yaml` or `.yml` file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read converter config: {:?}", path))?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let config = Self::parse_str(&content, extension)
            .with_context(|| format!("Failed to load converter config: {:?}", path))?;
        info!("Loaded converter config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parses settings from in-memory content, picking the format from `extension`.
    pub fn parse_str(content: &str, extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => serde_json::from_str(content).context("Invalid JSON converter config"),
            "yaml" | "yml" => serde_yaml::from_str(content).context("Invalid YAML converter config"),
            other => Err(anyhow!("Unsupported converter config format: '{}'", other)),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}
