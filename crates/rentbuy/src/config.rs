//! Parameter files
//!
//! A parameter file is a flat YAML mapping from parameter name to value:
//!
//! ```yaml
//! home_val: 650000
//! how_long: 12
//! joint: "no"
//! ```
//!
//! Values go through the same validation as command-line text. Keys that are
//! not parameter names are rejected so typos don't silently fall back to
//! defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, bail, eyre};
use rentbuy_core::InputSet;
use rentbuy_core::params::descriptor;
use serde::Deserialize;

use crate::util::io::atomic_write;

/// A value as YAML may type it. Unquoted `yes`/`no` can arrive as booleans.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum FileValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FileValue {
    fn into_raw(self) -> String {
        match self {
            FileValue::Bool(true) => "yes".to_string(),
            FileValue::Bool(false) => "no".to_string(),
            FileValue::Integer(v) => v.to_string(),
            FileValue::Real(v) => v.to_string(),
            FileValue::Text(v) => v,
        }
    }
}

/// Raw parameter text read from a file, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamFile {
    values: BTreeMap<String, String>,
}

impl ParamFile {
    pub fn from_yaml(yaml: &str) -> color_eyre::Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<BTreeMap<String, FileValue>> =
            serde_saphyr::from_str(yaml).map_err(|e| eyre!("invalid parameter file: {e}"))?;

        let mut values = BTreeMap::new();
        for (key, value) in parsed.unwrap_or_default() {
            if descriptor(&key).is_none() {
                bail!("unknown parameter {key:?} in parameter file");
            }
            values.insert(key, value.into_raw());
        }
        Ok(Self { values })
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read parameter file {}", path.display()))?;
        Self::from_yaml(&content).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Write a resolved input set as a parameter file
pub fn save_inputs(path: &Path, inputs: &InputSet) -> color_eyre::Result<()> {
    let yaml = serde_saphyr::to_string(inputs)
        .map_err(|e| eyre!("failed to serialize parameters: {e}"))?;
    atomic_write(path, &yaml)
        .wrap_err_with(|| format!("failed to write parameter file {}", path.display()))
}
