// src/config.rs
//! Boolean flags read from process configuration.
//!
//! A flag is off when it is missing, empty, or `off` in any case. Every other
//! value, including `false`, `0` and `no`, turns it on.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

/// Name -> raw string lookup.
pub trait ConfigSource {
    fn setting(&self, name: &str) -> Option<String>;
}

/// Reads settings from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn setting(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn setting(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Flat YAML settings file, e.g. `mongo.native_long: on`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings(pub HashMap<String, Value>);

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file parses as null rather than a map.
        if text.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_yaml::from_str(text).map_err(|e| Error::Settings(e.to_string()))
    }
}

impl ConfigSource for Settings {
    fn setting(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::Bool(b) => Some(if *b { "1".to_string() } else { String::new() }),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

pub fn is_enabled(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !v.is_empty() && !v.eq_ignore_ascii_case("off"),
    }
}

pub fn read_bool_config<S: ConfigSource + ?Sized>(source: &S, name: &str) -> bool {
    let value = source.setting(name);
    tracing::trace!(name, ?value, "read config flag");
    is_enabled(value.as_deref())
}
