//! Property sources: one ordered, named set of key/value pairs each.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::error::{ConfigError, Result};
use super::properties;
use super::value::PropertyValue;

/// Name of the layer holding process environment variables.
pub const ENVIRONMENT_LAYER: &str = "environment";

/// A read-only source of properties that can be stacked in a
/// [`CompositeConfig`](super::composite::CompositeConfig).
pub trait PropertySource: fmt::Debug + Send + Sync {
    /// Human-readable name, reported by `EffectiveConfiguration::origin`.
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Option<&PropertyValue>;

    /// Keys in the order the source defines them.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Insertion-ordered property set, loaded from a `.properties` file or text.
#[derive(Debug, Clone, Default)]
pub struct PropertiesLayer {
    name: String,
    entries: Vec<(String, PropertyValue)>,
    index: HashMap<String, usize>,
}

impl PropertiesLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse properties text. A key repeated in the text accumulates into a list.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut layer = Self::new(name);
        for (key, value) in properties::parse(text) {
            layer.append(key, value);
        }
        layer
    }

    /// Read a UTF-8 properties file; the layer is named after the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let layer = Self::from_text(name, &text);
        tracing::debug!(
            "read {} properties from {}",
            layer.entries.len(),
            path.display()
        );
        Ok(layer)
    }

    /// Insert or replace a value, keeping the key's original position.
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    fn append(&mut self, key: String, value: PropertyValue) {
        let Some(&i) = self.index.get(&key) else {
            self.set(key, value);
            return;
        };
        let slot = &mut self.entries[i].1;
        let mut items = slot.as_list();
        items.extend(value.as_list());
        *slot = PropertyValue::List(items);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PropertySource for PropertiesLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.iter().map(|(k, _)| k.as_str()))
    }
}

/// Snapshot of environment variables, keys taken verbatim.
///
/// Stacked last, so it only supplies keys no file defines.
#[derive(Debug, Clone)]
pub struct EnvironmentLayer {
    inner: PropertiesLayer,
}

impl EnvironmentLayer {
    /// Capture the current process environment. Variables whose name or
    /// value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut inner = PropertiesLayer::new(ENVIRONMENT_LAYER);
        for (key, value) in vars {
            inner.set(key, properties::to_value(value.as_ref()));
        }
        Self { inner }
    }

    pub fn empty() -> Self {
        Self {
            inner: PropertiesLayer::new(ENVIRONMENT_LAYER),
        }
    }
}

impl PropertySource for EnvironmentLayer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.inner.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.inner.keys()
    }
}
