//! First-match-wins stack of property sources.

use std::collections::HashSet;

use super::layer::{PropertiesLayer, PropertySource};
use super::value::PropertyValue;

/// Name of the in-memory layer that receives runtime `set` calls.
pub const OVERRIDE_LAYER: &str = "override";

/// Ordered property sources. Layers added earlier win; the override layer
/// written by [`CompositeConfig::set`] sits above all of them.
#[derive(Debug)]
pub struct CompositeConfig {
    overrides: PropertiesLayer,
    layers: Vec<Box<dyn PropertySource>>,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeConfig {
    pub fn new() -> Self {
        Self {
            overrides: PropertiesLayer::new(OVERRIDE_LAYER),
            layers: Vec::new(),
        }
    }

    /// Append a layer below every layer added so far.
    pub fn add_layer(&mut self, layer: impl PropertySource + 'static) {
        tracing::debug!("adding configuration layer '{}'", layer.name());
        self.layers.push(Box::new(layer));
    }

    fn sources(&self) -> impl Iterator<Item = &(dyn PropertySource + 'static)> {
        std::iter::once(&self.overrides as &(dyn PropertySource + 'static))
            .chain(self.layers.iter().map(|l| l.as_ref()))
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.sources().find_map(|s| s.get(key))
    }

    /// Name of the layer that supplies the effective value of `key`.
    pub fn origin(&self, key: &str) -> Option<&str> {
        self.sources().find(|s| s.contains(key)).map(|s| s.name())
    }

    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.overrides.set(key, value);
    }

    /// Distinct keys of all layers: overrides first, then each layer in
    /// precedence order, each in its own definition order.
    pub fn keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for source in self.sources() {
            for key in source.keys() {
                if seen.insert(key) {
                    out.push(key.to_string());
                }
            }
        }
        out
    }

    /// Layer names, highest precedence first (override layer included).
    pub fn layer_names(&self) -> Vec<&str> {
        self.sources().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layer::EnvironmentLayer;

    fn stack() -> CompositeConfig {
        let mut c = CompositeConfig::new();
        c.add_layer(PropertiesLayer::from_text("primary", "a=primary\nb=primary\n"));
        c.add_layer(PropertiesLayer::from_text("defaults", "a=default\nc=default\n"));
        c.add_layer(EnvironmentLayer::from_vars([("c", "env"), ("d", "env")]));
        c
    }

    #[test]
    fn earlier_layer_wins() {
        let c = stack();
        assert_eq!(c.get("a"), Some(&PropertyValue::from("primary")));
        assert_eq!(c.get("c"), Some(&PropertyValue::from("default")));
        assert_eq!(c.get("d"), Some(&PropertyValue::from("env")));
        assert_eq!(c.get("missing"), None);
    }

    #[test]
    fn origin_reports_supplying_layer() {
        let c = stack();
        assert_eq!(c.origin("a"), Some("primary"));
        assert_eq!(c.origin("c"), Some("defaults"));
        assert_eq!(c.origin("d"), Some("environment"));
        assert_eq!(c.origin("missing"), None);
    }

    #[test]
    fn set_overrides_every_layer() {
        let mut c = stack();
        c.set("a", PropertyValue::from("runtime"));
        assert_eq!(c.get("a"), Some(&PropertyValue::from("runtime")));
        assert_eq!(c.origin("a"), Some(OVERRIDE_LAYER));
    }

    #[test]
    fn keys_are_distinct_in_precedence_order() {
        let mut c = stack();
        c.set("z", PropertyValue::Bool(true));
        assert_eq!(c.keys(), vec!["z", "a", "b", "c", "d"]);
        assert_eq!(
            c.layer_names(),
            vec![OVERRIDE_LAYER, "primary", "defaults", "environment"]
        );
    }
}
