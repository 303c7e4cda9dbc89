//! `bake config` – dump the effective configuration.

use anyhow::{Context, Result};
use bake_core::config::{EffectiveConfiguration, PropertyValue, ENVIRONMENT_LAYER};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Toml,
    Json,
}

/// Serialize the effective key/value pairs, sorted by key.
pub fn render_config(
    cfg: &EffectiveConfiguration,
    format: DumpFormat,
    include_env: bool,
) -> Result<String> {
    let mut values: BTreeMap<String, PropertyValue> = BTreeMap::new();
    for key in cfg.keys() {
        if !include_env && cfg.origin(&key) == Some(ENVIRONMENT_LAYER) {
            continue;
        }
        if let Some(value) = cfg.get(&key) {
            values.insert(key, value.clone());
        }
    }

    match format {
        // Dotted keys stay flat: toml quotes them rather than nesting tables.
        DumpFormat::Toml => toml::to_string(&values).context("serialize configuration as TOML"),
        DumpFormat::Json => {
            serde_json::to_string_pretty(&values).context("serialize configuration as JSON")
        }
    }
}

pub fn run_config(cfg: &EffectiveConfiguration, format: DumpFormat, include_env: bool) -> Result<()> {
    println!("{}", render_config(cfg, format, include_env)?);
    Ok(())
}
