//! Site configuration.
//!
//! Layers, highest precedence first:
//! 1. runtime overrides written through `EffectiveConfiguration::set`
//! 2. `custom.properties` in the source root (deprecated name, warns once)
//! 3. `bake.properties` in the source root
//! 4. the bundled `default.properties`
//! 5. the process environment (only fills keys nobody else defines)

mod accessors;
mod composite;
mod doc_types;
mod effective;
mod error;
mod flags;
mod folders;
pub mod keys;
mod layer;
mod properties;
mod value;

pub use accessors::{
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_POSTS_PER_PAGE, DEFAULT_SERVER_PORT, DEFAULT_SITE_HOST,
};
pub use composite::{CompositeConfig, OVERRIDE_LAYER};
pub use effective::EffectiveConfiguration;
pub use error::{ConfigError, Result};
pub use flags::PathFlag;
pub use folders::Folder;
pub use layer::{EnvironmentLayer, PropertiesLayer, PropertySource, ENVIRONMENT_LAYER};
pub use properties::LIST_DELIMITER;
pub use value::PropertyValue;

use std::path::{Path, PathBuf};
use std::sync::Once;

/// Deprecated configuration file name, still honoured.
pub const LEGACY_CONFIG_FILE: &str = "custom.properties";
/// Configuration file name looked up in the source root.
pub const CONFIG_FILE: &str = "bake.properties";
/// Name of the bundled defaults layer.
pub const DEFAULT_CONFIG_FILE: &str = "default.properties";

const DEFAULT_PROPERTIES: &str = include_str!("../../resources/default.properties");

static LEGACY_WARNING: Once = Once::new();

/// The bundled defaults as a layer.
pub fn default_layer() -> PropertiesLayer {
    PropertiesLayer::from_text(DEFAULT_CONFIG_FILE, DEFAULT_PROPERTIES)
}

/// Load the effective configuration for `source`, using the process
/// environment as the lowest layer.
pub fn load(source: &Path) -> Result<EffectiveConfiguration> {
    ConfigLoader::new().load(source)
}

/// Assembles the layer stack for a source root.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    environment: Option<EnvironmentLayer>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given environment layer instead of capturing the process environment.
    pub fn with_environment(mut self, environment: EnvironmentLayer) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn load(self, source: &Path) -> Result<EffectiveConfiguration> {
        validate_source(source)?;

        let mut composite = CompositeConfig::new();

        let legacy = source.join(LEGACY_CONFIG_FILE);
        if legacy.exists() {
            warn_legacy_config();
            composite.add_layer(PropertiesLayer::from_file(&legacy)?);
        }

        let primary = source.join(CONFIG_FILE);
        if primary.exists() {
            composite.add_layer(PropertiesLayer::from_file(&primary)?);
        }

        composite.add_layer(default_layer());
        composite.add_layer(
            self.environment
                .unwrap_or_else(EnvironmentLayer::from_process),
        );

        tracing::debug!(
            "configuration for {} from layers {:?}",
            source.display(),
            composite.layer_names()
        );

        Ok(EffectiveConfiguration::new(source, composite))
    }
}

fn validate_source(source: &Path) -> Result<()> {
    if !source.exists() {
        return Err(ConfigError::SourceMissing {
            path: absolute(source),
        });
    }
    if !source.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: absolute(source),
        });
    }
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn warn_legacy_config() {
    LEGACY_WARNING.call_once(|| {
        tracing::warn!(
            "You have defined a part of your configuration in {}",
            LEGACY_CONFIG_FILE
        );
        tracing::warn!(
            "Usage of this file is being deprecated, please rename this file to: {} to remove this warning",
            CONFIG_FILE
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let layer = default_layer();
        assert!(!layer.is_empty());
        assert_eq!(
            layer.get(keys::DESTINATION_FOLDER),
            Some(&PropertyValue::from("output"))
        );
        assert_eq!(layer.get(keys::OUTPUT_EXTENSION), Some(&PropertyValue::from(".html")));
    }

    #[test]
    fn missing_source_is_reported_with_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent");
        let err = ConfigLoader::new()
            .with_environment(EnvironmentLayer::empty())
            .load(&missing)
            .unwrap_err();
        assert!(matches!(err, ConfigError::SourceMissing { .. }));
        assert_eq!(
            err.to_string(),
            format!("The given source folder '{}' does not exist.", missing.display())
        );
    }

    #[test]
    fn file_source_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.txt");
        std::fs::write(&file, "x").unwrap();
        let err = ConfigLoader::new()
            .with_environment(EnvironmentLayer::empty())
            .load(&file)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory { .. }));
        assert!(err.to_string().contains(&file.display().to_string()));
    }
}
