//! The merged, precedence-resolved configuration of one build.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::composite::CompositeConfig;
use super::doc_types;
use super::flags::PathFlag;
use super::folders::Folder;
use super::keys;
use super::value::PropertyValue;

/// Effective configuration for one build.
///
/// Created once per source root by [`load`](super::load), adjusted through
/// setters while the build is being set up, then read by every consumer.
/// Pass it around explicitly; setters take `&mut self`, so sharing it across
/// workers means treating it as read-only.
///
/// Folder derivation rules:
/// - at construction all four folders are derived as `source / <name>`;
/// - [`set_source_folder`](Self::set_source_folder) re-derives asset,
///   template and content only;
/// - destination is re-derived only by
///   [`set_destination_folder_name`](Self::set_destination_folder_name).
#[derive(Debug)]
pub struct EffectiveConfiguration {
    composite: CompositeConfig,
    doc_types: OnceLock<Vec<String>>,
}

impl EffectiveConfiguration {
    /// Wrap an assembled layer stack and derive folders from `source_folder`.
    pub fn new(source_folder: impl Into<PathBuf>, composite: CompositeConfig) -> Self {
        let mut config = Self {
            composite,
            doc_types: OnceLock::new(),
        };
        config.set_source_folder(source_folder);
        config.derive_folder(Folder::Destination);
        config
    }

    // ---- generic access -------------------------------------------------

    /// Raw value from the highest-precedence layer defining `key`.
    /// Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.composite.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Name of the layer supplying `key`.
    pub fn origin(&self, key: &str) -> Option<&str> {
        self.composite.origin(key)
    }

    /// All distinct keys across layers.
    pub fn keys(&self) -> Vec<String> {
        self.composite.keys()
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.composite.layer_names()
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(PropertyValue::as_string)
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    /// Boolean value, or `default` when absent or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(value) => value.as_bool().unwrap_or_else(|| {
                tracing::warn!("property '{}' is not a boolean ('{}'), using {}", key, value, default);
                default
            }),
        }
    }

    /// Integer value, or `default` when absent or not an integer.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            None => default,
            Some(value) => value.as_int().unwrap_or_else(|| {
                tracing::warn!("property '{}' is not an integer ('{}'), using {}", key, value, default);
                default
            }),
        }
    }

    /// List value; empty when absent.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key).map(PropertyValue::as_list).unwrap_or_default()
    }

    /// Write to the override layer, above every loaded layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.composite.set(key, value.into());
        self.doc_types.take();
    }

    // ---- folders --------------------------------------------------------

    pub fn source_folder(&self) -> Option<PathBuf> {
        self.get(keys::SOURCE_FOLDER_PATH).and_then(PropertyValue::as_path)
    }

    /// Set the source root and re-derive asset, template and content
    /// folders. An empty path is ignored.
    pub fn set_source_folder(&mut self, folder: impl Into<PathBuf>) {
        let folder = folder.into();
        if folder.as_os_str().is_empty() {
            return;
        }
        self.set(keys::SOURCE_FOLDER_PATH, folder);
        for f in Folder::FOLLOW_SOURCE {
            self.derive_folder(f);
        }
    }

    pub fn folder(&self, folder: Folder) -> Option<PathBuf> {
        self.get(folder.path_key()).and_then(PropertyValue::as_path)
    }

    pub fn folder_name(&self, folder: Folder) -> Option<String> {
        self.get_string(folder.name_key())
    }

    /// Point a folder somewhere explicit. The name property follows the
    /// path's last component. An empty path leaves both untouched.
    pub fn set_folder(&mut self, folder: Folder, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return;
        }
        self.set(folder.path_key(), path.to_path_buf());
        if let Some(name) = path.file_name() {
            self.set(folder.name_key(), name.to_string_lossy().into_owned());
        }
    }

    /// `source / <name>`; the name property is left as is.
    fn derive_folder(&mut self, folder: Folder) {
        let Some(source) = self.source_folder() else {
            return;
        };
        let Some(name) = self.folder_name(folder) else {
            tracing::debug!("no '{}' configured, {:?} folder not derived", folder.name_key(), folder);
            return;
        };
        let path = source.join(name);
        tracing::debug!("{:?} folder -> {}", folder, path.display());
        self.set(folder.path_key(), path);
    }

    pub fn asset_folder(&self) -> Option<PathBuf> {
        self.folder(Folder::Asset)
    }

    pub fn set_asset_folder(&mut self, path: impl AsRef<Path>) {
        self.set_folder(Folder::Asset, path);
    }

    pub fn asset_folder_name(&self) -> Option<String> {
        self.folder_name(Folder::Asset)
    }

    pub fn template_folder(&self) -> Option<PathBuf> {
        self.folder(Folder::Template)
    }

    pub fn set_template_folder(&mut self, path: impl AsRef<Path>) {
        self.set_folder(Folder::Template, path);
    }

    pub fn template_folder_name(&self) -> Option<String> {
        self.folder_name(Folder::Template)
    }

    pub fn content_folder(&self) -> Option<PathBuf> {
        self.folder(Folder::Content)
    }

    pub fn set_content_folder(&mut self, path: impl AsRef<Path>) {
        self.set_folder(Folder::Content, path);
    }

    pub fn content_folder_name(&self) -> Option<String> {
        self.folder_name(Folder::Content)
    }

    pub fn destination_folder(&self) -> Option<PathBuf> {
        self.folder(Folder::Destination)
    }

    pub fn set_destination_folder(&mut self, path: impl AsRef<Path>) {
        self.set_folder(Folder::Destination, path);
    }

    pub fn destination_folder_name(&self) -> Option<String> {
        self.folder_name(Folder::Destination)
    }

    /// Rename the destination folder and re-derive it under the source root.
    pub fn set_destination_folder_name(&mut self, name: &str) {
        self.set(keys::DESTINATION_FOLDER, name);
        self.derive_folder(Folder::Destination);
    }

    // ---- document types -------------------------------------------------

    /// Template file bound to `doc_type`, resolved against the template folder.
    /// Missing binding: logs a warning and returns `None`.
    pub fn template_file_for(&self, doc_type: &str) -> Option<PathBuf> {
        let key = keys::template_file_key(doc_type);
        match self.get_string(&key) {
            Some(file) => Some(match self.template_folder() {
                Some(folder) => folder.join(file),
                None => PathBuf::from(file),
            }),
            None => {
                tracing::warn!(
                    "Cannot find configuration key '{}' for document type '{}'",
                    key,
                    doc_type
                );
                None
            }
        }
    }

    pub fn set_template_file_for(&mut self, doc_type: &str, file: &str) {
        self.set(keys::template_file_key(doc_type), file);
    }

    /// Output extension for `doc_type`, falling back to the global one.
    pub fn output_extension_for(&self, doc_type: &str) -> String {
        self.get_string(&keys::template_extension_key(doc_type))
            .unwrap_or_else(|| self.output_extension())
    }

    pub fn set_output_extension_for(&mut self, doc_type: &str, extension: &str) {
        self.set(keys::template_extension_key(doc_type), extension);
    }

    /// Document types bound by `template.<type>.file` keys, in key
    /// enumeration order. Computed once and cached until the next `set`.
    pub fn document_types(&self) -> &[String] {
        self.doc_types.get_or_init(|| {
            let keys = self.keys();
            doc_types::scan(keys.iter().map(String::as_str))
        })
    }

    // ---- nested options -------------------------------------------------

    /// Value of `<namespace>.<key>`. Missing: logs a warning and returns empty text.
    pub fn option(&self, namespace: &str, key: &str) -> PropertyValue {
        let full_key = format!("{namespace}.{key}");
        match self.get(&full_key) {
            Some(value) => value.clone(),
            None => {
                tracing::warn!("Cannot find option '{}'", full_key);
                PropertyValue::Text(String::new())
            }
        }
    }

    /// Sub-keys defined under `<namespace>.`.
    pub fn option_keys(&self, namespace: &str) -> Vec<String> {
        let prefix = format!("{namespace}.");
        self.keys()
            .into_iter()
            .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
            .filter(|k| !k.is_empty())
            .collect()
    }

    pub fn asciidoctor_option(&self, key: &str) -> PropertyValue {
        self.option(keys::ASCIIDOCTOR_OPTION, key)
    }

    pub fn asciidoctor_option_keys(&self) -> Vec<String> {
        self.option_keys(keys::ASCIIDOCTOR_OPTION)
    }

    // ---- aliased flags --------------------------------------------------

    pub fn flag(&self, flag: PathFlag) -> bool {
        let [current, legacy] = flag.keys();
        let default = flag.default_value();
        flag.combine(self.get_bool(current, default), self.get_bool(legacy, default))
    }

    pub fn set_flag(&mut self, flag: PathFlag, value: bool) {
        for key in flag.keys() {
            self.set(key, value);
        }
    }

    pub fn relative_path_prepend_host(&self) -> bool {
        self.flag(PathFlag::PrependHost)
    }

    pub fn set_relative_path_prepend_host(&mut self, value: bool) {
        self.set_flag(PathFlag::PrependHost, value);
    }

    pub fn img_path_prepend_host(&self) -> bool {
        self.flag(PathFlag::PrependHost)
    }

    pub fn set_img_path_prepend_host(&mut self, value: bool) {
        self.set_flag(PathFlag::PrependHost, value);
    }

    pub fn relative_path_update(&self) -> bool {
        self.flag(PathFlag::Update)
    }

    pub fn set_relative_path_update(&mut self, value: bool) {
        self.set_flag(PathFlag::Update, value);
    }

    pub fn img_path_update(&self) -> bool {
        self.flag(PathFlag::Update)
    }

    pub fn set_img_path_update(&mut self, value: bool) {
        self.set_flag(PathFlag::Update, value);
    }
}
