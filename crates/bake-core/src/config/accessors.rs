//! Typed getters and setters for the well-known keys.

use super::effective::EffectiveConfiguration;
use super::keys;

pub const DEFAULT_SITE_HOST: &str = "http://localhost:8820";
pub const DEFAULT_SERVER_PORT: i64 = 8080;
pub const DEFAULT_POSTS_PER_PAGE: i64 = 5;
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".html";

impl EffectiveConfiguration {
    pub fn site_host(&self) -> String {
        self.get_string_or(keys::SITE_HOST, DEFAULT_SITE_HOST)
    }

    pub fn set_site_host(&mut self, host: &str) {
        self.set(keys::SITE_HOST, host);
    }

    pub fn server_port(&self) -> i64 {
        self.get_int(keys::SERVER_PORT, DEFAULT_SERVER_PORT)
    }

    pub fn set_server_port(&mut self, port: i64) {
        self.set(keys::SERVER_PORT, port);
    }

    pub fn posts_per_page(&self) -> i64 {
        self.get_int(keys::POSTS_PER_PAGE, DEFAULT_POSTS_PER_PAGE)
    }

    pub fn set_posts_per_page(&mut self, n: i64) {
        self.set(keys::POSTS_PER_PAGE, n);
    }

    pub fn paginate_index(&self) -> bool {
        self.get_bool(keys::PAGINATE_INDEX, false)
    }

    pub fn set_paginate_index(&mut self, paginate: bool) {
        self.set(keys::PAGINATE_INDEX, paginate);
    }

    pub fn output_extension(&self) -> String {
        self.get_string_or(keys::OUTPUT_EXTENSION, DEFAULT_OUTPUT_EXTENSION)
    }

    pub fn set_output_extension(&mut self, extension: &str) {
        self.set(keys::OUTPUT_EXTENSION, extension);
    }

    pub fn markdown_extensions(&self) -> Vec<String> {
        self.get_list(keys::MARKDOWN_EXTENSIONS)
    }

    pub fn set_markdown_extensions<S: AsRef<str>>(&mut self, extensions: &[S]) {
        let items = extensions.iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>();
        self.set(keys::MARKDOWN_EXTENSIONS, items);
    }

    pub fn asciidoctor_attributes(&self) -> Vec<String> {
        self.get_list(keys::ASCIIDOCTOR_ATTRIBUTES)
    }

    pub fn export_asciidoctor_attributes(&self) -> bool {
        self.get_bool(keys::ASCIIDOCTOR_ATTRIBUTES_EXPORT, false)
    }

    pub fn asciidoctor_attributes_export_prefix(&self) -> String {
        self.get_string_or(keys::ASCIIDOCTOR_ATTRIBUTES_EXPORT_PREFIX, "")
    }

    // Render switches.

    pub fn render_index(&self) -> bool {
        self.get_bool(keys::RENDER_INDEX, false)
    }

    pub fn render_feed(&self) -> bool {
        self.get_bool(keys::RENDER_FEED, false)
    }

    pub fn render_archive(&self) -> bool {
        self.get_bool(keys::RENDER_ARCHIVE, false)
    }

    pub fn render_tags(&self) -> bool {
        self.get_bool(keys::RENDER_TAGS, false)
    }

    pub fn render_tags_index(&self) -> bool {
        self.get_bool(keys::RENDER_TAGS_INDEX, false)
    }

    pub fn set_render_tags_index(&mut self, enable: bool) {
        self.set(keys::RENDER_TAGS_INDEX, enable);
    }

    pub fn render_sitemap(&self) -> bool {
        self.get_bool(keys::RENDER_SITEMAP, false)
    }

    // Output file names.

    pub fn index_file_name(&self) -> Option<String> {
        self.get_string(keys::INDEX_FILE)
    }

    pub fn feed_file_name(&self) -> Option<String> {
        self.get_string(keys::FEED_FILE)
    }

    pub fn archive_file_name(&self) -> Option<String> {
        self.get_string(keys::ARCHIVE_FILE)
    }

    pub fn sitemap_file_name(&self) -> Option<String> {
        self.get_string(keys::SITEMAP_FILE)
    }

    pub fn tag_path_name(&self) -> Option<String> {
        self.get_string(keys::TAG_PATH)
    }

    pub fn sanitize_tag(&self) -> bool {
        self.get_bool(keys::TAG_SANITIZE, false)
    }

    // URIs without extension.

    pub fn uri_without_extension(&self) -> bool {
        self.get_bool(keys::URI_NO_EXTENSION, false)
    }

    pub fn set_uri_without_extension(&mut self, enable: bool) {
        self.set(keys::URI_NO_EXTENSION, enable);
    }

    pub fn prefix_for_uri_without_extension(&self) -> Option<String> {
        self.get_string(keys::URI_NO_EXTENSION_PREFIX)
    }

    pub fn set_prefix_for_uri_without_extension(&mut self, prefix: &str) {
        self.set(keys::URI_NO_EXTENSION_PREFIX, prefix);
    }

    // Content defaults.

    pub fn draft_suffix(&self) -> String {
        self.get_string_or(keys::DRAFT_SUFFIX, "")
    }

    pub fn default_status(&self) -> String {
        self.get_string_or(keys::DEFAULT_STATUS, "")
    }

    pub fn set_default_status(&mut self, status: &str) {
        self.set(keys::DEFAULT_STATUS, status);
    }

    pub fn default_type(&self) -> String {
        self.get_string_or(keys::DEFAULT_TYPE, "")
    }

    pub fn set_default_type(&mut self, doc_type: &str) {
        self.set(keys::DEFAULT_TYPE, doc_type);
    }

    pub fn date_format(&self) -> Option<String> {
        self.get_string(keys::DATE_FORMAT)
    }

    pub fn header_separator(&self) -> Option<String> {
        self.get_string(keys::HEADER_SEPARATOR)
    }

    pub fn set_header_separator(&mut self, separator: &str) {
        self.set(keys::HEADER_SEPARATOR, separator);
    }

    // Encodings.

    pub fn template_encoding(&self) -> Option<String> {
        self.get_string(keys::TEMPLATE_ENCODING)
    }

    pub fn render_encoding(&self) -> Option<String> {
        self.get_string(keys::RENDER_ENCODING)
    }

    /// Locale handed to thymeleaf templates, e.g. `en` or `de_DE`.
    pub fn thymeleaf_locale(&self) -> Option<String> {
        self.get_string(keys::THYMELEAF_LOCALE)
    }

    pub fn set_thymeleaf_locale(&mut self, locale: &str) {
        self.set(keys::THYMELEAF_LOCALE, locale);
    }

    // Assets and cache.

    pub fn asset_ignore_hidden(&self) -> bool {
        self.get_bool(keys::ASSET_IGNORE_HIDDEN, false)
    }

    pub fn set_asset_ignore_hidden(&mut self, ignore: bool) {
        self.set(keys::ASSET_IGNORE_HIDDEN, ignore);
    }

    pub fn clear_cache(&self) -> bool {
        self.get_bool(keys::CLEAR_CACHE, false)
    }

    pub fn set_clear_cache(&mut self, clear: bool) {
        self.set(keys::CLEAR_CACHE, clear);
    }

    pub fn database_store(&self) -> Option<String> {
        self.get_string(keys::DB_STORE)
    }

    pub fn set_database_store(&mut self, store: &str) {
        self.set(keys::DB_STORE, store);
    }

    pub fn database_path(&self) -> Option<String> {
        self.get_string(keys::DB_PATH)
    }

    pub fn set_database_path(&mut self, path: &str) {
        self.set(keys::DB_PATH, path);
    }

    // Project metadata.

    pub fn version(&self) -> Option<String> {
        self.get_string(keys::VERSION)
    }

    pub fn build_timestamp(&self) -> Option<String> {
        self.get_string(keys::BUILD_TIMESTAMP)
    }

    pub fn example_project_for(&self, template_type: &str) -> Option<String> {
        self.get_string(&format!("{}{template_type}", keys::EXAMPLE_PROJECT_PREFIX))
    }

    pub fn set_example_project(&mut self, template_type: &str, file_name: &str) {
        self.set(format!("{}{template_type}", keys::EXAMPLE_PROJECT_PREFIX), file_name);
    }
}
