//! Loading a site's configuration from its source folder.

mod common;

use bake_core::config::{
    self, keys, ConfigError, ConfigLoader, EnvironmentLayer, PropertySource, PropertyValue,
};
use std::fs;
use std::path::PathBuf;

#[test]
fn loads_site_host_from_primary_file() {
    let site = common::sample_site();
    let cfg = common::load(site.path());
    assert_eq!(cfg.site_host(), "http://www.jbake.org");
    assert_eq!(cfg.origin(keys::SITE_HOST), Some("bake.properties"));
}

#[test]
fn every_default_key_is_retrievable() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = common::load(dir.path());
    let defaults = config::default_layer();
    for key in defaults.keys() {
        assert!(cfg.get(key).is_some(), "default key {key} missing");
    }
}

#[test]
fn custom_property_and_defaults_together() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bake.properties"), "test.property=12345\n").unwrap();
    let cfg = common::load(dir.path());
    assert_eq!(cfg.get("test.property"), Some(&PropertyValue::from("12345")));
    assert_eq!(cfg.get_string(keys::DESTINATION_FOLDER).as_deref(), Some("output"));
    assert_eq!(cfg.thymeleaf_locale().as_deref(), Some("en"));
}

#[test]
fn primary_file_beats_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bake.properties"), "output.extension=.htm\n").unwrap();
    let cfg = common::load(dir.path());
    assert_eq!(cfg.output_extension(), ".htm");
}

#[test]
fn legacy_file_beats_primary_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("custom.properties"), "site.host=http://legacy.example\n").unwrap();
    fs::write(dir.path().join("bake.properties"), "site.host=http://primary.example\nonly.primary=1\n")
        .unwrap();
    let cfg = common::load(dir.path());
    assert_eq!(cfg.site_host(), "http://legacy.example");
    assert_eq!(cfg.get_int("only.primary", 0), 1);
    assert_eq!(
        cfg.layer_names(),
        vec![
            config::OVERRIDE_LAYER,
            "custom.properties",
            "bake.properties",
            "default.properties",
            "environment"
        ]
    );
}

#[test]
fn environment_only_fills_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let env = EnvironmentLayer::from_vars([("site.host", "http://env.example"), ("BUILD_ID", "77")]);
    let cfg = ConfigLoader::new()
        .with_environment(env)
        .load(dir.path())
        .unwrap();
    // Bundled default wins over the environment.
    assert_eq!(cfg.site_host(), "http://localhost:8820");
    assert_eq!(cfg.get_string("BUILD_ID").as_deref(), Some("77"));
    assert_eq!(cfg.origin("BUILD_ID"), Some("environment"));
}

#[test]
fn missing_source_folder_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent");
    let err = config::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::SourceMissing { ref path } if path == &missing));
    assert!(err.to_string().contains(&missing.display().to_string()));
}

#[test]
fn derived_folders_under_source() {
    let site = common::sample_site();
    let cfg = common::load(site.path());
    assert_eq!(cfg.source_folder(), Some(site.path().to_path_buf()));
    assert_eq!(cfg.asset_folder(), Some(site.path().join("assets")));
    assert_eq!(cfg.template_folder(), Some(site.path().join("templates")));
    assert_eq!(cfg.content_folder(), Some(site.path().join("content")));
    assert_eq!(cfg.destination_folder(), Some(site.path().join("output")));
}

#[test]
fn set_source_folder_rederives_asset_folder() {
    let site = common::sample_site();
    let mut cfg = common::load(site.path());
    for root in ["/var/www/site", "relative/site"] {
        cfg.set_source_folder(root);
        let name = cfg.asset_folder_name().unwrap();
        assert_eq!(cfg.asset_folder(), Some(PathBuf::from(root).join(name)));
    }
}

/// Destination does not follow a source folder change; only an explicit
/// rename re-derives it. Kept as observed behaviour.
#[test]
fn destination_does_not_follow_source_folder() {
    let site = common::sample_site();
    let mut cfg = common::load(site.path());
    cfg.set_source_folder("/var/www/site");
    assert_eq!(cfg.destination_folder(), Some(site.path().join("output")));
    cfg.set_destination_folder_name("public");
    assert_eq!(cfg.destination_folder(), Some(PathBuf::from("/var/www/site/public")));
}

#[test]
fn empty_folder_overrides_keep_derivation() {
    let site = common::sample_site();
    let mut cfg = common::load(site.path());
    cfg.set_template_folder("");
    cfg.set_asset_folder("");
    cfg.set_content_folder("");
    cfg.set_destination_folder("");
    assert_eq!(cfg.template_folder(), Some(site.path().join("templates")));
    assert_eq!(cfg.asset_folder(), Some(site.path().join("assets")));
    assert_eq!(cfg.content_folder(), Some(site.path().join("content")));
    assert_eq!(cfg.destination_folder(), Some(site.path().join("output")));
}

#[test]
fn custom_template_folder_updates_name() {
    let site = common::sample_site();
    let elsewhere = tempfile::tempdir().unwrap();
    let custom = elsewhere.path().join("my_custom_templates");
    fs::create_dir(&custom).unwrap();

    let mut cfg = common::load(site.path());
    cfg.set_template_folder(&custom);
    assert_eq!(cfg.template_folder_name().as_deref(), Some("my_custom_templates"));
    assert_eq!(
        cfg.template_file_for("masterindex"),
        Some(custom.join("index.ftl"))
    );
}

#[test]
fn template_file_and_extension_per_doc_type() {
    let site = common::sample_site();
    let mut cfg = common::load(site.path());
    assert_eq!(
        cfg.template_file_for("masterindex"),
        Some(site.path().join("templates/index.ftl"))
    );
    assert_eq!(cfg.template_file_for("none"), None);

    assert_eq!(cfg.output_extension_for("masterindex"), ".html");
    cfg.set_output_extension_for("masterindex", ".xhtml");
    assert_eq!(cfg.output_extension_for("masterindex"), ".xhtml");
}

#[test]
fn markdown_extensions_as_list() {
    let site = common::sample_site();
    let cfg = common::load(site.path());
    assert_eq!(
        cfg.markdown_extensions(),
        vec!["HARDWRAPS", "AUTOLINKS", "FENCED_CODE_BLOCKS", "DEFINITIONS"]
    );
}

#[test]
fn document_types_from_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = common::load(dir.path());
    assert_eq!(
        cfg.document_types(),
        [
            "allcontent",
            "masterindex",
            "feed",
            "archive",
            "tag",
            "tagsindex",
            "sitemap",
            "post",
            "page"
        ]
    );
}

#[test]
fn site_keys_listed_with_utf8_values() {
    let site = common::sample_site();
    let cfg = common::load(site.path());
    assert!(cfg.keys().iter().any(|k| k == "site.about"));
    assert_eq!(
        cfg.get_string("site.about").as_deref(),
        Some("Bake a site café style")
    );
}

#[test]
fn path_flags_default_on() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = common::load(dir.path());
    assert!(cfg.relative_path_prepend_host());
    assert!(cfg.img_path_prepend_host());
    assert!(cfg.relative_path_update());
    assert!(cfg.img_path_update());
}

#[test]
fn legacy_flag_key_in_site_file_disables() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bake.properties"),
        "img.path.prepend.host=false\nimg.path.update=false\n",
    )
    .unwrap();
    let cfg = common::load(dir.path());
    assert!(!cfg.relative_path_prepend_host());
    assert!(!cfg.relative_path_update());
}

#[test]
fn asciidoctor_options() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = common::load(dir.path());
    assert_eq!(cfg.asciidoctor_option("template_dirs").to_string(), "");

    cfg.set("asciidoctor.option.requires", "asciidoctor-diagram");
    cfg.set(
        "asciidoctor.option.template_dirs",
        vec!["src/template1".to_string(), "src/template2".to_string()],
    );
    let option_keys = cfg.asciidoctor_option_keys();
    assert!(option_keys.contains(&"requires".to_string()));
    assert!(option_keys.contains(&"template_dirs".to_string()));
    assert!(cfg.asciidoctor_option("requires").to_string().contains("asciidoctor-diagram"));
    assert_eq!(
        cfg.asciidoctor_option("template_dirs").as_list(),
        vec!["src/template1", "src/template2"]
    );
}

#[test]
fn missing_template_binding_warns_with_key_and_type() {
    let site = common::sample_site();
    let cfg = common::load(site.path());
    let (file, logs) = common::capture_warnings(|| cfg.template_file_for("gallery"));
    assert_eq!(file, None);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(
        logs.contains("Cannot find configuration key 'template.gallery.file' for document type 'gallery'"),
        "{logs}"
    );

    let (_, logs) = common::capture_warnings(|| cfg.template_file_for("masterindex"));
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn missing_option_warns_and_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = common::load(dir.path());
    let (value, logs) = common::capture_warnings(|| cfg.asciidoctor_option("backend"));
    assert_eq!(value, PropertyValue::Text(String::new()));
    assert!(logs.contains("Cannot find option 'asciidoctor.option.backend'"), "{logs}");
}
