//! `bake rewrite` – rewrite relative URLs of one fragment file.

use anyhow::{Context, Result};
use bake_core::config::EffectiveConfiguration;
use bake_core::html::{self, DocumentModel, BODY, NO_EXTENSION_URI, URI};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn run_rewrite(
    cfg: &EffectiveConfiguration,
    uri: &str,
    no_extension_uri: Option<&str>,
    file: &Path,
) -> Result<()> {
    let body = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;

    if !cfg.relative_path_update() {
        tracing::info!("relative.path.update is off for this site; rewriting anyway");
    }

    let mut model = DocumentModel::new();
    model.insert(URI.to_string(), Value::from(uri));
    if let Some(no_ext) = no_extension_uri {
        model.insert(NO_EXTENSION_URI.to_string(), Value::from(no_ext));
    }
    model.insert(BODY.to_string(), Value::from(body));

    html::rewrite_relative_urls(&mut model, cfg);

    if let Some(out) = model.get(BODY).and_then(Value::as_str) {
        print!("{out}");
    }
    Ok(())
}
