//! Attribute rewriting over a streaming HTML rewriter.
//!
//! The fragment is rewritten in place: untouched markup is copied through
//! byte for byte and no `<html>`/`<body>` wrapper is ever added.
//!
//! The tokenizer treats `<noscript>` content as raw text (scripting enabled),
//! so that content is collected and rewritten as a fragment of its own.

use lol_html::html_content::{ContentType, Element, TextChunk};
use lol_html::{element, rewrite_str, text, HandlerResult, RewriteStrSettings};
use serde_json::Value;

use super::uri;
use crate::config::EffectiveConfiguration;

/// Fields of a document as handed around by the renderer.
pub type DocumentModel = serde_json::Map<String, Value>;

/// Document URI, e.g. `blog/2017/05/first_post.html`.
pub const URI: &str = "uri";
/// Directory-style URI used when extensionless output is enabled.
pub const NO_EXTENSION_URI: &str = "noExtensionUri";
/// Rendered HTML body fragment.
pub const BODY: &str = "body";

/// Per-document input of the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlContext {
    pub uri: String,
    pub no_extension_uri: Option<String>,
    pub site_host: String,
    pub prepend_host: bool,
}

impl UrlContext {
    /// Build from document fields plus the site host and prepend-host policy
    /// of `config`. A missing `uri` field reads as empty.
    pub fn from_document(model: &DocumentModel, config: &EffectiveConfiguration) -> Self {
        Self {
            uri: model.get(URI).and_then(field_text).unwrap_or_default(),
            no_extension_uri: model.get(NO_EXTENSION_URI).and_then(field_text),
            site_host: config.site_host(),
            prepend_host: config.relative_path_prepend_host(),
        }
    }

    pub fn base_uri(&self) -> String {
        uri::base_uri(&self.uri, self.no_extension_uri.as_deref())
    }

    /// New value for one attribute, `None` when it stays as is.
    pub fn transform(&self, source: &str) -> Option<String> {
        uri::transform_source(source, &self.base_uri(), &self.site_host, self.prepend_host)
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn rewrite_attribute(el: &mut Element, attribute: &str, ctx: &UrlContext, base: &str) -> HandlerResult {
    let Some(source) = el.get_attribute(attribute) else {
        return Ok(());
    };
    if let Some(rewritten) =
        uri::transform_source(&source, base, &ctx.site_host, ctx.prepend_host)
    {
        el.set_attribute(attribute, &rewritten)?;
    }
    Ok(())
}

// Chunks of one text node are buffered and emitted once, rewritten, on the last.
fn rewrite_noscript(chunk: &mut TextChunk, buffer: &mut String, ctx: &UrlContext) -> HandlerResult {
    buffer.push_str(chunk.as_str());
    if chunk.last_in_text_node() {
        let inner = rewrite_fragment(buffer, ctx);
        chunk.replace(&inner, ContentType::Html);
        buffer.clear();
    } else {
        chunk.remove();
    }
    Ok(())
}

/// Rewrite `a[href]` and `img[src]` in `html`, including those inside
/// `<noscript>`.
///
/// Never fails: if the fragment cannot be processed it is returned unchanged
/// and a warning is logged.
pub fn rewrite_fragment(html: &str, ctx: &UrlContext) -> String {
    let base = ctx.base_uri();
    let mut noscript = String::new();

    let settings = RewriteStrSettings {
        element_content_handlers: vec![
            element!("a[href]", |el| rewrite_attribute(el, "href", ctx, &base)),
            element!("img[src]", |el| rewrite_attribute(el, "src", ctx, &base)),
            text!("noscript", |t| rewrite_noscript(t, &mut noscript, ctx)),
        ],
        ..RewriteStrSettings::default()
    };

    match rewrite_str(html, settings) {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!("could not rewrite urls for '{}': {}", ctx.uri, e);
            html.to_string()
        }
    }
}

/// Rewrite the `body` field of a document in place.
///
/// Expects `uri` (and optionally `noExtensionUri`) alongside `body`; a
/// document without a body is left alone. Whether to call this at all is the
/// caller's decision (see `EffectiveConfiguration::relative_path_update`).
pub fn rewrite_relative_urls(model: &mut DocumentModel, config: &EffectiveConfiguration) {
    let Some(body) = model.get(BODY).and_then(field_text) else {
        return;
    };
    let ctx = UrlContext::from_document(model, config);
    let rewritten = rewrite_fragment(&body, &ctx);
    model.insert(BODY.to_string(), Value::String(rewritten));
}
