//! Rewriting of relative URLs in rendered body fragments.
//!
//! `<a href>` and `<img src>` values that are not absolute `http(s)` URLs are
//! resolved against the document's directory and, when the site is
//! configured to, prefixed with the site host.

mod rewrite;
mod uri;

pub use rewrite::{
    rewrite_fragment, rewrite_relative_urls, DocumentModel, UrlContext, BODY, NO_EXTENSION_URI, URI,
};
pub use uri::{base_uri, is_http_url, is_relative, transform_source};
