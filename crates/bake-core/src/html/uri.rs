//! URL arithmetic for the rewriter. Pure string functions, no HTML.

const SLASH: char = '/';
const CURRENT_DIR: &str = "./";

/// `http://` or `https://` URLs are never touched.
pub fn is_http_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Anything not rooted at `/` is relative to the document.
pub fn is_relative(source: &str) -> bool {
    !source.starts_with(SLASH)
}

/// Directory of the document, with its trailing slash.
///
/// The no-extension URI wins when present; its trailing slash is dropped
/// first, so `blog/2017/05/first_post/` yields `blog/2017/05/`. A URI without
/// any `/` has an empty base.
pub fn base_uri(uri: &str, no_extension_uri: Option<&str>) -> String {
    let uri = match no_extension_uri {
        Some(u) => u.strip_suffix(SLASH).unwrap_or(u),
        None => uri,
    };
    match uri.rfind(SLASH) {
        Some(i) => uri[..=i].to_string(),
        None => String::new(),
    }
}

/// Rewrite one attribute value. `None` means leave it as is.
pub fn transform_source(
    source: &str,
    base_uri: &str,
    site_host: &str,
    prepend_host: bool,
) -> Option<String> {
    if is_http_url(source) {
        return None;
    }

    let mut out = if is_relative(source) {
        let stripped = source.strip_prefix(CURRENT_DIR).unwrap_or(source);
        format!("{base_uri}{stripped}")
    } else {
        source.to_string()
    };

    if prepend_host {
        let separator = if !site_host.ends_with(SLASH) && is_relative(&out) {
            "/"
        } else {
            ""
        };
        out = format!("{site_host}{separator}{out}");
    }

    Some(out)
}
