//! Document types discovered from `template.<type>.file` keys.

use super::keys::{DOCTYPE_FILE_SUFFIX, DOCTYPE_TEMPLATE_PREFIX};

/// Extract `<type>` from a `template.<type>.file` key.
/// The identifier must be non-empty and made of `[A-Za-z0-9_-]`.
pub fn doc_type_of(key: &str) -> Option<&str> {
    let ident = key
        .strip_prefix(DOCTYPE_TEMPLATE_PREFIX)?
        .strip_suffix(DOCTYPE_FILE_SUFFIX)?;
    let valid = !ident.is_empty()
        && ident
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(ident)
}

/// Distinct document types in key enumeration order.
pub fn scan<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ident in keys.into_iter().filter_map(doc_type_of) {
        if !out.iter().any(|t| t == ident) {
            out.push(ident.to_string());
        }
    }
    out
}
