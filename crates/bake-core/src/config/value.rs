//! Property values as stored in a layer.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single property value.
///
/// Files only ever produce `Text` and `List`; the typed variants come from
/// runtime setters (`set_posts_per_page`, folder derivation, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
    Int(i64),
    Path(PathBuf),
}

impl PropertyValue {
    /// String form. A list yields its first element.
    pub fn as_string(&self) -> Option<String> {
        match self {
            PropertyValue::Text(s) => Some(s.clone()),
            PropertyValue::List(items) => items.first().cloned(),
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Int(n) => Some(n.to_string()),
            PropertyValue::Path(p) => Some(p.display().to_string()),
        }
    }

    /// Boolean form; `None` when the value does not read as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            other => parse_bool(&other.as_string()?),
        }
    }

    /// Integer form; `None` when the value does not parse.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(n) => Some(*n),
            other => other.as_string()?.trim().parse().ok(),
        }
    }

    /// List form. Scalars become a one-element list.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            PropertyValue::List(items) => items.clone(),
            other => other.as_string().into_iter().collect(),
        }
    }

    /// Path form, for the derived folder properties.
    pub fn as_path(&self) -> Option<PathBuf> {
        match self {
            PropertyValue::Path(p) => Some(p.clone()),
            other => other.as_string().map(PathBuf::from),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::List(items) => write!(f, "{}", items.join(",")),
            other => write!(f, "{}", other.as_string().unwrap_or_default()),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        PropertyValue::List(items)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<PathBuf> for PropertyValue {
    fn from(p: PathBuf) -> Self {
        PropertyValue::Path(p)
    }
}
