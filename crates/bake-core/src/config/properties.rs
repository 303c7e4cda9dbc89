//! `.properties` text parsing.
//!
//! Supports the subset site configuration files use in practice:
//! - `#` / `!` comment lines and blank lines
//! - `key=value`, `key: value` and `key value`
//! - trailing-backslash line continuation
//! - `\t \n \r \f \\ \uXXXX` escapes (any other escaped char stands for itself)
//!
//! Values are split on [`LIST_DELIMITER`] with each element trimmed; the
//! delimiter cannot be escaped.

use super::value::PropertyValue;

/// Delimiter for list-valued properties.
pub const LIST_DELIMITER: char = ',';

/// Parse properties text into `(key, value)` entries in file order.
/// A key may appear more than once; the layer decides how to merge repeats.
pub fn parse(text: &str) -> Vec<(String, PropertyValue)> {
    logical_lines(text)
        .iter()
        .filter_map(|line| split_entry(line))
        .map(|(key, raw)| (unescape(&key), to_value(&unescape(&raw))))
        .collect()
}

/// Split a raw value into a scalar or a list.
pub fn to_value(raw: &str) -> PropertyValue {
    let mut items: Vec<String> = raw
        .split(LIST_DELIMITER)
        .map(|s| s.trim().to_string())
        .collect();
    if items.len() == 1 {
        PropertyValue::Text(items.remove(0))
    } else {
        PropertyValue::List(items)
    }
}

/// Join continuation lines and drop comments/blank lines.
fn logical_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending: Option<String> = None;

    for physical in text.lines() {
        let trimmed = physical.trim_start();
        let mut line = match pending.take() {
            Some(mut acc) => {
                acc.push_str(trimmed);
                acc
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                trimmed.to_string()
            }
        };

        if ends_with_continuation(&line) {
            line.pop();
            pending = Some(line);
        } else {
            out.push(line);
        }
    }

    if let Some(last) = pending {
        out.push(last);
    }
    out
}

/// An odd number of trailing backslashes means the last one escapes the newline.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn is_separator(c: char) -> bool {
    c == '=' || c == ':'
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> Option<(String, String)> {
    let mut key = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            key.push(c);
            if let Some(escaped) = chars.next() {
                key.push(escaped);
            }
            continue;
        }
        if is_separator(c) || c.is_whitespace() {
            // Whitespace may be followed by an explicit separator.
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            if !is_separator(c) && chars.peek().is_some_and(|&c| is_separator(c)) {
                chars.next();
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
            }
            break;
        }
        key.push(c);
    }

    if key.is_empty() {
        return None;
    }
    Some((key, chars.collect()))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => {
                        out.push(decoded);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    _ => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
