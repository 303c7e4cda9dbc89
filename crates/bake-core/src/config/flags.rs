//! Boolean flags that exist under two key names.
//!
//! `img.path.*` is the historical spelling of `relative.path.*`. Each pair is
//! one logical flag: both accessor names read and write through
//! [`PathFlag`], so they can never disagree.

use super::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFlag {
    /// Prefix rewritten URLs with the site host.
    PrependHost,
    /// Rewrite relative URLs in rendered bodies at all.
    Update,
}

impl PathFlag {
    /// Current key first, legacy key second.
    pub fn keys(self) -> [&'static str; 2] {
        match self {
            PathFlag::PrependHost => [keys::RELATIVE_PATH_PREPEND_HOST, keys::IMG_PATH_PREPEND_HOST],
            PathFlag::Update => [keys::RELATIVE_PATH_UPDATE, keys::IMG_PATH_UPDATE],
        }
    }

    /// Value when neither key is set.
    pub fn default_value(self) -> bool {
        match self {
            PathFlag::PrependHost | PathFlag::Update => true,
        }
    }

    pub fn combine(self, current: bool, legacy: bool) -> bool {
        combine(self.default_value(), current, legacy)
    }
}

/// Combine the readings of an aliased pair: AND when the default is true
/// (either key can switch it off), OR when it is false (either key can switch
/// it on). Both [`PathFlag`]s default to true today.
pub fn combine(default: bool, current: bool, legacy: bool) -> bool {
    if default {
        current && legacy
    } else {
        current || legacy
    }
}
