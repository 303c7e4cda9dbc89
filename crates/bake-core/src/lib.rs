//! Core of the bake static site generator.
//!
//! - [`config`]: resolves the effective site configuration from layered
//!   property sources and derives folders relative to the source root.
//! - [`html`]: rewrites relative `href`/`src` URLs in rendered body fragments.

pub mod config;
pub mod html;
pub mod logging;

pub use config::{load, ConfigError, ConfigLoader, EffectiveConfiguration, PropertyValue};
pub use html::{rewrite_relative_urls, DocumentModel, UrlContext};
