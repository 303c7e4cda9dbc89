//! CLI command handlers, one file per command.

mod config;
mod doctypes;
mod rewrite;

pub use config::{render_config, run_config, DumpFormat};
pub use doctypes::run_doctypes;
pub use rewrite::run_rewrite;
