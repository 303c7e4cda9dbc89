//! CLI for inspecting a bake site.

mod commands;

use anyhow::{Context, Result};
use bake_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_doctypes, run_rewrite, DumpFormat};

/// Top-level CLI for the bake site generator core.
#[derive(Debug, Parser)]
#[command(name = "bake")]
#[command(about = "bake: inspect site configuration and rewrite document URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the effective configuration of a site.
    Config {
        /// Site source folder.
        source: PathBuf,
        /// Print JSON instead of TOML.
        #[arg(long)]
        json: bool,
        /// Also print keys that only come from the process environment.
        #[arg(long)]
        include_env: bool,
    },

    /// List document types with their template file and output extension.
    Doctypes {
        /// Site source folder.
        source: PathBuf,
    },

    /// Rewrite relative href/src URLs of an HTML fragment file and print it.
    Rewrite {
        /// Site source folder (supplies site host and prepend-host policy).
        source: PathBuf,
        /// Document URI, e.g. blog/2017/05/first_post.html.
        #[arg(long)]
        uri: String,
        /// Directory-style URI used when extensionless output is enabled.
        #[arg(long, value_name = "URI")]
        no_extension_uri: Option<String>,
        /// HTML fragment file.
        file: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Config {
                source,
                json,
                include_env,
            } => {
                let cfg = load(&source)?;
                let format = if json { DumpFormat::Json } else { DumpFormat::Toml };
                run_config(&cfg, format, include_env)?;
            }
            CliCommand::Doctypes { source } => run_doctypes(&load(&source)?),
            CliCommand::Rewrite {
                source,
                uri,
                no_extension_uri,
                file,
            } => {
                let cfg = load(&source)?;
                run_rewrite(&cfg, &uri, no_extension_uri.as_deref(), &file)?;
            }
        }

        Ok(())
    }
}

fn load(source: &std::path::Path) -> Result<config::EffectiveConfiguration> {
    let cfg = config::load(source)
        .with_context(|| format!("load configuration from {}", source.display()))?;
    tracing::debug!("loaded config layers: {:?}", cfg.layer_names());
    Ok(cfg)
}

#[cfg(test)]
mod tests;
