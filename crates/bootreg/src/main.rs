//! bootreg - Entry Point
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `bootreg check` | Run every configured plugin and report each resource |
//! | `bootreg init` | Write a configuration file with every section defaulted |

use anyhow::{Context, bail};
use bootreg::domain::constants::DEFAULT_PG_SOURCE_EXAMPLE;
use bootreg::infrastructure::constants::DEFAULT_CONFIG_FILENAME;
use bootreg::infrastructure::logging::init_logging;
use bootreg::{
    BootstrapConfig, ConfigLoader, ConfigReaderOptions, LoggerOptions, PostgresOptions,
    RedisOptions, Registry,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command line interface for bootreg
#[derive(Parser, Debug)]
#[command(name = "bootreg")]
#[command(about = "bootreg - bootstrap registry for shared service handles")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every configured plugin and report which resources came up
    ///
    /// Exits non-zero as soon as one plugin fails.
    Check,

    /// Write a configuration file with every section at its defaults
    Init {
        /// Destination file
        #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check => check(cli.config.as_deref()),
        Command::Init { path, force } => init(&path, force),
    }
}

fn check(config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load bootstrap configuration")?;
    init_logging(&config.logging)?;

    let requested = config.requested();
    if requested.is_empty() {
        println!("No resources configured");
        return Ok(());
    }

    let mut registry = Registry::new();
    let outcome = registry.add_plugins(bootreg::plugins(&config));

    for kind in &requested {
        let status = if registry.contains(*kind) { "ok" } else { "missing" };
        println!("{:<24}{}", kind.to_string(), status);
    }

    outcome.context("Bootstrap failed")?;

    if let Some(logger) = registry.logger() {
        let populated = registry.populated();
        logger.in_scope(|| tracing::info!(resources = ?populated, "Bootstrap complete"));
    }
    Ok(())
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }

    let config = BootstrapConfig {
        logger: Some(LoggerOptions::default()),
        config_reader: Some(ConfigReaderOptions::default()),
        redis: Some(RedisOptions::default()),
        postgres: Some(PostgresOptions::new(DEFAULT_PG_SOURCE_EXAMPLE)),
        ..BootstrapConfig::default()
    };
    ConfigLoader::new()
        .save_to_file(&config, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
