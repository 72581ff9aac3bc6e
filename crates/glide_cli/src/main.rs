//! Glide CLI
//!
//! Run the demo animations and manage glide.toml.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glide_animation::AnimationManager;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod demo;

use config::{GlideConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "glide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Glide animation engine demos", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file or directory containing glide.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the tick interval in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u32>,

    /// Override the segment duration in milliseconds
    #[arg(long, global = true)]
    duration_ms: Option<u64>,

    /// Override how far the demo window travels
    #[arg(long, global = true)]
    distance: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slide a window right and back with a step animator
    Step,

    /// Move a window diagonally with a group animator
    Group,

    /// Write a default glide.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match &cli.command {
        Commands::Init { path, force } => cmd_init(path, *force),
        Commands::Step => {
            let (manager, config) = setup(&cli)?;
            demo::run_step(&manager, &config.demo)
        }
        Commands::Group => {
            let (manager, config) = setup(&cli)?;
            demo::run_group(&manager, &config.demo)
        }
    }
}

/// Load configuration, apply flag overrides and build the manager
fn setup(cli: &Cli) -> Result<(AnimationManager, GlideConfig)> {
    let mut config = match &cli.config {
        Some(path) => GlideConfig::load(path)?,
        None => GlideConfig::load_or_default()?,
    };

    if let Some(timeout_ms) = cli.timeout_ms {
        config.manager.timeout_ms = timeout_ms;
    }
    if let Some(duration_ms) = cli.duration_ms {
        config.demo.duration_ms = duration_ms;
    }
    if let Some(distance) = cli.distance {
        config.demo.distance = distance;
    }

    // The demos start the timer themselves once their animator is armed
    config.manager.autostart = false;
    let manager =
        AnimationManager::with_config(&config.manager).context("Failed to build manager")?;

    info!(
        "Tick interval {}ms, segment {}ms, distance {}px",
        manager.timeout(),
        config.demo.duration_ms,
        config.demo.distance
    );

    Ok((manager, config))
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&config_path, GlideConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Wrote {}", config_path.display());
    Ok(())
}
