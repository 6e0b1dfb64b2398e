// Inputsense TUI
// Live terminal demonstration of input-modality classification

#[path = "../tui/mod.rs"]
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inputsense_core::{PointerType, Settings};

/// Interactive input-modality demo
#[derive(Parser, Debug)]
#[command(name = "inputsense-tui")]
#[command(version)]
#[command(about = "Watch the modality classifier follow your mouse and keyboard", long_about = None)]
struct Args {
    /// TOML settings file (defaults to ~/.config/inputsense/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the initial pointer type
    #[arg(short, long, value_name = "TYPE")]
    initial: Option<PointerType>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log records would corrupt the alternate screen, so no logger is installed
    let settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };

    let mut config = settings.into_engine_config();
    if let Some(initial) = args.initial {
        config.initial_pointer_type = initial;
    }

    tui::run(config).context("terminal session failed")
}
