//! vastssh CLI
//!
//! Synchronizes a managed block inside the user's ssh config file with
//! the currently running Vast.ai instances.

mod cli;
mod error;
mod sync;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};
use vastssh_inventory::{RenderOptions, VastaiCli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config_path = match cli.config_path {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or(CliError::NoHomeDir)?
            .join(".ssh")
            .join("config"),
    };

    let opts = RenderOptions {
        ssh_user: cli.ssh_user,
        host_prefix: cli.ssh_host_name_prefix,
        key_path: cli.ssh_key_path,
    };

    sync::run_sync(&config_path, &VastaiCli, &opts)
}
