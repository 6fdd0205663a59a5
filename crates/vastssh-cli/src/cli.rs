//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Keep Vast.ai instances synchronized into a managed block of your
/// ssh config file
#[derive(Parser, Debug)]
#[command(name = "vastssh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// User name written into the wildcard Host entry
    #[arg(long, default_value = "root")]
    pub ssh_user: String,

    /// Prefix for generated host aliases (instance 42 becomes vast42)
    #[arg(long, default_value = "vast")]
    pub ssh_host_name_prefix: String,

    /// Identity file written into the wildcard Host entry
    #[arg(long, default_value = "~/.ssh/vast_key")]
    pub ssh_key_path: String,

    /// Ssh config file to manage (defaults to ~/.ssh/config)
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
