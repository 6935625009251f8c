pub mod defaults;
pub mod derive;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kubenet")]
#[command(about = "Validate cluster network configuration and derive service addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Address the API server binds to
    #[arg(long, global = true, default_value = "0.0.0.0")]
    pub bind_address: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the default network configuration
    #[command(alias = "d")]
    Defaults,
    /// Check a network configuration file
    #[command(alias = "v")]
    Validate { file: PathBuf },
    /// Print the addresses and arguments derived from a configuration file
    #[command(alias = "r")]
    Derive { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
