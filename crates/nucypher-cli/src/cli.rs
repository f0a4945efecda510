use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nucypher", about = "nucypher configuration management", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory tree and default ini file
    Init {
        /// Configuration root to create (defaults to the platform location)
        #[arg(long)]
        config_root: Option<PathBuf>,
    },
    /// Validate an ini configuration file against the required schema
    Validate {
        /// Path to the ini file (defaults to the one under the platform root)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Fail on the first invalid entry instead of reporting them all
        #[arg(long)]
        strict: bool,
    },
    /// Check runtime preconditions and configuration tree presence
    Status {
        /// Configuration root to check (defaults to the platform location)
        #[arg(long)]
        config_root: Option<PathBuf>,
    },
}
