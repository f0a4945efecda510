use anyhow::Result;
use clap::Parser;

mod cli;
mod config_cmds;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Tracing goes to stderr; initialization is a no-op if already set up.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config_root } => config_cmds::run_init(config_root),
        Commands::Validate { path, strict } => config_cmds::run_validate(path, strict),
        Commands::Status { config_root } => config_cmds::run_status(config_root),
    }
}
