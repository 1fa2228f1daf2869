use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use carpark::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use carpark::cli::{Cli, Commands};
use carpark::config::CarParkConfig;
use carpark::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    let config = load_config(cli.config.as_deref())?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_config(explicit: Option<&str>) -> Result<CarParkConfig> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    CarParkConfig::load(explicit.map(Path::new), &cwd).context("Failed to load config")
}
