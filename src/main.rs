//! udex - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// udex - terminal user directory explorer
#[derive(Parser, Debug)]
#[command(name = "udex")]
#[command(version)]
#[command(about = "TUI application for browsing user records from a JSON REST endpoint")]
pub struct Args {
    /// Users endpoint URL
    #[arg(long)]
    pub users_url: Option<String>,

    /// Posts endpoint URL (the selected user's id is appended as a
    /// userId query parameter)
    #[arg(long)]
    pub posts_url: Option<String>,

    /// Start with this search term active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Event-loop poll timeout in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Propagate --no-color through the environment so every style
    // decision sees the same answer.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Precedence chain: defaults, config file, env vars, CLI flags.
    let config = {
        let config_file = udex::config::load_config_with_precedence(args.config.clone())?;
        let merged = udex::config::merge_config(config_file);
        let with_env = udex::config::apply_env_overrides(merged);
        udex::config::apply_cli_overrides(
            with_env,
            args.users_url.clone(),
            args.posts_url.clone(),
            args.tick_ms,
        )
    };

    udex::logging::init(&config.log_file_path)?;

    info!(config = ?config, "configuration loaded and resolved");

    udex::view::run_app(config, args.search)?;

    Ok(())
}
