mod commands;
mod script;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Drive the lightbox image viewer engine headlessly from scripted touches.
#[derive(Parser)]
#[command(name = "lightbox", version, about, long_about = None)]
struct Cli {
    /// Log every gesture decision and timer firing to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show resting scale, centring and pan limits of an image
    Geometry(commands::geometry::GeometryArgs),
    /// Replay a scripted touch session against the viewer
    Replay(commands::replay::ReplayArgs),
    /// Print a default viewer config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match &cli.command {
        Commands::Geometry(args) => commands::geometry::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "lightbox_core=debug,lightbox=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
