use anyhow::{Context, Result};
use clap::Parser;
use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gui", about = "Interactive Mandelbrot set viewer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    viewer: ViewerArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.viewer.to_config().context("invalid view settings")?;

    RunGuiCommand::new(PixelsPresenterFactory::new(), config).execute()
}
