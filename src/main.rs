use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mandelbrot_viewer::{
    Complex, PpmFilePresenter, RenderCommand, ViewerArgs, classify_point,
    DEFAULT_MAX_ITERATIONS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mandelbrot_viewer", about = "Headless Mandelbrot set renderer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one view to a PPM image
    Render(RenderArgs),
    /// Classify a single point of the complex plane
    Classify(ClassifyArgs),
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    viewer: ViewerArgs,

    /// Output PPM file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Real part
    #[arg(allow_negative_numbers = true)]
    re: f64,

    /// Imaginary part
    #[arg(allow_negative_numbers = true)]
    im: f64,

    /// Escape-time iteration budget
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => render(args),
        Commands::Classify(args) => classify(args),
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = args.viewer.to_config().context("invalid view settings")?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut command = RenderCommand::new(PpmFilePresenter::new());
    let summary = command.generate(&config)?;
    command
        .write(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Image size:  {}x{}", config.raster.width(), config.raster.height());
    println!("Iterations:  {}", config.mandelbrot.max_iterations);
    println!("Members:     {} of {}", summary.members, summary.pixels);
    println!("Duration:    {:?}", summary.duration);
    println!("Written to:  {}", args.output.display());

    Ok(())
}

fn classify(args: &ClassifyArgs) -> Result<()> {
    let result = classify_point(Complex::new(args.re, args.im), args.iterations)?;
    println!("{result}");

    Ok(())
}
