//! Gradient Flow entry point
//!
//! Headless host: runs the tick loop and writes rendered frames as PNG files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gradient_flow::renderer::save_png;
use gradient_flow::{Driver, FlowConfig, Preset, Result, Scale};

#[derive(Parser, Debug)]
#[command(name = "gradient-flow")]
#[command(about = "Render the Gradient Flow field to PNG frames", long_about = None)]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Surface height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Force preview scale (otherwise picked from the surface size)
    #[arg(long, default_value_t = false)]
    preview: bool,

    /// Variant: solo, classic, spectrum or drift
    #[arg(long, default_value_t = Preset::Drift)]
    preset: Preset,

    /// JSON config file (overrides --preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Write a frame every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 0)]
    every: u64,

    /// Output directory
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => FlowConfig::load(path)?,
        None => FlowConfig::from_preset(args.preset),
    };
    let scale = if args.preview {
        Scale::Preview
    } else {
        Scale::detect(args.width, args.height)
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut driver = Driver::new(args.width, args.height, scale, config, seed)?;
    log::info!(
        "Running {} ticks with seed {} ({} projectiles, {}px blocks)",
        args.ticks,
        seed,
        driver.state().len(),
        driver.renderer().block_size()
    );

    std::fs::create_dir_all(&args.out)?;

    for _ in 0..args.ticks {
        let grid = driver.tick();
        let t = driver.state().time_ticks;
        if args.every > 0 && t % args.every == 0 {
            let (width, height) = driver.surface_size();
            let buffer = gradient_flow::renderer::rasterize(&grid, width, height);
            save_png(&buffer, &args.out.join(format!("frame_{:06}.png", t)))?;
        }
    }

    if args.every == 0 || args.ticks % args.every != 0 {
        let path = args.out.join(format!("frame_{:06}.png", driver.state().time_ticks));
        save_png(&driver.snapshot(), &path)?;
    }

    log::info!(
        "Done after {} ticks, {} perturbations",
        driver.state().time_ticks,
        driver.state().perturbations
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gradient Flow starting...");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("gradient-flow: {}", e);
            ExitCode::FAILURE
        }
    }
}
