//! # VOXPLOT Demo
//!
//! Renders a synthetic spherical shell and saves the last figure as PNG.
//!
//! ```bash
//! # Defaults: magma, 30% sampling, six-view grid, Voxel.png @ 75 dpi
//! ./voxplot_demo
//!
//! # Any PlotConfig TOML
//! ./voxplot_demo plot.toml
//! ```

use std::path::Path;
use std::time::Instant;

use voxplot::{plot_3d_voxels, HeadlessPresenter, PlotConfig, PlotResult, Volume};

/// Edge length of the demo cube.
const SIZE: usize = 48;

/// Shell of radius `0.35 · n` and thickness ~4 voxels, brighter toward +z.
#[allow(clippy::cast_precision_loss)]
fn shell_volume(n: usize) -> PlotResult<Volume> {
    let c = n as f32 / 2.0;
    let radius = n as f32 * 0.35;
    let mut data = Vec::with_capacity(n * n * n);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let (dx, dy, dz) = (x as f32 - c, y as f32 - c, z as f32 - c);
                let d = (dx * dx + dy * dy + dz * dz).sqrt();
                let band = (1.0 - (d - radius).abs() / 2.0).max(0.0);
                let tilt = 0.5 + 0.5 * z as f32 / n as f32;
                data.push(band * tilt);
            }
        }
    }
    Ok(Volume::from_spatial([n, n, n], data)?)
}

fn load_config() -> PlotResult<PlotConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            println!("📄 Loading config from {path} ...");
            PlotConfig::from_toml_file(Path::new(&path))
        }
        None => Ok(PlotConfig::default()),
    }
}

fn run() -> PlotResult<()> {
    let mut config = load_config()?;
    config.options.save_img = true;

    println!("🧊 Building {SIZE}³ shell volume ...");
    let volume = shell_volume(SIZE)?;

    let start = Instant::now();
    let output = plot_3d_voxels(&volume, &config, &mut rand::thread_rng(), &mut HeadlessPresenter)?;
    let elapsed = start.elapsed();

    println!();
    println!("  Non-zero voxels: {}", output.cloud.non_zero_count);
    println!("  Sampled points:  {}", output.cloud.len());
    for figure in &output.figures {
        let (w, h) = figure.pixel_size();
        println!("  Figure {:<11} {w}x{h} px, {} panel(s)", figure.kind, figure.panels.len());
    }
    if let Some(path) = &output.saved_path {
        println!("  Saved:           {}", path.display());
    }
    println!("  Elapsed:         {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}

fn main() {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                       VOXPLOT DEMO v0.1.0");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    if let Err(e) = run() {
        eprintln!("   ✗ FATAL: {e}");
        std::process::exit(1);
    }

    println!();
    println!("✓ Done");
}
