// Renders the stacked sphere scene.
// Run with: cargo run --release > out.ppm
//      or:  cargo run --release -- out.png

use anyhow::{Context, Result};
use sheen_core::{Scene, DEFAULT_SPHERE_COUNT};
use sheen_renderer::{render, write_ppm, ImageBuffer, RenderConfig};
use std::env;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    // env_logger writes to stderr, so stdout stays a clean image stream
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let output = env::args().nth(1);

    let start = Instant::now();
    let scene = Scene::stacked(DEFAULT_SPHERE_COUNT).context("Failed to build scene")?;
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::default();

    let start = Instant::now();
    let image = render(&scene, &config)?;
    log::info!("Rendered in {:?}", start.elapsed());

    match output {
        Some(path) => save_image(&image, Path::new(&path))?,
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_ppm(&mut writer, &image).context("Failed to write image to stdout")?;
        }
    }

    Ok(())
}

/// Save through the `image` crate; the format follows the file extension.
fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image
        .to_rgb_image()
        .context("Image buffer does not match its dimensions")?;
    rgb.save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    log::info!("Saved to {}", path.display());
    Ok(())
}
