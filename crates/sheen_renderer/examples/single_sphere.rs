//! Single sphere example.
//!
//! Renders one sphere in front of the checkerboard and prints PPM to stdout.
//! Run with: cargo run --example single_sphere -- 64 > sphere.ppm

use sheen_renderer::{render, write_ppm, Color, RenderConfig, Scene, Sphere, Vec3};
use std::io::{self, BufWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 64,
    };

    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.75, Color::new(0.9, 0.3, 0.2), 0.0)?;
    let scene: Scene = vec![sphere].into_iter().collect();

    let config = RenderConfig::new()
        .with_resolution(size, size)
        .with_eye(Vec3::new(0.0, 0.0, 2.0));

    let image = render(&scene, &config)?;

    let stdout = io::stdout();
    write_ppm(&mut BufWriter::new(stdout.lock()), &image)?;
    Ok(())
}
