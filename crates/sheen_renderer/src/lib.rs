//! Sheen Renderer - single-pass Phong ray tracing on the CPU.
//!
//! One primary ray per pixel, nearest sphere by brute-force scan, Phong
//! shading on hits and a procedural checkerboard on misses.

mod background;
mod camera;
mod hittable;
mod ppm;
mod renderer;
mod shading;

pub use background::Checkerboard;
pub use camera::Camera;
pub use hittable::{closest_hit, intersect_sphere, Hit, Hittable};
pub use ppm::write_ppm;
pub use renderer::{
    color_to_rgb, quantize, ray_color, render, render_pixel, shade_hit, ConfigError,
    ConfigResult, ImageBuffer, RenderConfig,
};
pub use shading::{phong_shade, PhongMaterial, PhongTerms, AMBIENT_STRENGTH};

/// Re-export common types from sheen_core and sheen_math
pub use sheen_core::{PointLight, Scene, SceneError, Sphere, DEFAULT_SPHERE_COUNT};
pub use sheen_math::{Color, Interval, Ray, Vec3};
