//! Core single-pass renderer.
//!
//! One ray per pixel, nearest-hit by linear scan, Phong shading on hits and
//! the checkerboard on misses. No bounces, no shadows, no multi-sampling.

use crate::{closest_hit, phong_shade, Camera, Checkerboard, Hit, PhongMaterial};
use sheen_core::{PointLight, Scene};
use sheen_math::{Color, Ray, Vec3};
use thiserror::Error;

/// Errors raised when a render configuration cannot be used.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("Resolution {width}x{height} is too small; both dimensions must be at least 2")]
    ResolutionTooSmall { width: u32, height: u32 },

    #[error("Shininess must be finite and non-negative, got {0}")]
    InvalidShininess(f32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
///
/// Everything the render loop needs besides the scene. Built once and only
/// borrowed while rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Eye point all primary rays start from
    pub eye: Vec3,
    pub light: PointLight,
    /// Specular color and exponent applied to every sphere
    pub material: PhongMaterial,
    /// Background for rays that hit nothing
    pub background: Checkerboard,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1024,
            image_height: 1024,
            eye: Vec3::new(0.0, 0.0, 2.0),
            light: PointLight::default(),
            material: PhongMaterial::default(),
            background: Checkerboard::default(),
        }
    }
}

impl RenderConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set light position.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = light;
        self
    }

    /// Set specular settings.
    pub fn with_material(mut self, material: PhongMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set the background pattern.
    pub fn with_background(mut self, background: Checkerboard) -> Self {
        self.background = background;
        self
    }

    /// Check that the configuration can be rendered.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_width < 2 || self.image_height < 2 {
            return Err(ConfigError::ResolutionTooSmall {
                width: self.image_width,
                height: self.image_height,
            });
        }

        let shininess = self.material.shininess;
        if !(shininess.is_finite() && shininess >= 0.0) {
            return Err(ConfigError::InvalidShininess(shininess));
        }

        Ok(())
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.eye, self.image_width, self.image_height)
    }
}

/// Shade a known hit.
pub fn shade_hit(ray: &Ray, hit: &Hit, config: &RenderConfig) -> Color {
    let p = ray.at(hit.t);
    let normal = (p - hit.sphere.center()).normalize();
    let view_dir = (ray.origin() - p).normalize();

    phong_shade(
        p,
        normal,
        view_dir,
        config.light.position,
        hit.sphere.color(),
        config.material.specular_color,
        config.material.shininess,
    )
}

/// Compute the color seen by a primary ray through NDC point `(u, v)`.
pub fn ray_color(ray: &Ray, u: f32, v: f32, scene: &Scene, config: &RenderConfig) -> Color {
    match closest_hit(scene, ray) {
        Some(hit) => shade_hit(ray, &hit, config),
        None => config.background.color_at(u, v),
    }
}

/// Render a single pixel given its column `i` and scan index `j`.
pub fn render_pixel(camera: &Camera, scene: &Scene, i: u32, j: u32, config: &RenderConfig) -> Color {
    let (u, v) = camera.ndc(i, j);
    let ray = camera.get_ray(u, v);
    ray_color(&ray, u, v, scene, config)
}

/// Quantize one color channel to 8 bits.
///
/// Values at or below 0 map to 0, values at or above 1 map to 255, and
/// everything in between is scaled by 255.999 and truncated. NaN maps to 0.
#[inline]
pub fn quantize(c: f32) -> u8 {
    if c <= 0.0 {
        0
    } else if c >= 1.0 {
        255
    } else {
        (c * 255.999) as u8
    }
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored in output order: row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }

    /// Get the pixel at column `x` of output row `row`.
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[self.index(x, row)]
    }

    /// Set the pixel at column `x` of output row `row`.
    pub fn set(&mut self, x: u32, row: u32, color: Color) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }

    /// Quantized pixels in output order.
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().map(|c| color_to_rgb(*c)).collect()
    }

    /// Convert to an `image` buffer for saving in other formats.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let rgb = self.to_rgb8();
        let bytes: &[u8] = bytemuck::cast_slice(&rgb);
        image::RgbImage::from_raw(self.width, self.height, bytes.to_vec())
    }
}

/// Render the entire scene to an image buffer.
///
/// Rows are scanned from the top of the image plane (`v = 1`) down, columns
/// left to right.
pub fn render(scene: &Scene, config: &RenderConfig) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let camera = config.camera();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::info!(
        "Rendering {}x{} image with {} spheres",
        camera.image_width,
        camera.image_height,
        scene.len()
    );

    for row in 0..camera.image_height {
        let j = camera.scan_index(row);
        for i in 0..camera.image_width {
            let color = render_pixel(&camera, scene, i, j, config);
            image.set(i, row, color);
        }
    }

    log::debug!("Finished {} pixels", image.pixels.len());
    Ok(image)
}
