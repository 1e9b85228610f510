//! Pinhole camera for ray generation.
//!
//! Rays leave a single eye point and pass through an image plane at `z = 0`
//! that spans [-1, 1] on both axes.

use sheen_math::{Ray, Vec3};

/// Camera for generating one ray per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
}

impl Camera {
    /// Create a camera. Both dimensions must be at least 2; the render
    /// configuration checks this before a camera is built.
    pub fn new(eye: Vec3, image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            eye,
        }
    }

    /// The eye point every ray starts from.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Map pixel column `i` and scan index `j` to normalized device coordinates.
    ///
    /// `j = 0` is the bottom of the image plane (`v = -1`).
    pub fn ndc(&self, i: u32, j: u32) -> (f32, f32) {
        let u = -1.0 + 2.0 * i as f32 / (self.image_width - 1) as f32;
        let v = -1.0 + 2.0 * j as f32 / (self.image_height - 1) as f32;
        (u, v)
    }

    /// Scan index for an output row; row 0 is the top of the image.
    #[inline]
    pub fn scan_index(&self, row: u32) -> u32 {
        self.image_height - 1 - row
    }

    /// Generate the ray through the image-plane point `(u, v, 0)`.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::towards(self.eye, Vec3::new(u, v, 0.0))
    }
}
