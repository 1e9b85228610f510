//! Procedural checkerboard for rays that miss every object.

use sheen_math::Color;

/// Screen-space checkerboard.
///
/// Cells are laid out over normalized device coordinates, so the pattern does
/// not depend on the scene or the ray direction, only on `(u, v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    /// Cells per unit of NDC; 5.0 gives 10 cells across the [-1, 1] range
    pub scale: f32,
    pub light: Color,
    pub dark: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            scale: 5.0,
            light: Color::splat(0.9),
            dark: Color::splat(0.1),
        }
    }
}

impl Checkerboard {
    /// Integer cell coordinates containing `(u, v)`.
    pub fn cell(&self, u: f32, v: f32) -> (i64, i64) {
        let ix = ((u + 1.0) * self.scale).floor() as i64;
        let iy = ((v + 1.0) * self.scale).floor() as i64;
        (ix, iy)
    }

    /// True for cells whose index sum is even.
    pub fn is_light(&self, u: f32, v: f32) -> bool {
        let (ix, iy) = self.cell(u, v);
        (ix + iy).rem_euclid(2) == 0
    }

    /// Background color at `(u, v)`.
    pub fn color_at(&self, u: f32, v: f32) -> Color {
        if self.is_light(u, v) {
            self.light
        } else {
            self.dark
        }
    }
}
