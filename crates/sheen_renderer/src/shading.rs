//! Phong local illumination.
//!
//! The light is assumed visible from every surface point: no shadow rays are
//! cast, so nothing occludes anything.

use sheen_math::{Color, Vec3};

/// Fraction of the diffuse color that is always present.
pub const AMBIENT_STRENGTH: f32 = 0.1;

/// Specular parameters shared by every surface in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    /// Color of the highlight
    pub specular_color: Color,
    /// Phong exponent; larger values give tighter highlights
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            specular_color: Color::ONE,
            shininess: 32.0,
        }
    }
}

/// The three Phong contributions, kept apart so callers can inspect them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl PhongTerms {
    /// Evaluate ambient, diffuse and specular terms at a surface point.
    ///
    /// `normal` and `view_dir` must be unit length. Nothing is clamped.
    pub fn evaluate(
        hit_point: Vec3,
        normal: Vec3,
        view_dir: Vec3,
        light_pos: Vec3,
        diffuse_color: Color,
        specular_color: Color,
        shininess: f32,
    ) -> Self {
        let ambient = AMBIENT_STRENGTH * diffuse_color;

        let to_light = (light_pos - hit_point).normalize();
        let n_dot_l = normal.dot(to_light);
        let diffuse = n_dot_l.max(0.0) * diffuse_color;

        let reflected = (2.0 * n_dot_l * normal - to_light).normalize();
        let highlight = reflected.dot(view_dir).max(0.0).powf(shininess);
        let specular = highlight * specular_color;

        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Sum of all three terms.
    #[inline]
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// Phong color at a surface point. May exceed 1.0 per channel.
#[inline]
pub fn phong_shade(
    hit_point: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    light_pos: Vec3,
    diffuse_color: Color,
    specular_color: Color,
    shininess: f32,
) -> Color {
    PhongTerms::evaluate(
        hit_point,
        normal,
        view_dir,
        light_pos,
        diffuse_color,
        specular_color,
        shininess,
    )
    .total()
}
