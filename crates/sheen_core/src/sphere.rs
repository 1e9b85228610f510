//! Sphere primitive.
//!
//! Spheres are plain data: ray intersection lives in the renderer so that
//! geometry stays decoupled from the algorithms that consume it.

use sheen_math::{Color, Vec3};

use crate::scene::{SceneError, SceneResult};

/// A solid, opaque sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
    /// Reserved for mirror reflection. Validated, never read by shading.
    reflectivity: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be finite and strictly positive and the reflectivity
    /// must lie in [0, 1]. The color is stored as given.
    pub fn new(center: Vec3, radius: f32, color: Color, reflectivity: f32) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }

        Ok(Self {
            center,
            radius,
            color,
            reflectivity,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Base (diffuse) color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn reflectivity(&self) -> f32 {
        self.reflectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_accessors() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 1.0, -2.0),
            0.75,
            Color::new(0.2, 0.5, 0.8),
            0.25,
        )
        .unwrap();

        assert_eq!(sphere.center(), Vec3::new(0.0, 1.0, -2.0));
        assert_eq!(sphere.radius(), 0.75);
        assert_eq!(sphere.color(), Color::new(0.2, 0.5, 0.8));
        assert_eq!(sphere.reflectivity(), 0.25);
    }

    #[test]
    fn test_sphere_color_is_not_clamped() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Color::new(2.0, -1.0, 0.5), 0.0).unwrap();
        assert_eq!(sphere.color(), Color::new(2.0, -1.0, 0.5));
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Sphere::new(Vec3::ZERO, radius, Color::ONE, 0.0);
            assert!(
                matches!(result, Err(SceneError::InvalidRadius(_))),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_sphere_rejects_bad_reflectivity() {
        for reflectivity in [-0.1, 1.5, f32::NAN] {
            let result = Sphere::new(Vec3::ZERO, 1.0, Color::ONE, reflectivity);
            assert!(matches!(result, Err(SceneError::InvalidReflectivity(_))));
        }

        // Both ends of the range are fine
        assert!(Sphere::new(Vec3::ZERO, 1.0, Color::ONE, 0.0).is_ok());
        assert!(Sphere::new(Vec3::ZERO, 1.0, Color::ONE, 1.0).is_ok());
    }
}
