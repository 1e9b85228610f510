//! Scene types for Sheen.
//!
//! A scene is an ordered list of spheres built once before rendering and only
//! borrowed immutably afterwards.

use sheen_math::{Color, Vec3};
use thiserror::Error;

use crate::sphere::Sphere;

/// Number of spheres in the default stacked scene.
pub const DEFAULT_SPHERE_COUNT: usize = 10;

/// Radius shared by every sphere in the stacked scene.
const STACK_RADIUS: f32 = 0.75;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("Sphere reflectivity must be in [0, 1], got {0}")]
    InvalidReflectivity(f32),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A point light. The shading model treats it as visible from every point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
}

impl PointLight {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(-5.0, -5.0, 10.0))
    }
}

/// An ordered collection of spheres.
///
/// Order only matters for tie-breaking: when two spheres are hit at exactly
/// the same distance the earlier one wins.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vertical stack of `count` spheres.
    ///
    /// Sphere `i` sits at `y = -1 + i * 2 / (count - 1)`, recedes by 0.5 per
    /// step starting at `z = -2`, and fades from red-ish to blue-ish. With a
    /// single sphere the step is zero and it sits at `y = -1`.
    pub fn stacked(count: usize) -> SceneResult<Self> {
        let mut scene = Self {
            spheres: Vec::with_capacity(count),
        };

        let n = count as f32;
        let step = if count > 1 { 2.0 / (n - 1.0) } else { 0.0 };

        for i in 0..count {
            let fi = i as f32;
            let y = -1.0 + fi * step;
            let z = -2.0 - fi * 0.5;
            let t = (n - fi) / n;
            let color = Color::new(t, 0.5, 1.0 - t);

            scene.add(Sphere::new(Vec3::new(0.0, y, z), STACK_RADIUS, color, 0.0)?);
        }

        log::debug!("Built stacked scene with {} spheres", scene.len());
        Ok(scene)
    }

    /// Add a sphere to the end of the scan order.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// All spheres in scan order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.spheres.iter()
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Sphere;
    type IntoIter = std::slice::Iter<'a, Sphere>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
