//! Sheen Core - scene description for the Sheen renderer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`
//! - **Scene types**: `Scene`, `PointLight`
//! - **Scene generation**: `Scene::stacked` builds the default vertical stack
//!
//! # Example
//!
//! ```
//! use sheen_core::{Scene, DEFAULT_SPHERE_COUNT};
//!
//! let scene = Scene::stacked(DEFAULT_SPHERE_COUNT).unwrap();
//! assert_eq!(scene.len(), 10);
//! ```

pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use scene::{PointLight, Scene, SceneError, SceneResult, DEFAULT_SPHERE_COUNT};
pub use sphere::Sphere;
