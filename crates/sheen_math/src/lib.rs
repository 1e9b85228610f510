// Re-export glam for convenience
pub use glam::*;

// Sheen math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color in linear space. Components are nominally in [0, 1] but are
/// never clamped until quantization.
pub type Color = Vec3;
