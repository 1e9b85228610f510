//! Ray/object intersection.

use sheen_core::{Scene, Sphere};
use sheen_math::{Interval, Ray};

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object with a parameter strictly inside `ray_t`.
    ///
    /// Returns the hit distance, or `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32>;
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        // Simplified quadratic, valid because the ray direction is unit length.
        let oc = ray.origin() - self.center();
        let b = ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius() * self.radius();

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        // Near root only: spheres are solid and always seen from outside.
        let t = -b - discriminant.sqrt();
        ray_t.surrounds(t).then_some(t)
    }
}

/// Distance to the near intersection in front of the ray origin, if any.
///
/// A root at exactly `t == 0` counts as a miss, so rays leaving a surface
/// never hit the surface they start on.
#[inline]
pub fn intersect_sphere(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    sphere.hit(ray, Interval::POSITIVE)
}

/// The nearest intersection found in a scene.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Position of the sphere in scan order
    pub index: usize,
    pub sphere: &'a Sphere,
}

/// Find the nearest hit by scanning every sphere in order.
///
/// The accepted interval shrinks to `(0, closest_so_far)`, so a later sphere
/// at exactly the same distance does not replace an earlier one.
pub fn closest_hit<'a>(scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>> {
    let mut closest = None;
    let mut ray_t = Interval::POSITIVE;

    for (index, sphere) in scene.iter().enumerate() {
        if let Some(t) = sphere.hit(ray, ray_t) {
            ray_t = ray_t.with_max(t);
            closest = Some(Hit { t, index, sphere });
        }
    }

    closest
}
