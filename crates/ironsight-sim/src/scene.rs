//! Scene-query collaborator seam.
//!
//! The weapon rig never performs geometry queries itself; it issues a
//! forward raycast through this trait and consumes the result in the same
//! tick. Hosts with their own physics implement it; `StaticScene` covers
//! tests and hosts without one.

use glam::Vec3;

use ironsight_core::types::LayerMask;

/// Synchronous forward scene query.
pub trait SceneQuery {
    /// Cast a ray and return the nearest impact point within
    /// `max_distance`, or `None` for a miss. Only colliders sharing a mask
    /// bit are considered.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<Vec3>;
}

/// A scene with nothing in it: every ray misses, so fire requests degrade
/// to the ray's terminal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneQuery for EmptyScene {
    fn raycast(&self, _: Vec3, _: Vec3, _: f32, _: LayerMask) -> Option<Vec3> {
        None
    }
}

/// A sphere collider in a static scene.
#[derive(Debug, Clone, Copy)]
pub struct SphereCollider {
    pub center: Vec3,
    pub radius: f32,
    pub layers: LayerMask,
}

/// Fixed set of sphere colliders with analytic ray intersection.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    colliders: Vec<SphereCollider>,
}

impl StaticScene {
    pub fn new(colliders: Vec<SphereCollider>) -> Self {
        Self { colliders }
    }

    pub fn push(&mut self, collider: SphereCollider) {
        self.colliders.push(collider);
    }
}

impl SceneQuery for StaticScene {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<Vec3> {
        let dir = direction.try_normalize()?;

        let mut nearest: Option<f32> = None;
        for collider in &self.colliders {
            if !mask.contains(collider.layers) {
                continue;
            }
            let Some(t) = ray_sphere(origin, dir, collider.center, collider.radius) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            if nearest.is_none_or(|n| t < n) {
                nearest = Some(t);
            }
        }

        nearest.map(|t| origin + dir * t)
    }
}

/// Distance along a unit ray to the first sphere intersection, if any.
fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    // Ray origin inside the sphere: exit point.
    let t = -b + sqrt_disc;
    (t >= 0.0).then_some(t)
}
