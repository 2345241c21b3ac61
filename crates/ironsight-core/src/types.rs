//! Fundamental geometric and simulation types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Frame-rate-independent interpolation factor for exponential smoothing.
///
/// Every smoothed or decaying quantity in the simulation moves toward its
/// target by `current.lerp(target, smoothing_factor(rate, dt))`. Two ticks
/// of `dt` advance the same amount as one tick of `2 * dt`, so behavior is
/// consistent across variable tick rates.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Exponentially smooth a scalar toward a target.
pub fn smooth_f32(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * smoothing_factor(rate, dt)
}

/// Exponentially smooth a vector toward a target.
pub fn smooth_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, smoothing_factor(rate, dt))
}

/// A local position + rotation pair for the weapon model relative to its
/// parent (the camera). Produced fresh each tick by pose composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Ease this pose toward a target: position lerp, rotation slerp, both
    /// with the same dt-scaled factor. The rig always eases toward the
    /// freshly composed target rather than snapping, so motion stays
    /// continuous across mode or input discontinuities.
    pub fn ease_toward(&self, target: &Pose, rate: f32, dt: f32) -> Pose {
        let t = smoothing_factor(rate, dt);
        Pose {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.slerp(target.rotation, t),
        }
    }
}

/// 3D position in world space (meters). x = East, y = Up, z = South
/// (right-handed, yaw 0 faces -Z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// 3D velocity in world space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// The camera sample the weapon rig reads each tick: eye position and the
/// unit forward direction derived from yaw/pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    pub position: Vec3,
    pub forward: Vec3,
}

impl CameraFrame {
    /// Point at `distance` along the view ray.
    pub fn point_along(&self, distance: f32) -> Vec3 {
        self.position + self.forward * distance
    }
}

/// Interaction mask for scene queries. A query hits a collider when the
/// masks share at least one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub fn contains(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Simulation time tracking. `dt` is supplied by the host each tick; the
/// engine never assumes a fixed tick frequency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
