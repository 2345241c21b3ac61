//! Tuning parameters for locomotion and the weapon rig.
//!
//! Defaults carry the shipped tuning. Every field has a serde default, so a
//! host config document may override any subset:
//!
//! ```json
//! { "weapon": { "fire_rate": 0.12, "recoil_rotation_amount": 3.0 } }
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::{LayerMask, Pose};

/// Locomotion tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walk speed (m/s).
    pub move_speed: f32,
    /// Sprint speed (m/s).
    pub sprint_speed: f32,
    /// Gravity acceleration (m/s², negative = down).
    pub gravity: f32,
    /// Look sensitivity (degrees per look-delta unit per second).
    pub mouse_sensitivity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sprint_speed: 10.0,
            gravity: -9.81,
            mouse_sensitivity: 2.0,
        }
    }
}

/// One base pose the rig blends toward, stored with Euler degrees so config
/// documents stay hand-editable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PosePreset {
    /// Local position relative to the camera (meters, -z is forward).
    pub position: Vec3,
    /// Local rotation (Euler degrees, XYZ order).
    pub rotation_euler_deg: Vec3,
}

impl PosePreset {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation_euler_deg.x.to_radians(),
            self.rotation_euler_deg.y.to_radians(),
            self.rotation_euler_deg.z.to_radians(),
        )
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation())
    }
}

impl Default for PosePreset {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_euler_deg: Vec3::ZERO,
        }
    }
}

/// The three base poses, one per carry mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PosePresets {
    pub hip: PosePreset,
    pub aim: PosePreset,
    pub sprint: PosePreset,
}

impl Default for PosePresets {
    fn default() -> Self {
        Self {
            hip: PosePreset {
                position: Vec3::new(0.25, -0.22, -0.45),
                rotation_euler_deg: Vec3::ZERO,
            },
            aim: PosePreset {
                position: Vec3::new(0.0, -0.15, -0.3),
                rotation_euler_deg: Vec3::ZERO,
            },
            sprint: PosePreset {
                position: Vec3::new(0.28, -0.3, -0.5),
                rotation_euler_deg: Vec3::new(-25.0, 35.0, 0.0),
            },
        }
    }
}

/// Weapon rig tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Easing rate of the rendered pose toward the composed target.
    pub aim_lerp_speed: f32,

    // --- Sway ---
    /// Look-delta to sway-angle scale (degrees per delta unit).
    pub sway_amount: f32,
    /// Sway rotation smoothing rate.
    pub sway_smooth: f32,
    /// Per-axis sway rotation clamp (degrees).
    pub max_sway_angle: f32,
    /// Look-delta to positional-sway scale; also the per-axis clamp.
    pub positional_sway_amount: f32,
    /// Positional sway smoothing rate.
    pub positional_sway_smooth: f32,

    // --- Bobbing ---
    /// Bob phase advance rate while moving; also the decay rate at rest.
    pub bob_frequency: f32,
    /// Bob vertical amplitude (meters).
    pub bob_amplitude: f32,

    // --- Recoil ---
    /// Backward positional kick per shot (meters, toward the camera).
    pub recoil_kickback: f32,
    /// Positional recoil decay rate.
    pub recoil_recovery_speed: f32,
    /// Rotational recoil kick magnitude (degrees).
    pub recoil_rotation_amount: f32,
    /// Rotational recoil decay rate.
    pub recoil_rotation_recovery_speed: f32,

    // --- Shooting ---
    /// Projectile speed handed to the spawner (m/s).
    pub shoot_force: f32,
    /// Raycast range; a miss degrades to the ray's terminal point.
    pub shoot_range: f32,
    /// Minimum seconds between shots.
    pub fire_rate: f32,
    /// Scene-query interaction mask.
    pub shootable_layers: LayerMask,

    // --- Crosshair ---
    /// Bounce offset applied to the crosshair on each shot (UI units).
    pub crosshair_bounce_amount: f32,
    /// Crosshair bounce decay rate.
    pub crosshair_bounce_speed: f32,

    // --- Sprinting ---
    /// Sprint oscillation amplitude (meters).
    pub sprint_oscillation_amplitude: f32,
    /// Sprint oscillation phase advance rate.
    pub sprint_oscillation_frequency: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            aim_lerp_speed: 10.0,
            sway_amount: 2.0,
            sway_smooth: 6.0,
            max_sway_angle: 5.0,
            positional_sway_amount: 0.02,
            positional_sway_smooth: 8.0,
            bob_frequency: 6.0,
            bob_amplitude: 0.01,
            recoil_kickback: 0.1,
            recoil_recovery_speed: 10.0,
            recoil_rotation_amount: 2.0,
            recoil_rotation_recovery_speed: 8.0,
            shoot_force: 30.0,
            shoot_range: 100.0,
            fire_rate: 0.2,
            shootable_layers: LayerMask::ALL,
            crosshair_bounce_amount: 20.0,
            crosshair_bounce_speed: 8.0,
            sprint_oscillation_amplitude: 0.01,
            sprint_oscillation_frequency: 8.0,
        }
    }
}

/// Combined per-character configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub locomotion: LocomotionConfig,
    pub weapon: WeaponConfig,
    pub poses: PosePresets,
}

impl CharacterConfig {
    /// Parse a (possibly partial) JSON config document; absent fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
