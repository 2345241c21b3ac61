//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the simulation crate's systems, not here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::WeaponMode;
use crate::types::Pose;

/// Locomotion state owned by one character, mutated only inside its tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Planar world-space velocity from the last tick (m/s).
    pub horizontal_velocity: Vec3,
    /// Vertical velocity (m/s, gravity-accumulated).
    pub vertical_velocity: f32,
    /// Body yaw in radians (0 faces -Z, increases turning right).
    pub yaw: f32,
    /// Camera pitch in radians, positive looks up. Clamped to ±80°.
    pub pitch: f32,
}

/// Weapon rig state owned by one character, mutated only inside its tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponRigState {
    /// Active carry mode, re-selected every tick (Sprint > Aim > Hip).
    pub mode: WeaponMode,
    /// Sway rotation offset (Euler degrees), smoothed toward the look-delta
    /// target and clamped per-axis to the configured max angle.
    pub sway_rotation: Vec3,
    /// Positional sway offset (meters). Accumulates the sprint oscillation
    /// while sprinting.
    pub sway_positional_offset: Vec3,
    /// Bob offset (meters); vertical sine while moving, decays at rest.
    pub bob_offset: Vec3,
    /// Bob phase accumulator, advanced only while moving.
    pub bob_timer: f32,
    /// Sprint oscillation phase accumulator, advanced only while sprinting.
    pub sprint_timer: f32,
    /// Recoil positional offset (meters); kicked backward on each shot,
    /// decays exponentially.
    pub recoil_offset: Vec3,
    /// Recoil rotation offset (Euler degrees); randomized kick on each shot,
    /// decays exponentially.
    pub recoil_rotation_offset: Vec3,
    /// Seconds until firing is permitted again. Only a shot may raise it.
    pub fire_cooldown: f32,
    /// Crosshair bounce offset (UI units); display hint only.
    pub crosshair_bounce: f32,
    /// Previous rendered pose — the easing source for the next tick.
    pub pose: Pose,
}

/// Marks an entity as a player character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Character;

/// A fired projectile. The engine despawns it when `ttl_secs` runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Remaining lifetime in seconds.
    pub ttl_secs: f32,
}
