//! Events and side-effect requests emitted by the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Request to instantiate a projectile, emitted by a successful shot.
/// The spawner owns the projectile's lifetime from here on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireRequest {
    /// Muzzle position the projectile spawns at.
    pub spawn_position: Vec3,
    /// Unit direction toward the aim ray's impact point (or its terminal
    /// point when nothing was hit).
    pub spawn_direction: Vec3,
    /// Initial projectile speed (m/s).
    pub speed: f32,
}

/// Crosshair display hint. Not authoritative game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrosshairState {
    /// Shown iff not aiming and not sprinting.
    pub enabled: bool,
    /// Vertical bounce offset; set on each shot, decays toward zero.
    pub bounce_offset: f32,
}

/// Fire-and-forget audio/VFX triggers for the frontend, drained into the
/// snapshot each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FxEvent {
    /// Play the gunshot clip.
    GunshotAudio { shooter: u64 },
    /// Play the muzzle-flash particle burst.
    MuzzleFlash { shooter: u64 },
}
