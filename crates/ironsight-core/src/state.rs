//! Simulation snapshot — the complete visible state handed to the host
//! after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::WeaponMode;
use crate::events::{CrosshairState, FxEvent};
use crate::types::{Pose, SimTime};

/// Everything the host needs to render one tick: transforms to apply and
/// side-effect triggers to execute. Serializable so two runs can be
/// compared byte-for-byte.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub characters: Vec<CharacterView>,
    pub projectiles: Vec<ProjectileView>,
    /// Audio/VFX triggers raised this tick (fire-and-forget).
    pub fx_events: Vec<FxEvent>,
}

/// One character's renderable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    pub id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Body yaw (radians).
    pub yaw: f32,
    /// Camera pitch (radians, positive up).
    pub pitch: f32,
    pub weapon_mode: WeaponMode,
    /// Local pose to apply to the weapon model.
    pub weapon_pose: Pose,
    pub crosshair: CrosshairState,
}

/// One projectile's renderable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining lifetime (seconds).
    pub ttl_secs: f32,
}
