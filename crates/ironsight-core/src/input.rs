//! Per-tick input samples supplied by the host.
//!
//! The host owns input-device binding; the simulation only sees normalized
//! samples. A sample is consumed by the tick it is queued for; if the host
//! provides none for a character, the neutral default applies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One tick's worth of input for one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Normalized planar move axis (x = right, y = forward), each in [-1, 1].
    pub move_axis: Vec2,
    /// Mouse/stick look delta for this tick (unbounded).
    pub look_delta: Vec2,
    /// Aim-down-sights button held.
    pub aim_held: bool,
    /// Sprint button held.
    pub sprint_held: bool,
    /// Fire button held.
    pub fire_held: bool,
}

impl InputSample {
    /// Copy with the move axis clamped into [-1, 1]^2. Malformed input is
    /// clamped, never rejected.
    pub fn clamped(&self) -> Self {
        Self {
            move_axis: self.move_axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)),
            ..*self
        }
    }
}
