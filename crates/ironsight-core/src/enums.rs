//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon carry mode. Exactly one mode is active per tick, re-selected from
/// the intent flags every tick with no hysteresis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponMode {
    /// Default carry: weapon at the hip preset.
    #[default]
    Hip,
    /// Aiming down sights.
    Aim,
    /// Sprinting: weapon lowered, aiming and firing suppressed.
    Sprint,
}

impl WeaponMode {
    /// Select the mode from intent flags with priority Sprint > Aim > Hip.
    pub fn select(sprint_held: bool, aim_held: bool) -> Self {
        if sprint_held {
            WeaponMode::Sprint
        } else if aim_held {
            WeaponMode::Aim
        } else {
            WeaponMode::Hip
        }
    }

    /// Firing intent is ignored entirely while sprinting.
    pub fn allows_firing(&self) -> bool {
        *self != WeaponMode::Sprint
    }
}
