//! Fixed simulation limits and structural constants.
//!
//! Per-character tuning lives in `config`; these are the values that are
//! not meant to vary between characters or weapons.

// --- Look ---

/// Camera pitch clamp in degrees. Hard invariant: no input magnitude may
/// push the pitch outside [-80, 80].
pub const PITCH_LIMIT_DEG: f32 = 80.0;

// --- Locomotion ---

/// Vertical velocity applied while grounded instead of letting gravity
/// accumulate. Keeps the character pressed onto the ground surface so the
/// grounded check does not flicker from floating-point drift.
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Planar move input magnitude below which the character counts as standing
/// still (no bob advance).
pub const MOVE_DEADZONE: f32 = 0.1;

/// Height of the camera eye point above the character's ground position.
pub const EYE_HEIGHT: f32 = 1.6;

/// Distance below which a character counts as grounded on the y = 0 plane.
pub const GROUND_EPSILON: f32 = 1e-3;

// --- Shooting ---

/// Muzzle distance in front of the camera; projectiles spawn here.
pub const MUZZLE_FORWARD_OFFSET: f32 = 0.4;

/// Seconds a spawned projectile lives before the cleanup system despawns it.
pub const PROJECTILE_LIFETIME_SECS: f32 = 5.0;

/// Gravity applied to projectiles in flight (m/s²). Characters use the
/// per-character `LocomotionConfig::gravity` instead.
pub const PROJECTILE_GRAVITY: f32 = -9.81;
