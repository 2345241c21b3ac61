//! Locomotion: planar movement, gravity, and mouse look for one character.
//!
//! Leaf component — depends on nothing else in the simulation. The host's
//! physics integrator applies the returned velocities; the controller never
//! moves anything itself.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use ironsight_core::components::LocomotionState;
use ironsight_core::config::LocomotionConfig;
use ironsight_core::constants::{EYE_HEIGHT, GROUND_STICK_VELOCITY, PITCH_LIMIT_DEG};
use ironsight_core::input::InputSample;
use ironsight_core::types::CameraFrame;

/// What one locomotion tick hands back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionOutput {
    /// Planar world-space velocity (m/s).
    pub horizontal_velocity: Vec3,
    /// Vertical velocity as a vector (m/s).
    pub vertical_velocity: Vec3,
    /// Yaw applied this tick (radians).
    pub yaw_delta: f32,
    /// Camera pitch after this tick (radians, clamped to ±80°).
    pub pitch: f32,
}

/// Converts normalized input and elapsed time into velocities and look
/// angles. One instance per character, mutated only by that character's
/// own tick call.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            state: LocomotionState::default(),
        }
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Advance one tick. Pure with respect to the declared inputs; no
    /// failure paths — malformed input is clamped, not rejected.
    pub fn tick(&mut self, input: &InputSample, grounded: bool, dt: f32) -> LocomotionOutput {
        let input = input.clamped();
        let dt = dt.max(0.0);

        // Planar movement in world space, using the yaw from before this
        // tick's look update (movement resolves first, as sampled).
        let speed = if input.sprint_held {
            self.config.sprint_speed
        } else {
            self.config.move_speed
        };
        let local = Vec3::new(input.move_axis.x, 0.0, -input.move_axis.y);
        let horizontal = self.body_rotation() * local * speed;
        self.state.horizontal_velocity = horizontal;

        // Gravity. While grounded, a small negative velocity keeps the
        // character pressed onto the surface instead of letting drift
        // accumulate across ticks.
        if grounded && self.state.vertical_velocity < 0.0 {
            self.state.vertical_velocity = GROUND_STICK_VELOCITY;
        }
        self.state.vertical_velocity += self.config.gravity * dt;

        // Mouse look. Sensitivity is in degrees per look-unit per second.
        let yaw_delta = (input.look_delta.x * self.config.mouse_sensitivity * dt).to_radians();
        self.state.yaw += yaw_delta;

        let pitch_limit = PITCH_LIMIT_DEG.to_radians();
        self.state.pitch = (self.state.pitch
            + (input.look_delta.y * self.config.mouse_sensitivity * dt).to_radians())
        .clamp(-pitch_limit, pitch_limit);

        LocomotionOutput {
            horizontal_velocity: horizontal,
            vertical_velocity: Vec3::new(0.0, self.state.vertical_velocity, 0.0),
            yaw_delta,
            pitch: self.state.pitch,
        }
    }

    /// Body orientation: yaw 0 faces -Z, positive yaw turns right.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.state.yaw)
    }

    /// The eye-level camera frame for a character standing at `position`.
    pub fn camera_frame(&self, position: Vec3) -> CameraFrame {
        let rotation = self.body_rotation() * Quat::from_rotation_x(self.state.pitch);
        CameraFrame {
            position: position + Vec3::Y * EYE_HEIGHT,
            forward: rotation * Vec3::NEG_Z,
        }
    }
}
