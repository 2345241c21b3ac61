//! Weapon rig: per-tick pose composition and the firing state machine.
//!
//! The rig blends the hip/aim/sprint base poses with sway, bobbing, and
//! recoil, eases the rendered pose toward the composed target, and gates
//! shots behind the fire cooldown. Mode is re-selected from intent flags
//! every tick with priority Sprint > Aim > Hip; sprinting suppresses
//! aiming and firing entirely while the cooldown keeps ticking down.

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use ironsight_core::components::WeaponRigState;
use ironsight_core::config::{PosePresets, WeaponConfig};
use ironsight_core::constants::{MOVE_DEADZONE, MUZZLE_FORWARD_OFFSET};
use ironsight_core::enums::WeaponMode;
use ironsight_core::events::{CrosshairState, FireRequest};
use ironsight_core::input::InputSample;
use ironsight_core::types::{smooth_f32, smooth_vec3, CameraFrame, Pose};

use crate::scene::SceneQuery;

/// What one weapon tick hands back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponTickOutput {
    /// Local pose to apply to the weapon model this tick.
    pub pose: Pose,
    /// Present iff a shot fired this tick. A disallowed attempt is a
    /// silent no-op, observable only as the absence of a request.
    pub fire: Option<FireRequest>,
    /// Crosshair display hint.
    pub crosshair: CrosshairState,
}

/// One character's weapon rig. Owns all sway/bob/recoil/cooldown state,
/// mutated only inside its tick.
#[derive(Debug, Clone, Copy)]
pub struct WeaponRig {
    config: WeaponConfig,
    presets: PosePresets,
    state: WeaponRigState,
}

impl WeaponRig {
    pub fn new(config: WeaponConfig, presets: PosePresets) -> Self {
        let state = WeaponRigState {
            pose: presets.hip.pose(),
            ..Default::default()
        };
        Self {
            config,
            presets,
            state,
        }
    }

    pub fn state(&self) -> &WeaponRigState {
        &self.state
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    pub fn crosshair(&self) -> CrosshairState {
        CrosshairState {
            enabled: self.state.mode == WeaponMode::Hip,
            bounce_offset: self.state.crosshair_bounce,
        }
    }

    /// Advance one tick: select mode, compose the pose, then run the fire
    /// decision. The camera frame is read from the locomotion controller's
    /// output by the host; the scene query is issued, not performed here.
    pub fn tick(
        &mut self,
        input: &InputSample,
        camera: &CameraFrame,
        scene: &dyn SceneQuery,
        rng: &mut ChaCha8Rng,
        dt: f32,
    ) -> WeaponTickOutput {
        let dt = dt.max(0.0);
        let input = input.clamped();

        self.state.mode = WeaponMode::select(input.sprint_held, input.aim_held);
        let base = self.base_pose(dt);
        self.update_sway(input.look_delta, dt);
        self.update_bob(input.move_axis.length(), dt);
        self.relax_recoil(dt);
        self.state.crosshair_bounce =
            smooth_f32(self.state.crosshair_bounce, 0.0, self.config.crosshair_bounce_speed, dt);

        let target = Pose::new(
            base.position
                + self.state.bob_offset
                + self.state.recoil_offset
                + self.state.sway_positional_offset,
            base.rotation
                * euler_deg(self.state.sway_rotation)
                * euler_deg(self.state.recoil_rotation_offset),
        );
        self.state.pose = self
            .state
            .pose
            .ease_toward(&target, self.config.aim_lerp_speed, dt);

        // Cooldown ticks down in every mode; only a shot may raise it.
        self.state.fire_cooldown -= dt;
        let fire = if self.state.mode.allows_firing()
            && input.fire_held
            && self.state.fire_cooldown <= 0.0
        {
            Some(self.shoot(camera, scene, rng))
        } else {
            None
        };

        WeaponTickOutput {
            pose: self.state.pose,
            fire,
            crosshair: self.crosshair(),
        }
    }

    /// Base target pose for the current mode. Sprinting also advances the
    /// oscillation phase and folds the two-frequency wobble into the
    /// positional sway offset, where the sway smoothing then pulls on it.
    fn base_pose(&mut self, dt: f32) -> Pose {
        match self.state.mode {
            WeaponMode::Hip => self.presets.hip.pose(),
            WeaponMode::Aim => self.presets.aim.pose(),
            WeaponMode::Sprint => {
                let cfg = &self.config;
                self.state.sprint_timer += dt * cfg.sprint_oscillation_frequency;
                let t = self.state.sprint_timer;
                self.state.sway_positional_offset += Vec3::new(
                    t.sin() * cfg.sprint_oscillation_amplitude,
                    (t * 2.0).cos() * cfg.sprint_oscillation_amplitude * 0.5,
                    0.0,
                );
                self.presets.sprint.pose()
            }
        }
    }

    /// Rotational and positional sway from the look delta. Vertical look is
    /// inverted into sway pitch; each axis is clamped before smoothing, so
    /// no input magnitude can push the smoothed value past the clamp.
    fn update_sway(&mut self, look: glam::Vec2, dt: f32) {
        let cfg = &self.config;

        let sway_target = Vec3::new(
            (-look.y * cfg.sway_amount).clamp(-cfg.max_sway_angle, cfg.max_sway_angle),
            (look.x * cfg.sway_amount).clamp(-cfg.max_sway_angle, cfg.max_sway_angle),
            0.0,
        );
        self.state.sway_rotation =
            smooth_vec3(self.state.sway_rotation, sway_target, cfg.sway_smooth, dt);

        // The clamp constant equals the target amplitude here, as shipped.
        let amount = cfg.positional_sway_amount;
        let positional_target = Vec3::new(
            (-look.x * amount).clamp(-amount, amount),
            (-look.y * amount).clamp(-amount, amount),
            0.0,
        );
        self.state.sway_positional_offset = smooth_vec3(
            self.state.sway_positional_offset,
            positional_target,
            cfg.positional_sway_smooth,
            dt,
        );
    }

    /// Footstep bob: vertical sine while the planar input exceeds the
    /// deadzone, relaxation toward zero otherwise.
    fn update_bob(&mut self, move_magnitude: f32, dt: f32) {
        let cfg = &self.config;
        if move_magnitude > MOVE_DEADZONE {
            self.state.bob_timer += dt * cfg.bob_frequency;
            self.state.bob_offset =
                Vec3::new(0.0, self.state.bob_timer.sin() * cfg.bob_amplitude, 0.0);
        } else {
            self.state.bob_offset =
                smooth_vec3(self.state.bob_offset, Vec3::ZERO, cfg.bob_frequency, dt);
        }
    }

    /// Both recoil offsets relax toward zero every tick, independent of
    /// firing.
    fn relax_recoil(&mut self, dt: f32) {
        let cfg = &self.config;
        self.state.recoil_offset = smooth_vec3(
            self.state.recoil_offset,
            Vec3::ZERO,
            cfg.recoil_recovery_speed,
            dt,
        );
        self.state.recoil_rotation_offset = smooth_vec3(
            self.state.recoil_rotation_offset,
            Vec3::ZERO,
            cfg.recoil_rotation_recovery_speed,
            dt,
        );
    }

    /// Fire one shot: reset the cooldown, resolve the aim point through the
    /// scene query (a miss degrades to the ray's terminal point), kick the
    /// recoil offsets, bounce the crosshair, and emit the spawn request.
    fn shoot(
        &mut self,
        camera: &CameraFrame,
        scene: &dyn SceneQuery,
        rng: &mut ChaCha8Rng,
    ) -> FireRequest {
        let cfg = &self.config;
        self.state.fire_cooldown = cfg.fire_rate;

        let target_point = scene
            .raycast(
                camera.position,
                camera.forward,
                cfg.shoot_range,
                cfg.shootable_layers,
            )
            .unwrap_or_else(|| camera.point_along(cfg.shoot_range));

        let muzzle = camera.point_along(MUZZLE_FORWARD_OFFSET);
        let direction = (target_point - muzzle)
            .try_normalize()
            .unwrap_or(camera.forward);

        // Kick straight back toward the camera (+z in weapon-local space),
        // pitch biased upward, yaw symmetric.
        let amount = cfg.recoil_rotation_amount;
        let kick_pitch = rng.gen_range(amount * 0.5..=amount);
        let kick_yaw = rng.gen_range(-amount..=amount);
        self.state.recoil_offset.z += cfg.recoil_kickback;
        self.state.recoil_rotation_offset += Vec3::new(-kick_pitch, kick_yaw, 0.0);
        self.state.crosshair_bounce = cfg.crosshair_bounce_amount;

        FireRequest {
            spawn_position: muzzle,
            spawn_direction: direction,
            speed: cfg.shoot_force,
        }
    }
}

/// Euler degrees (XYZ order) to a quaternion.
fn euler_deg(v: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        v.x.to_radians(),
        v.y.to_radians(),
        v.z.to_radians(),
    )
}
