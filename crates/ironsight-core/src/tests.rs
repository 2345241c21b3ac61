#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2, Vec3};

    use crate::config::{CharacterConfig, WeaponConfig};
    use crate::enums::WeaponMode;
    use crate::events::{CrosshairState, FireRequest, FxEvent};
    use crate::input::InputSample;
    use crate::state::SimSnapshot;
    use crate::types::{
        smooth_f32, smooth_vec3, smoothing_factor, CameraFrame, LayerMask, Pose, SimTime,
    };

    // ---- Smoothing math ----

    #[test]
    fn test_smoothing_factor_bounds() {
        assert_eq!(smoothing_factor(10.0, 0.0), 0.0);
        for &dt in &[0.001, 0.016, 0.1, 1.0, 10.0] {
            let t = smoothing_factor(6.0, dt);
            assert!(t > 0.0 && t < 1.0, "factor out of (0,1) for dt={dt}");
        }
        // Negative dt is treated as zero, not extrapolated.
        assert_eq!(smoothing_factor(6.0, -0.5), 0.0);
    }

    #[test]
    fn test_smoothing_is_tick_rate_independent() {
        // Two ticks of dt must land where one tick of 2*dt lands.
        let mut split = 1.0_f32;
        split = smooth_f32(split, 0.0, 4.0, 0.05);
        split = smooth_f32(split, 0.0, 4.0, 0.05);
        let whole = smooth_f32(1.0, 0.0, 4.0, 0.1);
        assert!((split - whole).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_vec3_converges_monotonically() {
        let target = Vec3::new(1.0, -2.0, 3.0);
        let mut current = Vec3::ZERO;
        let mut prev_dist = current.distance(target);
        for _ in 0..200 {
            current = smooth_vec3(current, target, 8.0, 0.016);
            let dist = current.distance(target);
            assert!(dist <= prev_dist, "distance to target increased");
            prev_dist = dist;
        }
        assert!(prev_dist < 1e-3);
    }

    // ---- Pose ----

    #[test]
    fn test_pose_ease_toward_reaches_target() {
        let target = Pose::new(
            Vec3::new(0.25, -0.22, -0.45),
            Quat::from_rotation_y(0.5_f32.to_radians()),
        );
        let mut pose = Pose::default();
        for _ in 0..600 {
            pose = pose.ease_toward(&target, 10.0, 0.016);
        }
        assert!(pose.position.distance(target.position) < 1e-4);
        assert!(pose.rotation.angle_between(target.rotation) < 1e-4);
    }

    // ---- Input ----

    #[test]
    fn test_input_sample_clamps_move_axis() {
        let sample = InputSample {
            move_axis: Vec2::new(5.0, -3.0),
            look_delta: Vec2::new(100.0, -100.0),
            ..Default::default()
        };
        let clamped = sample.clamped();
        assert_eq!(clamped.move_axis, Vec2::new(1.0, -1.0));
        // Look delta is unbounded by contract; sway/pitch clamp downstream.
        assert_eq!(clamped.look_delta, sample.look_delta);
    }

    // ---- Mode selection ----

    #[test]
    fn test_weapon_mode_priority() {
        assert_eq!(WeaponMode::select(false, false), WeaponMode::Hip);
        assert_eq!(WeaponMode::select(false, true), WeaponMode::Aim);
        assert_eq!(WeaponMode::select(true, false), WeaponMode::Sprint);
        // Sprint wins over aim.
        assert_eq!(WeaponMode::select(true, true), WeaponMode::Sprint);
    }

    #[test]
    fn test_sprint_disallows_firing() {
        assert!(WeaponMode::Hip.allows_firing());
        assert!(WeaponMode::Aim.allows_firing());
        assert!(!WeaponMode::Sprint.allows_firing());
    }

    // ---- Layer mask ----

    #[test]
    fn test_layer_mask_intersection() {
        let walls = LayerMask(0b0001);
        let targets = LayerMask(0b0010);
        let both = LayerMask(0b0011);
        assert!(both.contains(walls));
        assert!(both.contains(targets));
        assert!(!walls.contains(targets));
        assert!(LayerMask::ALL.contains(walls));
        assert!(!LayerMask::NONE.contains(both));
    }

    // ---- Config ----

    #[test]
    fn test_weapon_config_defaults() {
        let cfg = WeaponConfig::default();
        assert_eq!(cfg.fire_rate, 0.2);
        assert_eq!(cfg.shoot_range, 100.0);
        assert_eq!(cfg.max_sway_angle, 5.0);
        // The positional sway clamp constant equals the target amplitude.
        assert_eq!(cfg.positional_sway_amount, 0.02);
    }

    #[test]
    fn test_character_config_partial_json_override() {
        let cfg = CharacterConfig::from_json(
            r#"{ "weapon": { "fire_rate": 0.1 }, "locomotion": { "move_speed": 7.5 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.weapon.fire_rate, 0.1);
        assert_eq!(cfg.locomotion.move_speed, 7.5);
        // Untouched fields keep their defaults.
        assert_eq!(cfg.weapon.shoot_force, 30.0);
        assert_eq!(cfg.locomotion.sprint_speed, 10.0);
    }

    #[test]
    fn test_character_config_rejects_malformed_json() {
        assert!(CharacterConfig::from_json("{ not json").is_err());
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_weapon_mode_serde() {
        let variants = vec![WeaponMode::Hip, WeaponMode::Aim, WeaponMode::Sprint];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_fx_event_serde_tagged() {
        let event = FxEvent::GunshotAudio { shooter: 7 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"GunshotAudio""#));
        let back: FxEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_fire_request_serde() {
        let req = FireRequest {
            spawn_position: Vec3::new(0.0, 1.6, 0.0),
            spawn_direction: Vec3::NEG_Z,
            speed: 30.0,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: FireRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut snap = SimSnapshot::default();
        snap.time = SimTime {
            tick: 42,
            elapsed_secs: 0.7,
        };
        snap.fx_events.push(FxEvent::MuzzleFlash { shooter: 1 });
        let json = serde_json::to_string(&snap).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.tick, 42);
        assert_eq!(back.fx_events, snap.fx_events);
    }

    // ---- Camera frame ----

    #[test]
    fn test_camera_point_along() {
        let cam = CameraFrame {
            position: Vec3::new(0.0, 1.6, 0.0),
            forward: Vec3::NEG_Z,
        };
        assert_eq!(cam.point_along(100.0), Vec3::new(0.0, 1.6, -100.0));
    }

    #[test]
    fn test_crosshair_state_default_hidden() {
        let state = CrosshairState::default();
        assert!(!state.enabled);
        assert_eq!(state.bounce_offset, 0.0);
    }
}
