//! Simulation engine — the headless host loop.
//!
//! `SimulationEngine` owns the hecs ECS world of characters and
//! projectiles, drives each character's locomotion and weapon-rig
//! controllers once per tick, executes their side-effect requests
//! (projectile spawns, audio/VFX triggers), and produces `SimSnapshot`s.
//! Single-threaded and tick-driven: one tick completes fully before the
//! next begins, and `dt` is the sole time source.

use std::collections::HashMap;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ironsight_core::components::{Character, Projectile};
use ironsight_core::config::CharacterConfig;
use ironsight_core::constants::{GROUND_EPSILON, PROJECTILE_LIFETIME_SECS};
use ironsight_core::events::{FireRequest, FxEvent};
use ironsight_core::input::InputSample;
use ironsight_core::state::SimSnapshot;
use ironsight_core::types::{Position, SimTime, Velocity};

use crate::locomotion::LocomotionController;
use crate::scene::SceneQuery;
use crate::systems;
use crate::weapon_rig::WeaponRig;

/// Stable handle for a spawned character.
pub type CharacterId = u64;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    /// Input samples queued for the next tick; consumed by it. Characters
    /// without a sample get the neutral default.
    pending_input: HashMap<CharacterId, InputSample>,
    fx_events: Vec<FxEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            pending_input: HashMap::new(),
            fx_events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Spawn a character at `position` and return its handle. The character
    /// owns exactly one locomotion controller and one weapon rig for its
    /// whole lifetime.
    pub fn spawn_character(&mut self, config: CharacterConfig, position: Vec3) -> CharacterId {
        let entity = self.world.spawn((
            Character,
            Position(position),
            Velocity(Vec3::ZERO),
            LocomotionController::new(config.locomotion),
            WeaponRig::new(config.weapon, config.poses),
        ));
        entity.to_bits().get()
    }

    /// Remove a character and its pending input.
    pub fn despawn_character(&mut self, id: CharacterId) {
        self.pending_input.remove(&id);
        if let Some(entity) = hecs::Entity::from_bits(id) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Queue a character's input sample for the next tick.
    pub fn set_input(&mut self, id: CharacterId, sample: InputSample) {
        self.pending_input.insert(id, sample);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. The scene query collaborator resolves shot raycasts.
    pub fn tick(&mut self, scene: &dyn SceneQuery, dt: f32) -> SimSnapshot {
        let dt = dt.max(0.0);

        self.run_characters(scene, dt);
        systems::movement::run(&mut self.world, dt);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, dt);
        self.time.advance(dt);

        let fx_events = std::mem::take(&mut self.fx_events);
        systems::snapshot::build(&self.world, self.time, fx_events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tick every character's controllers and execute their fire requests.
    fn run_characters(&mut self, scene: &dyn SceneQuery, dt: f32) {
        let inputs = std::mem::take(&mut self.pending_input);
        let mut fired: Vec<(CharacterId, FireRequest)> = Vec::new();

        for (entity, (_character, pos, vel, locomotion, rig)) in self.world.query_mut::<(
            &Character,
            &Position,
            &mut Velocity,
            &mut LocomotionController,
            &mut WeaponRig,
        )>() {
            let id = entity.to_bits().get();
            let input = inputs.get(&id).copied().unwrap_or_default();
            let grounded = pos.0.y <= GROUND_EPSILON;

            let motion = locomotion.tick(&input, grounded, dt);
            vel.0 = motion.horizontal_velocity + motion.vertical_velocity;

            let camera = locomotion.camera_frame(pos.0);
            let weapon = rig.tick(&input, &camera, scene, &mut self.rng, dt);
            if let Some(request) = weapon.fire {
                fired.push((id, request));
            }
        }

        for (shooter, request) in fired {
            self.world.spawn((
                Projectile {
                    ttl_secs: PROJECTILE_LIFETIME_SECS,
                },
                Position(request.spawn_position),
                Velocity(request.spawn_direction * request.speed),
            ));
            self.fx_events.push(FxEvent::GunshotAudio { shooter });
            self.fx_events.push(FxEvent::MuzzleFlash { shooter });
        }
    }
}
