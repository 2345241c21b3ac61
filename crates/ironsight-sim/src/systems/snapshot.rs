//! Snapshot building — collects the world into a serializable SimSnapshot.
//!
//! Views are sorted by entity id so two runs with the same seed produce
//! byte-identical JSON.

use hecs::World;

use ironsight_core::components::{Character, Projectile};
use ironsight_core::events::FxEvent;
use ironsight_core::state::{CharacterView, ProjectileView, SimSnapshot};
use ironsight_core::types::{Position, SimTime, Velocity};

use crate::locomotion::LocomotionController;
use crate::weapon_rig::WeaponRig;

/// Build the snapshot for the tick that just ran.
pub fn build(world: &World, time: SimTime, fx_events: Vec<FxEvent>) -> SimSnapshot {
    let mut characters: Vec<CharacterView> = Vec::new();
    {
        let mut query = world.query::<(
            &Character,
            &Position,
            &Velocity,
            &LocomotionController,
            &WeaponRig,
        )>();
        for (entity, (_character, pos, vel, locomotion, rig)) in query.iter() {
            characters.push(CharacterView {
                id: entity.to_bits().get(),
                position: pos.0,
                velocity: vel.0,
                yaw: locomotion.state().yaw,
                pitch: locomotion.state().pitch,
                weapon_mode: rig.state().mode,
                weapon_pose: rig.state().pose,
                crosshair: rig.crosshair(),
            });
        }
    }
    characters.sort_by_key(|view| view.id);

    let mut projectiles: Vec<ProjectileView> = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position, &Velocity)>();
        for (entity, (projectile, pos, vel)) in query.iter() {
            projectiles.push(ProjectileView {
                id: entity.to_bits().get(),
                position: pos.0,
                velocity: vel.0,
                ttl_secs: projectile.ttl_secs,
            });
        }
    }
    projectiles.sort_by_key(|view| view.id);

    SimSnapshot {
        time,
        characters,
        projectiles,
        fx_events,
    }
}
