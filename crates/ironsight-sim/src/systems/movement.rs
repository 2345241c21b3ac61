//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Projectiles fall ballistically; characters are clamped to the ground
//! plane, which is also what the grounded query reads.

use hecs::World;

use ironsight_core::components::{Character, Projectile};
use ironsight_core::constants::PROJECTILE_GRAVITY;
use ironsight_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (_proj, vel)) in world.query_mut::<(&Projectile, &mut Velocity)>() {
        vel.0.y += PROJECTILE_GRAVITY * dt;
    }

    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }

    for (_entity, (_character, pos)) in world.query_mut::<(&Character, &mut Position)>() {
        if pos.0.y < 0.0 {
            pos.0.y = 0.0;
        }
    }
}
