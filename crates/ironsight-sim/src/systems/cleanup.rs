//! Projectile lifetime system.
//!
//! Counts down each projectile's remaining lifetime and despawns it when
//! the time runs out. Spawn-side code sets the initial lifetime; nothing
//! ever extends it.

use hecs::World;

use ironsight_core::components::Projectile;

/// Tick down projectile lifetimes and despawn the expired ones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>, dt: f32) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.ttl_secs -= dt;
        if projectile.ttl_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
