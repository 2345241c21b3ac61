//! Engine systems, each a function run once per tick in a fixed order.
//!
//! Characters tick their controllers first (in the engine), then these
//! world-level systems integrate movement, expire projectiles, and build
//! the outgoing snapshot.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
