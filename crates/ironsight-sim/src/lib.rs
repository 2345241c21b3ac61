//! Simulation engine for the ironsight first-person character core.
//!
//! Owns the hecs ECS world, drives the locomotion and weapon-rig
//! controllers once per tick, and produces SimSnapshots for the host.

pub mod engine;
pub mod locomotion;
pub mod scene;
pub mod systems;
pub mod weapon_rig;

pub use engine::SimulationEngine;
pub use ironsight_core as core;
