//! Core types and definitions for the ironsight character simulation.
//!
//! This crate defines the vocabulary shared across the repo: state
//! components, configuration, input samples, events, snapshot views, and
//! the smoothing math every decaying quantity goes through. It has no
//! dependency on the simulation runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
