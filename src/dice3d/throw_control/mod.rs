//! Throw Control Module
//!
//! This module decides where each die starts a throw: its spawn point, its
//! initial orientation, and its spin. Randomness comes from a seedable RNG
//! resource so headless runs can be replayed.

mod state;

pub use state::*;
