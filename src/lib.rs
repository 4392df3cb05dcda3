//! Dice - toss physics dice onto a table and read which faces land up.
//!
//! Rendering comes from Bevy and rigid-body simulation from Rapier; this crate
//! supplies the game around them.

pub mod dice3d;
