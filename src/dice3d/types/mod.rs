//! Type definitions for the 3D dice toss
//!
//! This module is organized into submodules:
//! - `dice` - Die component, face table, dice count, roll state, roll messages
//! - `ui` - Theme, palette, and UI marker components
//! - `camera` - Camera marker and projection helpers
//! - `settings` - Application settings and persistence

pub mod camera;
pub mod dice;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use settings::*;
pub use ui::*;
