pub mod config;
pub mod headless;
pub mod meshes;
pub mod plugin;
pub mod systems;
pub mod throw_control;
pub mod types;

pub use config::*;
pub use headless::*;
pub use meshes::*;
pub use plugin::*;
pub use systems::*;
pub use throw_control::*;
pub use types::*;
