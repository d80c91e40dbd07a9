pub mod color;
pub mod command;
pub mod config;
pub mod constants;
pub mod engine;
pub mod hotkey;
pub mod input;
pub mod particle;
pub mod render;
pub mod settings;
pub mod spawn;

pub static OVERLAY_WGSL: &str = include_str!("../shaders/overlay.wgsl");

pub use color::*;
pub use command::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use hotkey::*;
pub use input::*;
pub use particle::*;
pub use render::*;
pub use settings::*;
pub use spawn::*;
