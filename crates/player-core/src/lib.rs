pub mod catalog;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod fade;
pub mod model;
pub mod scene;
pub mod schedule;

pub use catalog::*;
pub use constants::*;
pub use controller::*;
pub use error::PlayerError;
pub use fade::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
