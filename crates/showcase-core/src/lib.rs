pub mod animator;
pub mod constants;
pub mod easing;
pub mod lighting;
pub mod mapper;
pub mod mesh;
pub mod progress;
pub mod scene;
pub mod state;
pub mod tween;

pub use animator::*;
pub use constants::*;
pub use easing::*;
pub use lighting::*;
pub use mapper::*;
pub use mesh::*;
pub use progress::*;
pub use scene::*;
pub use state::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
