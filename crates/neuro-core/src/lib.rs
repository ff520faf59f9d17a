pub mod camera;
pub mod condition;
pub mod constants;
pub mod cues;
pub mod detector;
pub mod hints;
pub mod mesh;
pub mod particles;
pub mod signals;
pub mod store;
pub mod visual;

pub use camera::*;
pub use condition::*;
pub use cues::*;
pub use detector::*;
pub use hints::*;
pub use mesh::*;
pub use particles::*;
pub use signals::*;
pub use store::*;
pub use visual::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
