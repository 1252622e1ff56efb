pub mod constants;
pub mod engine;
pub mod lifecycle;
pub mod motion;
pub mod params;
pub mod particles;
pub mod permission;
pub mod project;
pub mod scene;
pub mod stars;
pub mod timer;

pub use engine::*;
pub use lifecycle::PageHide;
pub use motion::{AccelSample, MotionConfig, PolicyKind};
pub use params::PageParams;
pub use permission::PermissionError;
pub use project::{SpriteInstance, Viewport};

// Shaders bundled as string constants
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../../shaders/sprites.wgsl");
