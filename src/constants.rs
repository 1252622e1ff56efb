// DOM hooks and render tuning for the browser front-end.
// Missing elements are skipped with a log line.
use crate::core::constants::{MAX_PARTICLES, STAR_COUNT};

// Element ids
pub const CANVAS_ID: &str = "snow-canvas";
pub const MESSAGE_ID: &str = "message-text";
pub const SNOWGLOBE_SCENE_ID: &str = "snowglobe-scene";
pub const NIGHT_SCENE_ID: &str = "night-scene";
pub const PERMISSION_BUTTON_ID: &str = "permission-btn";
pub const NOTICE_ID: &str = "motion-notice";
pub const INSTRUCTION_SUB_SELECTOR: &str = ".instruction-sub";

// Scene reveal classes (CSS owns the actual transition)
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const FADE_IN_CLASS: &str = "fade-in";

pub const DRAG_HINT: &str = "(or drag mouse on desktop)";

// Sprite buffer sized for a full field plus the star layer
pub const SPRITE_CAPACITY: usize = MAX_PARTICLES + STAR_COUNT;

// Surface clear, matches the bottom of the day gradient
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
