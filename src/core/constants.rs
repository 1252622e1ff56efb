// Platform-free tuning constants shared by the engine and its tests.

use std::time::Duration;

// Device motion (accelerationIncludingGravity, m/s^2 summed over three axes)
pub const MOTION_THRESHOLD: f32 = 15.0;
pub const MOTION_INTENSITY_SCALE: f32 = 30.0;
pub const MOTION_COUNT_SCALE: f32 = 20.0;
pub const MOTION_COUNT_BASE: usize = 5;

// Pointer drag (CSS px summed over two axes)
pub const POINTER_THRESHOLD: f32 = 20.0;
pub const POINTER_INTENSITY_SCALE: f32 = 100.0;
pub const POINTER_COUNT_SCALE: f32 = 15.0;
pub const POINTER_COUNT_BASE: usize = 3;

// Session-coalesced policy: one bigger burst per shake
pub const SESSION_MOTION_THRESHOLD: f32 = 12.0;
pub const SESSION_MOTION_SCALE: f32 = 25.0;
pub const SESSION_MOTION_COUNT_SCALE: f32 = 40.0;
pub const SESSION_MOTION_COUNT_BASE: usize = 10;
pub const SESSION_POINTER_COUNT_SCALE: f32 = 30.0;
pub const SESSION_POINTER_COUNT_BASE: usize = 6;
pub const SESSION_QUIET: Duration = Duration::from_millis(350);

// Rate-limited policy
pub const RATE_MOTION_THRESHOLD: f32 = 10.0;
pub const RATE_MOTION_SCALE: f32 = 25.0;
pub const RATE_MOTION_COUNT_SCALE: f32 = 12.0;
pub const RATE_MOTION_COUNT_BASE: usize = 4;
pub const RATE_COOLDOWN: Duration = Duration::from_millis(120);

// Particle field
pub const MAX_PARTICLES: usize = 400;
pub const SPAWN_Y_PX: f32 = -10.0; // just above the top edge
pub const EXIT_MARGIN_PX: f32 = 10.0; // removed once below bottom + margin
pub const DRIFT_DAMPING: f32 = 0.1;
pub const SIZE_BASE_PX: f32 = 2.0;
pub const SIZE_SPAN_PX: f32 = 2.0;
pub const SIZE_INTENSITY_GAIN: f32 = 3.0;
pub const FALL_BASE: f32 = 1.0;
pub const FALL_SPAN: f32 = 2.0;
pub const FALL_INTENSITY_GAIN: f32 = 3.0;
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_SPAN: f32 = 0.8;
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f32 = 800.0;

// Shake gauge decay per tick
pub const SHAKE_DECAY_PER_TICK: f32 = 0.01;

// Scene
pub const NIGHT_DELAY: Duration = Duration::from_secs(10);
pub const NIGHT_FADE: Duration = Duration::from_secs(4);

// Night sky
pub const STAR_COUNT: usize = 50;
pub const STAR_SIZE_MIN_PX: f32 = 1.0;
pub const STAR_SIZE_SPAN_PX: f32 = 3.0;
pub const STAR_DELAY_MAX_SEC: f32 = 4.0;
pub const STAR_PERIOD_MIN_SEC: f32 = 3.0;
pub const STAR_PERIOD_SPAN_SEC: f32 = 2.0;
pub const STAR_ALPHA_MIN: f32 = 0.5;

pub const DEFAULT_MESSAGE: &str = "Merry Christmas!";
