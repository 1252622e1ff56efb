// Motion Interpreter: turns raw acceleration and pointer-drag samples into
// discrete spawn commands.

use super::constants::*;
use super::timer::OneShot;
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Most recent device-motion reading (acceleration including gravity).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelSample(pub Vec3);

impl AccelSample {
    /// Missing, null or non-finite axes read as zero; readings beyond the
    /// `f32` range saturate.
    pub fn from_axes(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        let axis = |v: Option<f64>| {
            (v.filter(|a| a.is_finite()).unwrap_or(0.0) as f32).clamp(f32::MIN, f32::MAX)
        };
        Self(Vec3::new(axis(x), axis(y), axis(z)))
    }

    /// Sum of absolute per-axis deltas.
    pub fn delta_magnitude(&self, previous: &AccelSample) -> f32 {
        (self.0 - previous.0).abs().element_sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Motion,
    Pointer,
}

/// Threshold and burst sizing for one input path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeProfile {
    pub threshold: f32,
    pub scale: f32,
    pub count_scale: f32,
    pub count_base: usize,
}

impl ShakeProfile {
    pub const MOTION: Self = Self {
        threshold: MOTION_THRESHOLD,
        scale: MOTION_INTENSITY_SCALE,
        count_scale: MOTION_COUNT_SCALE,
        count_base: MOTION_COUNT_BASE,
    };

    pub const POINTER: Self = Self {
        threshold: POINTER_THRESHOLD,
        scale: POINTER_INTENSITY_SCALE,
        count_scale: POINTER_COUNT_SCALE,
        count_base: POINTER_COUNT_BASE,
    };

    /// `None` below the threshold, otherwise `clamp(magnitude / scale, 0, 1)`.
    /// An overflowed (infinite) magnitude is a full-strength shake.
    pub fn intensity(&self, magnitude: f32) -> Option<f32> {
        if magnitude.is_nan() || magnitude < self.threshold {
            return None;
        }
        Some((magnitude / self.scale).clamp(0.0, 1.0))
    }

    pub fn flake_count(&self, intensity: f32) -> usize {
        (intensity.clamp(0.0, 1.0) * self.count_scale).floor() as usize + self.count_base
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakePolicy {
    /// Every qualifying sample spawns.
    Continuous,
    /// One spawn per burst; the burst closes after `quiet` without a
    /// qualifying sample.
    SessionCoalesced { quiet: Duration },
    /// Qualifying samples spawn at most once per `cooldown`.
    RateLimited { cooldown: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    Continuous,
    Session,
    RateLimited,
}

impl PolicyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "continuous" => Some(Self::Continuous),
            "session" | "coalesced" => Some(Self::Session),
            "rate" | "throttled" => Some(Self::RateLimited),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub policy: ShakePolicy,
    pub motion: ShakeProfile,
    pub pointer: ShakeProfile,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::for_policy(PolicyKind::Continuous)
    }
}

impl MotionConfig {
    /// Each policy ships with its own tuning.
    pub fn for_policy(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Continuous => Self {
                policy: ShakePolicy::Continuous,
                motion: ShakeProfile::MOTION,
                pointer: ShakeProfile::POINTER,
            },
            PolicyKind::Session => Self {
                policy: ShakePolicy::SessionCoalesced {
                    quiet: SESSION_QUIET,
                },
                motion: ShakeProfile {
                    threshold: SESSION_MOTION_THRESHOLD,
                    scale: SESSION_MOTION_SCALE,
                    count_scale: SESSION_MOTION_COUNT_SCALE,
                    count_base: SESSION_MOTION_COUNT_BASE,
                },
                pointer: ShakeProfile {
                    count_scale: SESSION_POINTER_COUNT_SCALE,
                    count_base: SESSION_POINTER_COUNT_BASE,
                    ..ShakeProfile::POINTER
                },
            },
            PolicyKind::RateLimited => Self {
                policy: ShakePolicy::RateLimited {
                    cooldown: RATE_COOLDOWN,
                },
                motion: ShakeProfile {
                    threshold: RATE_MOTION_THRESHOLD,
                    scale: RATE_MOTION_SCALE,
                    count_scale: RATE_MOTION_COUNT_SCALE,
                    count_base: RATE_MOTION_COUNT_BASE,
                },
                pointer: ShakeProfile::POINTER,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnCommand {
    pub source: InputSource,
    pub count: usize,
    pub intensity: f32,
}

/// Per-path policy state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakeGate {
    shaking: bool,
    quiet: OneShot,
    last_spawn: Option<Duration>,
}

impl ShakeGate {
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Closes an open session once its quiet period ran out.
    pub fn poll(&mut self, now: Duration) {
        if self.quiet.fire(now) {
            self.shaking = false;
        }
    }

    pub fn cancel(&mut self) {
        self.quiet.cancel();
        self.shaking = false;
    }

    /// Decides whether a sample above threshold turns into a spawn.
    pub fn admit(&mut self, policy: ShakePolicy, now: Duration) -> bool {
        self.poll(now);
        match policy {
            ShakePolicy::Continuous => true,
            ShakePolicy::SessionCoalesced { quiet } => {
                self.quiet.arm(now, quiet);
                if self.shaking {
                    false
                } else {
                    self.shaking = true;
                    true
                }
            }
            ShakePolicy::RateLimited { cooldown } => {
                let ready = self
                    .last_spawn
                    .map_or(true, |t| now.saturating_sub(t) >= cooldown);
                if ready {
                    self.last_spawn = Some(now);
                }
                ready
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    held: bool,
    last: Vec2,
}

pub struct MotionInterpreter {
    pub config: MotionConfig,
    last_accel: AccelSample,
    motion_gate: ShakeGate,
    pointer_gate: ShakeGate,
    drag: DragState,
}

impl MotionInterpreter {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            last_accel: AccelSample::default(),
            motion_gate: ShakeGate::default(),
            pointer_gate: ShakeGate::default(),
            drag: DragState::default(),
        }
    }

    pub fn last_sample(&self) -> AccelSample {
        self.last_accel
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.held
    }

    pub fn motion_gate(&self) -> &ShakeGate {
        &self.motion_gate
    }

    pub fn pointer_gate(&self) -> &ShakeGate {
        &self.pointer_gate
    }

    pub fn on_acceleration(&mut self, sample: AccelSample, now: Duration) -> Option<SpawnCommand> {
        let magnitude = sample.delta_magnitude(&self.last_accel);
        self.last_accel = sample;
        let profile = self.config.motion;
        self.motion_gate.poll(now);
        let intensity = profile.intensity(magnitude)?;
        if !self.motion_gate.admit(self.config.policy, now) {
            return None;
        }
        Some(SpawnCommand {
            source: InputSource::Motion,
            count: profile.flake_count(intensity),
            intensity,
        })
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag = DragState {
            held: true,
            last: pos,
        };
    }

    pub fn pointer_up(&mut self) {
        self.drag.held = false;
    }

    pub fn pointer_move(&mut self, pos: Vec2, now: Duration) -> Option<SpawnCommand> {
        if !self.drag.held {
            return None;
        }
        let magnitude = (pos - self.drag.last).abs().element_sum();
        self.drag.last = pos;
        let profile = self.config.pointer;
        self.pointer_gate.poll(now);
        let intensity = profile.intensity(magnitude)?;
        if !self.pointer_gate.admit(self.config.policy, now) {
            return None;
        }
        Some(SpawnCommand {
            source: InputSource::Pointer,
            count: profile.flake_count(intensity),
            intensity,
        })
    }

    pub fn poll(&mut self, now: Duration) {
        self.motion_gate.poll(now);
        self.pointer_gate.poll(now);
    }

    pub fn cancel(&mut self) {
        self.motion_gate.cancel();
        self.pointer_gate.cancel();
        self.drag.held = false;
    }
}
