use super::constants::{SHAKE_DECAY_PER_TICK, STAR_COUNT};
use super::motion::{AccelSample, MotionConfig, MotionInterpreter, SpawnCommand};
use super::particles::{FieldConfig, ParticleField};
use super::permission::{MotionPermission, PermissionError};
use super::scene::{SceneConfig, SceneController, SceneTransition};
use super::stars::{generate_stars, Star};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineParams {
    pub motion: MotionConfig,
    pub field: FieldConfig,
    pub scene: SceneConfig,
}

/// What one tick changed that the page has to react to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub transition: Option<SceneTransition>,
    pub live_particles: usize,
}

/// Everything the greeting needs, owned in one place and driven by the page.
pub struct SnowglobeEngine {
    pub interpreter: MotionInterpreter,
    pub field: ParticleField,
    pub scene: SceneController,
    pub permission: MotionPermission,
    pub stars: Vec<Star>,
    pub message: String,
    shake_level: f32,
}

impl SnowglobeEngine {
    pub fn new(params: EngineParams, message: String, requires_consent: bool, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = generate_stars(STAR_COUNT, &mut rng);
        Self {
            interpreter: MotionInterpreter::new(params.motion),
            field: ParticleField::new(params.field, rng.gen()),
            scene: SceneController::new(params.scene),
            permission: MotionPermission::new(requires_consent),
            stars,
            message,
            shake_level: 0.0,
        }
    }

    /// Starts the scene clock; settles permission right away when none is needed.
    pub fn start(&mut self, now: Duration) {
        self.scene.start(now);
        if self.permission.is_settled() {
            self.scene.permission_settled(now);
        }
    }

    /// Decaying 0..1 gauge of the latest shake.
    pub fn shake_level(&self) -> f32 {
        self.shake_level
    }

    pub fn is_night(&self) -> bool {
        self.scene.is_night()
    }

    pub fn night_mix(&self, now: Duration) -> f32 {
        self.scene.night_mix(now)
    }

    pub fn on_acceleration(&mut self, sample: AccelSample, now: Duration) -> Option<SpawnCommand> {
        if self.is_night() || !self.permission.samples_allowed() {
            return None;
        }
        let cmd = self.interpreter.on_acceleration(sample, now)?;
        self.apply(cmd);
        Some(cmd)
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        if !self.is_night() {
            self.interpreter.pointer_down(pos);
        }
    }

    pub fn pointer_up(&mut self) {
        self.interpreter.pointer_up();
    }

    pub fn pointer_move(&mut self, pos: Vec2, now: Duration) -> Option<SpawnCommand> {
        if self.is_night() {
            return None;
        }
        let cmd = self.interpreter.pointer_move(pos, now)?;
        self.apply(cmd);
        Some(cmd)
    }

    fn apply(&mut self, cmd: SpawnCommand) {
        self.shake_level = cmd.intensity;
        self.field.spawn(cmd.count, cmd.intensity);
        log::debug!(
            "[motion] {:?} shake {:.2} -> {} flakes",
            cmd.source,
            cmd.intensity,
            cmd.count
        );
    }

    pub fn begin_permission_request(&mut self) -> bool {
        self.permission.begin_request()
    }

    /// Returns the one-time notice to show when motion input is lost.
    pub fn resolve_permission(
        &mut self,
        outcome: Result<(), PermissionError>,
        now: Duration,
    ) -> Option<String> {
        let notice = self.permission.resolve(outcome);
        if self.permission.is_settled() {
            self.scene.permission_settled(now);
        }
        notice
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.field.set_viewport_height(height);
    }

    pub fn tick(&mut self, now: Duration) -> FrameReport {
        self.interpreter.poll(now);
        let transition = self.scene.update(now);
        if transition.is_some() {
            self.field.freeze();
            self.interpreter.cancel();
        }
        self.field.tick();
        if !self.is_night() && self.shake_level > 0.0 {
            self.shake_level = (self.shake_level - SHAKE_DECAY_PER_TICK).max(0.0);
        }
        FrameReport {
            transition,
            live_particles: self.field.len(),
        }
    }

    /// Cancels every pending timer; the engine stays readable afterwards.
    pub fn teardown(&mut self) {
        self.scene.cancel();
        self.interpreter.cancel();
    }
}
