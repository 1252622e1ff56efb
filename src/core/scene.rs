// Scene Controller: Day until the one-shot delay fires, then Night for good.

use super::constants::{NIGHT_DELAY, NIGHT_FADE};
use super::timer::OneShot;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Day,
    Night,
}

/// What starts the countdown to night.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionTrigger {
    OnLoad,
    AfterPermission,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub delay: Duration,
    pub fade: Duration,
    pub trigger: TransitionTrigger,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            delay: NIGHT_DELAY,
            fade: NIGHT_FADE,
            trigger: TransitionTrigger::OnLoad,
        }
    }
}

/// Emitted exactly once, when night begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneTransition {
    pub at: Duration,
}

pub struct SceneController {
    pub config: SceneConfig,
    scene: Scene,
    timer: OneShot,
    night_at: Option<Duration>,
}

impl SceneController {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            scene: Scene::Day,
            timer: OneShot::default(),
            night_at: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn is_night(&self) -> bool {
        self.scene == Scene::Night
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn start(&mut self, now: Duration) {
        if self.config.trigger == TransitionTrigger::OnLoad {
            self.arm(now);
        }
    }

    pub fn permission_settled(&mut self, now: Duration) {
        if self.config.trigger == TransitionTrigger::AfterPermission {
            self.arm(now);
        }
    }

    fn arm(&mut self, now: Duration) {
        if self.scene == Scene::Day && !self.timer.is_armed() {
            self.timer.arm(now, self.config.delay);
            log::info!(
                "[scene] night in {:.1}s",
                self.config.delay.as_secs_f32()
            );
        }
    }

    pub fn update(&mut self, now: Duration) -> Option<SceneTransition> {
        if self.scene == Scene::Night || !self.timer.fire(now) {
            return None;
        }
        self.scene = Scene::Night;
        self.night_at = Some(now);
        log::info!("[scene] night falls at {:.2}s", now.as_secs_f32());
        Some(SceneTransition { at: now })
    }

    /// 0 during the day, then a linear ramp to 1 over the fade duration.
    pub fn night_mix(&self, now: Duration) -> f32 {
        let Some(start) = self.night_at else {
            return 0.0;
        };
        let fade = self.config.fade.as_secs_f32();
        if fade <= 0.0 {
            return 1.0;
        }
        (now.saturating_sub(start).as_secs_f32() / fade).clamp(0.0, 1.0)
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }
}
