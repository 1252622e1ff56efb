// Particle Field: the live snowflakes, spawned by shakes and advanced once per tick.

use super::constants::*;
use rand::prelude::*;
use std::collections::VecDeque;

/// One snowflake. `x` is a percentage of the viewport width, `y` is CSS px
/// from the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub fall_speed: f32,
    pub drift: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub spawn_y: f32,
    pub exit_margin: f32,
    pub drift_damping: f32,
    pub size_base: f32,
    pub size_span: f32,
    pub size_intensity_gain: f32,
    pub fall_base: f32,
    pub fall_span: f32,
    pub fall_intensity_gain: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            spawn_y: SPAWN_Y_PX,
            exit_margin: EXIT_MARGIN_PX,
            drift_damping: DRIFT_DAMPING,
            size_base: SIZE_BASE_PX,
            size_span: SIZE_SPAN_PX,
            size_intensity_gain: SIZE_INTENSITY_GAIN,
            fall_base: FALL_BASE,
            fall_span: FALL_SPAN,
            fall_intensity_gain: FALL_INTENSITY_GAIN,
            opacity_min: OPACITY_MIN,
            opacity_span: OPACITY_SPAN,
        }
    }
}

pub struct ParticleField {
    pub config: FieldConfig,
    // front = oldest
    particles: VecDeque<Particle>,
    next_id: u64,
    viewport_height: f32,
    frozen: bool,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            particles: VecDeque::with_capacity(config.max_particles),
            next_id: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT_PX,
            frozen: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        if height.is_finite() && height > 0.0 {
            self.viewport_height = height;
        }
    }

    /// Lower bound a particle must pass to be removed.
    pub fn exit_line(&self) -> f32 {
        self.viewport_height + self.config.exit_margin
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn spawn(&mut self, count: usize, intensity: f32) {
        if self.frozen || count == 0 {
            return;
        }
        let intensity = intensity.clamp(0.0, 1.0);
        let c = self.config;
        let size_range = c.size_span + c.size_intensity_gain * intensity;
        let fall_range = c.fall_span + c.fall_intensity_gain * intensity;
        for _ in 0..count {
            let size = self.rng.gen::<f32>() * size_range + c.size_base;
            let x = self.rng.gen::<f32>() * 100.0;
            let opacity = self.rng.gen::<f32>() * c.opacity_span + c.opacity_min;
            let fall_speed = self.rng.gen::<f32>() * fall_range + c.fall_base;
            let drift = (self.rng.gen::<f32>() - 0.5) * 2.0;
            self.particles.push_back(Particle {
                id: self.next_id,
                x,
                y: c.spawn_y,
                size,
                opacity,
                fall_speed,
                drift,
            });
            self.next_id += 1;
        }
        self.enforce_cap();
    }

    pub fn tick(&mut self) {
        if self.frozen {
            return;
        }
        let exit = self.exit_line();
        let damping = self.config.drift_damping;
        self.particles.retain_mut(|p| {
            p.y += p.fall_speed;
            p.x += p.drift * damping;
            p.y <= exit
        });
        self.enforce_cap();
    }

    /// Drops the oldest particles until the population fits the cap.
    fn enforce_cap(&mut self) {
        let max = self.config.max_particles;
        if self.particles.len() > max {
            let excess = self.particles.len() - max;
            self.particles.drain(..excess);
            log::debug!("[field] evicted {} oldest flakes", excess);
        }
    }
}
