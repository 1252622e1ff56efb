// Static night-sky star field.

use super::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent of the viewport.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub delay_sec: f32,
    pub period_sec: f32,
}

impl Star {
    /// Pulsing alpha in `[STAR_ALPHA_MIN, 1]`, full before the delay ends.
    pub fn twinkle(&self, t_sec: f32) -> f32 {
        let local = t_sec - self.delay_sec;
        if local <= 0.0 || self.period_sec <= 0.0 {
            return 1.0;
        }
        let phase = (local / self.period_sec).fract() * std::f32::consts::TAU;
        let wave = 0.5 + 0.5 * phase.cos();
        STAR_ALPHA_MIN + (1.0 - STAR_ALPHA_MIN) * wave
    }
}

pub fn generate_stars(count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen::<f32>() * 100.0,
            y: rng.gen::<f32>() * 100.0,
            size: rng.gen::<f32>() * STAR_SIZE_SPAN_PX + STAR_SIZE_MIN_PX,
            delay_sec: rng.gen::<f32>() * STAR_DELAY_MAX_SEC,
            period_sec: rng.gen::<f32>() * STAR_PERIOD_SPAN_SEC + STAR_PERIOD_MIN_SEC,
        })
        .collect()
}
