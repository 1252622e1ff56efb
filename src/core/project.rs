// Stateless projection of the model into GPU sprite instances.

use super::particles::ParticleField;
use super::stars::Star;

/// Canvas size in CSS px plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn device_size(&self) -> [f32; 2] {
        [self.width * self.scale, self.height * self.scale]
    }
}

/// Soft disc in device pixels, top-left origin.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: f32,
    pub alpha: f32,
}

/// `fade` multiplies every alpha (1 = fully visible day scene).
pub fn project_particles(field: &ParticleField, viewport: Viewport, fade: f32) -> Vec<SpriteInstance> {
    let fade = fade.clamp(0.0, 1.0);
    if fade <= 0.0 {
        return Vec::new();
    }
    field
        .iter()
        .map(|p| SpriteInstance {
            center: [
                p.x / 100.0 * viewport.width * viewport.scale,
                p.y * viewport.scale,
            ],
            size: p.size * viewport.scale,
            alpha: p.opacity * fade,
        })
        .collect()
}

pub fn project_stars(stars: &[Star], viewport: Viewport, t_sec: f32, night_mix: f32) -> Vec<SpriteInstance> {
    let mix = night_mix.clamp(0.0, 1.0);
    if mix <= 0.0 {
        return Vec::new();
    }
    stars
        .iter()
        .map(|s| SpriteInstance {
            center: [
                s.x / 100.0 * viewport.width * viewport.scale,
                s.y / 100.0 * viewport.height * viewport.scale,
            ],
            size: s.size * viewport.scale,
            alpha: s.twinkle(t_sec) * mix,
        })
        .collect()
}
