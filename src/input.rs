use crate::core::AccelSample;
use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS px (viewport coordinates).
#[inline]
pub fn pointer_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// `None` when the platform sends no acceleration block at all.
#[inline]
pub fn accel_sample(ev: &web::DeviceMotionEvent) -> Option<AccelSample> {
    ev.acceleration_including_gravity()
        .map(|a| AccelSample::from_axes(a.x(), a.y(), a.z()))
}
