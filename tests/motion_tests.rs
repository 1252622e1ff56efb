// Host-side tests for the motion interpreter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timer {
    include!("../src/core/timer.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use glam::{Vec2, Vec3};
use motion::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn shake(v: f32) -> AccelSample {
    AccelSample(Vec3::splat(v))
}

#[test]
fn below_threshold_never_spawns() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    for step in 0..150 {
        // per-axis delta of step/30, total just under 15
        let v = step as f32 / 30.0;
        let cmd = it.on_acceleration(shake(v), ms(step as u64 * 16));
        assert!(cmd.is_none(), "spawned at magnitude {}", v * 3.0);
        it.on_acceleration(AccelSample::default(), ms(step as u64 * 16 + 8));
    }
}

#[test]
fn threshold_fifteen_magnitude_thirty_gives_twenty_five_flakes() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    let cmd = it
        .on_acceleration(shake(10.0), ms(0))
        .expect("magnitude 30 should spawn");
    assert_eq!(cmd.source, InputSource::Motion);
    assert_eq!(cmd.intensity, 1.0);
    assert_eq!(cmd.count, 25);
}

#[test]
fn magnitude_at_threshold_spawns() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    let cmd = it.on_acceleration(shake(5.0), ms(0)).expect("at threshold");
    assert!((cmd.intensity - 0.5).abs() < 1e-6);
    assert_eq!(cmd.count, 15);
}

#[test]
fn intensity_is_clamped_and_monotonic() {
    let p = ShakeProfile::MOTION;
    let mut prev = 0.0;
    for m in 15..=120 {
        let i = p.intensity(m as f32).expect("above threshold");
        assert!((0.0..=1.0).contains(&i));
        assert!(i >= prev, "intensity fell at magnitude {m}");
        prev = i;
    }
    assert_eq!(p.intensity(1e6), Some(1.0));
    assert_eq!(p.intensity(f32::INFINITY), Some(1.0));
    assert_eq!(p.intensity(f32::NAN), None);
}

#[test]
fn readings_beyond_f32_range_saturate() {
    let s = AccelSample::from_axes(Some(1e39), Some(-1e39), Some(0.0));
    assert_eq!(s.0, Vec3::new(f32::MAX, f32::MIN, 0.0));

    let mut it = MotionInterpreter::new(MotionConfig::default());
    let cmd = it.on_acceleration(s, ms(0)).expect("huge reading spawns");
    assert_eq!(cmd.intensity, 1.0);
    assert_eq!(cmd.count, 25);
    // the swing back to rest is just as violent
    let back = AccelSample::from_axes(Some(0.0), Some(0.0), Some(0.0));
    assert!(it.on_acceleration(back, ms(16)).is_some());
}

#[test]
fn previous_sample_is_replaced_even_without_spawn() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    let quiet = AccelSample(Vec3::new(0.5, -0.2, 9.8));
    // 10.5 total: below threshold
    assert!(it.on_acceleration(quiet, ms(0)).is_none());
    assert_eq!(it.last_sample(), quiet);
    // same reading again: zero delta
    assert!(it.on_acceleration(quiet, ms(16)).is_none());
}

#[test]
fn missing_axes_read_as_zero() {
    let s = AccelSample::from_axes(None, Some(f64::NAN), Some(3.0));
    assert_eq!(s.0, Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(AccelSample::from_axes(None, None, None), AccelSample::default());
}

#[test]
fn continuous_policy_spawns_on_every_qualifying_sample() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::Continuous));
    let spawned = (0..10)
        .filter(|i| {
            let s = if i % 2 == 0 { shake(10.0) } else { shake(0.0) };
            it.on_acceleration(s, ms(*i as u64 * 16)).is_some()
        })
        .count();
    assert_eq!(spawned, 10);
}

#[test]
fn session_policy_coalesces_a_burst_into_one_spawn() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::Session));
    let mut spawned = Vec::new();
    for i in 0..=10u64 {
        let s = if i % 2 == 0 { shake(10.0) } else { shake(0.0) };
        if let Some(cmd) = it.on_acceleration(s, ms(i * 16)) {
            spawned.push(cmd);
        }
    }
    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].count, 50);
    assert!(it.motion_gate().is_shaking());

    // last qualifying sample at 160ms, quiet period 350ms
    it.poll(ms(509));
    assert!(it.motion_gate().is_shaking());
    it.poll(ms(510));
    assert!(!it.motion_gate().is_shaking());

    assert!(it.on_acceleration(shake(0.0), ms(600)).is_some());
}

#[test]
fn session_quiet_period_ignores_small_samples() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::Session));
    assert!(it.on_acceleration(shake(10.0), ms(0)).is_some());
    for t in (16..340).step_by(16) {
        // tiny jitter keeps nothing alive
        let s = AccelSample(Vec3::new(10.0 + (t % 3) as f32 * 0.1, 10.0, 10.0));
        assert!(it.on_acceleration(s, ms(t)).is_none());
    }
    assert!(it.on_acceleration(shake(0.0), ms(400)).is_some());
}

#[test]
fn rate_limited_policy_respects_cooldown() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::RateLimited));
    let mut times = Vec::new();
    for i in 0..20u64 {
        let s = if i % 2 == 0 { shake(10.0) } else { shake(0.0) };
        let now = ms(i * 50);
        if it.on_acceleration(s, now).is_some() {
            times.push(now);
        }
    }
    assert_eq!(
        times,
        vec![ms(0), ms(150), ms(300), ms(450), ms(600), ms(750), ms(900)]
    );
    for w in times.windows(2) {
        assert!(w[1] - w[0] >= ms(120));
    }
}

#[test]
fn pointer_drag_only_counts_while_held() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    assert!(it.pointer_move(Vec2::new(400.0, 400.0), ms(0)).is_none());

    it.pointer_down(Vec2::new(100.0, 100.0));
    let cmd = it
        .pointer_move(Vec2::new(130.0, 120.0), ms(16))
        .expect("50px drag spawns");
    assert_eq!(cmd.source, InputSource::Pointer);
    assert!((cmd.intensity - 0.5).abs() < 1e-6);
    assert_eq!(cmd.count, 10);

    let cmd = it
        .pointer_move(Vec2::new(230.0, 120.0), ms(32))
        .expect("100px drag spawns");
    assert_eq!(cmd.intensity, 1.0);
    assert_eq!(cmd.count, 18);

    it.pointer_up();
    assert!(!it.is_dragging());
    assert!(it.pointer_move(Vec2::new(900.0, 900.0), ms(48)).is_none());
}

#[test]
fn pointer_press_resets_the_delta_baseline() {
    let mut it = MotionInterpreter::new(MotionConfig::default());
    it.pointer_down(Vec2::new(500.0, 500.0));
    assert!(it.pointer_move(Vec2::new(505.0, 505.0), ms(0)).is_none());
    it.pointer_up();
    it.pointer_down(Vec2::new(10.0, 10.0));
    assert!(it.pointer_move(Vec2::new(12.0, 14.0), ms(16)).is_none());
}

#[test]
fn motion_and_pointer_sessions_are_independent() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::Session));
    assert!(it.on_acceleration(shake(10.0), ms(0)).is_some());
    it.pointer_down(Vec2::ZERO);
    assert!(it.pointer_move(Vec2::new(60.0, 0.0), ms(10)).is_some());
    assert!(it.pointer_move(Vec2::new(0.0, 0.0), ms(20)).is_none());
    assert!(it.on_acceleration(shake(0.0), ms(30)).is_none());
}

#[test]
fn cancel_closes_open_sessions() {
    let mut it = MotionInterpreter::new(MotionConfig::for_policy(PolicyKind::Session));
    assert!(it.on_acceleration(shake(10.0), ms(0)).is_some());
    it.cancel();
    assert!(!it.motion_gate().is_shaking());
    assert!(it.on_acceleration(shake(0.0), ms(16)).is_some());
}

#[test]
fn policy_names_parse() {
    assert_eq!(PolicyKind::parse("continuous"), Some(PolicyKind::Continuous));
    assert_eq!(PolicyKind::parse(" Session "), Some(PolicyKind::Session));
    assert_eq!(PolicyKind::parse("rate"), Some(PolicyKind::RateLimited));
    assert_eq!(PolicyKind::parse("wild"), None);
}
