// Host-side tests for the scene controller and its one-shot timer.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timer {
    include!("../src/core/timer.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;
use std::time::Duration;
use timer::OneShot;

fn secs(v: f32) -> Duration {
    Duration::from_secs_f32(v)
}

#[test]
fn one_shot_fires_once_then_disarms() {
    let mut t = OneShot::default();
    assert!(!t.fire(secs(100.0)));
    t.arm(secs(1.0), secs(2.0));
    assert_eq!(t.deadline(), Some(secs(3.0)));
    assert!(!t.fire(secs(2.9)));
    assert!(t.fire(secs(3.0)));
    assert!(!t.is_armed());
    assert!(!t.fire(secs(4.0)));
}

#[test]
fn one_shot_rearm_moves_the_deadline() {
    let mut t = OneShot::default();
    t.arm(secs(0.0), secs(1.0));
    t.arm(secs(0.8), secs(1.0));
    assert!(!t.fire(secs(1.5)));
    assert!(t.fire(secs(1.8)));
    t.arm(secs(2.0), secs(1.0));
    t.cancel();
    assert!(!t.fire(secs(10.0)));
}

#[test]
fn night_falls_once_after_the_delay() {
    let mut s = SceneController::new(SceneConfig::default());
    s.start(Duration::ZERO);
    assert!(s.is_armed());
    assert_eq!(s.update(secs(9.99)), None);
    assert_eq!(s.scene(), Scene::Day);

    let t = s.update(secs(10.0)).expect("transition at the deadline");
    assert_eq!(t.at, secs(10.0));
    assert!(s.is_night());

    for i in 0..100 {
        assert_eq!(s.update(secs(10.0 + i as f32)), None);
        assert_eq!(s.scene(), Scene::Night);
    }
}

#[test]
fn late_update_still_transitions_once() {
    let mut s = SceneController::new(SceneConfig::default());
    s.start(Duration::ZERO);
    assert!(s.update(secs(45.0)).is_some());
    assert!(s.update(secs(46.0)).is_none());
}

#[test]
fn start_twice_does_not_push_the_deadline() {
    let mut s = SceneController::new(SceneConfig::default());
    s.start(Duration::ZERO);
    s.start(secs(5.0));
    assert!(s.update(secs(10.0)).is_some());
}

#[test]
fn after_permission_trigger_waits_for_the_prompt() {
    let mut s = SceneController::new(SceneConfig {
        trigger: TransitionTrigger::AfterPermission,
        ..SceneConfig::default()
    });
    s.start(Duration::ZERO);
    assert!(!s.is_armed());
    assert!(s.update(secs(30.0)).is_none());

    s.permission_settled(secs(30.0));
    assert!(s.update(secs(39.0)).is_none());
    assert!(s.update(secs(40.0)).is_some());
}

#[test]
fn on_load_trigger_ignores_permission() {
    let mut s = SceneController::new(SceneConfig::default());
    s.permission_settled(Duration::ZERO);
    assert!(!s.is_armed());
}

#[test]
fn night_mix_ramps_over_the_fade() {
    let mut s = SceneController::new(SceneConfig::default());
    s.start(Duration::ZERO);
    assert_eq!(s.night_mix(secs(5.0)), 0.0);
    s.update(secs(10.0));
    assert_eq!(s.night_mix(secs(10.0)), 0.0);
    assert!((s.night_mix(secs(12.0)) - 0.5).abs() < 1e-4);
    assert_eq!(s.night_mix(secs(14.0)), 1.0);
    assert_eq!(s.night_mix(secs(60.0)), 1.0);
}

#[test]
fn zero_fade_jumps_straight_to_night() {
    let mut s = SceneController::new(SceneConfig {
        fade: Duration::ZERO,
        ..SceneConfig::default()
    });
    s.start(Duration::ZERO);
    s.update(secs(10.0));
    assert_eq!(s.night_mix(secs(10.0)), 1.0);
}

#[test]
fn cancel_keeps_the_day() {
    let mut s = SceneController::new(SceneConfig::default());
    s.start(Duration::ZERO);
    s.cancel();
    assert!(s.update(secs(60.0)).is_none());
    assert_eq!(s.scene(), Scene::Day);
}
