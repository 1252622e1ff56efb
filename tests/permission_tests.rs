// Host-side tests for the motion consent state machine.

#![allow(dead_code)]
mod permission {
    include!("../src/core/permission.rs");
}

use permission::*;

#[test]
fn no_consent_needed_means_samples_flow() {
    let p = MotionPermission::new(false);
    assert_eq!(p.access(), MotionAccess::NotRequired);
    assert!(p.samples_allowed());
    assert!(p.is_settled());
}

#[test]
fn consent_flow_grants_samples() {
    let mut p = MotionPermission::new(true);
    assert!(!p.samples_allowed());
    assert!(!p.is_settled());
    assert!(p.begin_request());
    assert_eq!(p.access(), MotionAccess::Requesting);
    assert!(!p.begin_request());
    assert_eq!(p.resolve(Ok(())), None);
    assert!(p.samples_allowed());
    assert!(p.is_settled());
}

#[test]
fn denial_returns_the_notice_once() {
    let mut p = MotionPermission::new(true);
    p.begin_request();
    let notice = p.resolve(Err(PermissionError::Denied)).expect("notice");
    assert!(notice.starts_with("Motion permission denied."));
    assert!(notice.ends_with(POINTER_ONLY_NOTICE));
    assert_eq!(p.access(), MotionAccess::Unavailable);
    assert!(!p.samples_allowed());

    assert_eq!(p.resolve(Err(PermissionError::Denied)), None);
    assert_eq!(p.resolve(Ok(())), None);
    assert!(!p.samples_allowed());
}

#[test]
fn failures_other_than_denial_read_as_unavailable() {
    let mut p = MotionPermission::new(true);
    let notice = p
        .resolve(Err(PermissionError::Request("SecurityError".into())))
        .expect("notice");
    assert!(notice.starts_with("Motion sensors unavailable."));

    let mut p = MotionPermission::new(true);
    assert!(p.resolve(Err(PermissionError::Unsupported)).is_some());
    assert!(!p.begin_request());
}

#[test]
fn errors_render_for_logs() {
    assert_eq!(PermissionError::Denied.to_string(), "motion permission denied");
    assert_eq!(
        PermissionError::Request("boom".into()).to_string(),
        "motion permission request failed: boom"
    );
}
