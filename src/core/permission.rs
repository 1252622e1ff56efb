// Consent model for the device-motion path. Pointer input never needs it.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("motion permission denied")]
    Denied,
    #[error("motion permission request failed: {0}")]
    Request(String),
    #[error("device motion is not available")]
    Unsupported,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAccess {
    /// Platform delivers samples without asking.
    NotRequired,
    /// Consent needed; waiting for a user gesture to ask.
    AwaitingGesture,
    Requesting,
    Granted,
    /// Denied or failed; pointer drag only from here on.
    Unavailable,
}

pub const POINTER_ONLY_NOTICE: &str = "You can still drag the mouse to make it snow!";

pub struct MotionPermission {
    access: MotionAccess,
    notice_shown: bool,
}

impl MotionPermission {
    pub fn new(requires_consent: bool) -> Self {
        Self {
            access: if requires_consent {
                MotionAccess::AwaitingGesture
            } else {
                MotionAccess::NotRequired
            },
            notice_shown: false,
        }
    }

    pub fn access(&self) -> MotionAccess {
        self.access
    }

    pub fn samples_allowed(&self) -> bool {
        matches!(self.access, MotionAccess::NotRequired | MotionAccess::Granted)
    }

    pub fn is_settled(&self) -> bool {
        !matches!(
            self.access,
            MotionAccess::AwaitingGesture | MotionAccess::Requesting
        )
    }

    /// Only one request is ever made.
    pub fn begin_request(&mut self) -> bool {
        if self.access == MotionAccess::AwaitingGesture {
            self.access = MotionAccess::Requesting;
            true
        } else {
            false
        }
    }

    /// Records the answer. On failure returns the pointer-only notice, once.
    pub fn resolve(&mut self, outcome: Result<(), PermissionError>) -> Option<String> {
        if self.is_settled() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.access = MotionAccess::Granted;
                log::info!("[permission] motion granted");
                None
            }
            Err(e) => {
                self.access = MotionAccess::Unavailable;
                log::warn!("[permission] {}; falling back to pointer drag", e);
                if self.notice_shown {
                    return None;
                }
                self.notice_shown = true;
                Some(match e {
                    PermissionError::Denied => {
                        format!("Motion permission denied. {}", POINTER_ONLY_NOTICE)
                    }
                    _ => format!("Motion sensors unavailable. {}", POINTER_ONLY_NOTICE),
                })
            }
        }
    }
}
