// What a `pagehide` means for the running session.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Frozen into the back/forward cache; the page may be shown again as is.
    Cached,
    /// Navigated away for good.
    Unloaded,
}

impl PageHide {
    /// From `PageTransitionEvent.persisted`.
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            Self::Cached
        } else {
            Self::Unloaded
        }
    }

    /// A cached page keeps its loop, listeners and timers so a restore
    /// resumes where it left off.
    pub fn releases_session(self) -> bool {
        self == Self::Unloaded
    }
}
