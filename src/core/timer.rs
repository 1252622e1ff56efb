use std::time::Duration;

/// One-shot deadline on the engine clock.
///
/// Nothing fires on its own: the owner polls `fire` with the current time,
/// so a late poll (skipped frames, backgrounded tab) only delays the event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<Duration>,
}

impl OneShot {
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true once when `now` has reached the deadline, then disarms.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
