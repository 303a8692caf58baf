//! Debounced save scheduling.
//!
//! Each edit schedules a save one debounce window in the future and cancels
//! whatever save was pending before it, so a burst of edits produces a
//! single write once typing pauses.
//!
//! This is a pure data structure with no timer of its own. The host passes
//! the current time into `schedule()` and polls `fire_due()` from its event
//! loop, which keeps the core independent of any timer API.

use std::time::{Duration, Instant};

use crate::config::timing::SAVE_DEBOUNCE_MS;

/// Handle for one scheduled save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    due: Instant,
}

pub struct SaveDebouncer {
    pending: Option<Pending>,
    next_id: u64,
    delay: Duration,
}

impl SaveDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            pending: None,
            next_id: 1,
            delay,
        }
    }

    /// Debouncer using the standard one-second save window.
    pub fn with_default() -> Self {
        Self::new(Duration::from_millis(SAVE_DEBOUNCE_MS))
    }

    /// Schedule a save `delay` after `now`, superseding any pending one.
    pub fn schedule(&mut self, now: Instant) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            due: now + self.delay,
        });
        id
    }

    /// Cancel a scheduled save. Returns false if `id` is no longer pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Take the pending save if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<TimerId> {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.pending = None;
                Some(pending.id)
            }
            _ => None,
        }
    }

    /// Take the pending save regardless of its deadline.
    pub fn take_pending(&mut self) -> Option<TimerId> {
        self.pending.take().map(|p| p.id)
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::with_default()
    }
}
