use crate::scene::PartId;
use crate::utils::time::{Duration, Instant};

/// How long after the last pointer hit a click session stays open before
/// it is disambiguated.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Semantic outcome of a click session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// One hit followed by silence: a focus-camera gesture.
    Single(PartId),
    /// Two or more hits inside the window: an inspect-details gesture.
    Double(PartId),
    /// A click on empty space.
    Cleared,
}

#[derive(Debug, Clone, Copy)]
enum ClickState {
    Idle,
    Pending {
        subject: PartId,
        count: u32,
        deadline: Instant,
    },
}

/// Turns a raw stream of pointer hits into single-click vs double-click
/// outcomes using a self-contained 300 ms window.
///
/// Each new hit restarts the window against the most recent hit's subject
/// (rapid re-click debounce); a rapid pair across two different parts
/// therefore lands as a double click on the second part. That mirrors the
/// shipped behavior and is pinned by tests.
///
/// The window is polled rather than scheduled: callers poll once per frame
/// with the current timestamp, which makes the machine deterministic.
#[derive(Debug)]
pub struct ClickDisambiguator {
    state: ClickState,
}

impl Default for ClickDisambiguator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDisambiguator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ClickState::Idle,
        }
    }

    /// Feeds a pointer hit. If a previous session had already expired but
    /// was not yet polled, its outcome is flushed and returned so it is
    /// not merged into the new session.
    pub fn pointer_hit(&mut self, subject: PartId, now: Instant) -> Option<ClickOutcome> {
        let flushed = self.poll(now);

        let count = match self.state {
            ClickState::Pending { count, .. } => count + 1,
            ClickState::Idle => 1,
        };
        self.state = ClickState::Pending {
            subject,
            count,
            deadline: now + DOUBLE_CLICK_WINDOW,
        };
        flushed
    }

    /// A click on empty space: cancels any pending session and emits
    /// [`ClickOutcome::Cleared`] immediately.
    pub fn pointer_miss(&mut self) -> ClickOutcome {
        self.state = ClickState::Idle;
        ClickOutcome::Cleared
    }

    /// Polls the window. Returns the session outcome once the deadline has
    /// elapsed; at most one outcome is emitted per session.
    pub fn poll(&mut self, now: Instant) -> Option<ClickOutcome> {
        let ClickState::Pending {
            subject,
            count,
            deadline,
        } = self.state
        else {
            return None;
        };
        if now < deadline {
            return None;
        }

        self.state = ClickState::Idle;
        Some(if count == 1 {
            ClickOutcome::Single(subject)
        } else {
            ClickOutcome::Double(subject)
        })
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ClickState::Pending { .. })
    }
}
