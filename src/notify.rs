//! One-shot popup notifications.
//!
//! The interpreter reports two milestones to the outside world: the chip
//! getting repaired, and the vault finishing its unlock. Both are
//! edge-triggered: the announcer compares the previous observation with
//! the current state and fires on the false -> true (or empty ->
//! non-empty) transition only, so replaying commands never re-notifies.

use std::cell::RefCell;
use std::rc::Rc;

use crate::commands::{REPAIR_POPUP, UNLOCK_POPUP};
use crate::state::SessionState;

/// Where popup messages go. The TUI shows them as an overlay; tests
/// record them.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Sink that drops every message. Useful for headless replays.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _message: &str) {}
}

/// Sink backed by a shared queue the host drains.
///
/// The session owns one clone, the host keeps another; the host pops
/// messages off between ticks and turns them into popups.
#[derive(Debug, Clone, Default)]
pub struct SharedSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued message, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.messages.borrow_mut().drain(..).collect()
    }

    /// Number of messages delivered over the sink's lifetime is not
    /// tracked; this is just what is currently queued.
    pub fn pending(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl NotificationSink for SharedSink {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Edge-triggered latch between the session state and the sink.
///
/// `repaired` and "unlocked set non-empty" each produce at most one
/// notification per session, no matter how often the underlying commands
/// run. The unlock side additionally honors the session's
/// `success_announced` guard, which survives transcript clears.
#[derive(Debug, Default)]
pub struct UnlockAnnouncer {
    was_repaired: bool,
    had_unlocks: bool,
}

impl UnlockAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the state against the last observation and fire any
    /// newly crossed edges.
    pub fn observe(&mut self, state: &mut SessionState, sink: &mut dyn NotificationSink) {
        if state.repaired() && !self.was_repaired {
            self.was_repaired = true;
            sink.notify(REPAIR_POPUP);
        }

        if !state.unlocked().is_empty() && !self.had_unlocks {
            self.had_unlocks = true;
            if !state.success_announced() {
                state.mark_success_announced();
                sink.notify(UNLOCK_POPUP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_notifications_on_untouched_state() {
        let mut state = SessionState::new();
        let mut announcer = UnlockAnnouncer::new();
        let mut sink = SharedSink::new();

        announcer.observe(&mut state, &mut sink);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_repair_edge_fires_once() {
        let mut state = SessionState::new();
        let mut announcer = UnlockAnnouncer::new();
        let mut sink = SharedSink::new();

        state.mark_repaired();
        announcer.observe(&mut state, &mut sink);
        assert_eq!(sink.drain(), vec![REPAIR_POPUP.to_string()]);

        // Observing again without a new edge stays quiet.
        announcer.observe(&mut state, &mut sink);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_unlock_edge_fires_once() {
        let mut state = SessionState::new();
        let mut announcer = UnlockAnnouncer::new();
        let mut sink = SharedSink::new();

        state.mark_repaired();
        announcer.observe(&mut state, &mut sink);
        sink.drain();

        state.unlock_all();
        announcer.observe(&mut state, &mut sink);
        assert_eq!(sink.drain(), vec![UNLOCK_POPUP.to_string()]);
        assert!(state.success_announced());

        state.unlock_all();
        announcer.observe(&mut state, &mut sink);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_announced_guard_blocks_replayed_unlock() {
        let mut state = SessionState::new();
        let mut sink = SharedSink::new();

        state.mark_repaired();
        state.mark_success_announced();
        state.unlock_all();

        // A fresh announcer (e.g. after some hypothetical rebuild) still
        // must not re-fire: the guard lives in the state.
        let mut announcer = UnlockAnnouncer::new();
        announcer.observe(&mut state, &mut sink);
        assert_eq!(sink.drain(), vec![REPAIR_POPUP.to_string()]);
    }
}
