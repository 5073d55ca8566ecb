//! Usage: Process-wide application state managed by the runtime and borrowed by lifecycle handlers.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct ApplicationState {
    ready: AtomicBool,
    next_window_seq: AtomicU64,
}

impl ApplicationState {
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Returns `true` only for the call that flipped the flag.
    pub fn mark_ready(&self) -> bool {
        self.ready
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn next_window_seq(&self) -> u64 {
        self.next_window_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn windows_created(&self) -> u64 {
        self.next_window_seq.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationState;

    #[test]
    fn mark_ready_flips_once() {
        let state = ApplicationState::default();
        assert!(!state.is_ready());
        assert!(state.mark_ready());
        assert!(state.is_ready());
        assert!(!state.mark_ready());
        assert!(state.is_ready());
    }

    #[test]
    fn window_seq_is_monotonic() {
        let state = ApplicationState::default();
        assert_eq!(state.next_window_seq(), 0);
        assert_eq!(state.next_window_seq(), 1);
        assert_eq!(state.next_window_seq(), 2);
        assert_eq!(state.windows_created(), 3);
    }
}
