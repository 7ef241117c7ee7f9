use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Checked by each row of a field pass before it starts.
pub trait Cancellation: Sync {
    fn is_cancelled(&self) -> bool;
}

/// Never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/**
Cancels once more input has been sent than the pass has already applied.

`sent` counts events handed to the queue, incremented after each event is
queued. `applied` is how many events were drained before the pass started.
An event drained early but counted late never makes `sent` exceed `applied`,
so a pass is only ever cancelled by input it does not include.
*/
#[derive(Clone, Copy, Debug)]
pub struct PendingInput<'a> {
    pub sent: &'a AtomicU64,
    pub applied: u64,
}

impl Cancellation for PendingInput<'_> {
    fn is_cancelled(&self) -> bool {
        self.sent.load(Ordering::Acquire) > self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_cancel() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn test_atomic_bool_reads_flag() {
        let flag = AtomicBool::new(false);
        assert!(!flag.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_pending_input_only_counts_unapplied_events() {
        let sent = AtomicU64::new(3);
        let pending = PendingInput {
            sent: &sent,
            applied: 3,
        };
        assert!(!pending.is_cancelled());

        sent.fetch_add(1, Ordering::Release);
        assert!(pending.is_cancelled());
    }

    #[test]
    fn test_pending_input_ignores_late_counts_of_drained_events() {
        // the event was drained before its sender bumped the counter
        let sent = AtomicU64::new(2);
        let pending = PendingInput {
            sent: &sent,
            applied: 3,
        };
        assert!(!pending.is_cancelled());

        sent.fetch_add(1, Ordering::Release);
        assert!(!pending.is_cancelled());
    }
}
