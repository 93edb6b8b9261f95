//! Wall-clock collaborator

use crate::time::{format_epoch, TimeText};

/// Real-time clock
pub trait Clock {
    /// Set the current wall-clock time (seconds since 1970-01-01)
    fn set_epoch(&mut self, epoch_s: u32);

    /// Current wall-clock time (seconds since 1970-01-01)
    fn now_epoch(&self) -> u32;

    /// Current time rendered with a strftime-style pattern
    fn format(&self, pattern: &str) -> TimeText {
        format_epoch(self.now_epoch(), pattern)
    }
}
