//! Software real-time clock
//!
//! The RP2040 has no battery-backed RTC on this board, so wall-clock time is
//! the last epoch pushed by the phone plus the monotonic time since then.

use embassy_time::Instant;

use waypoint_core::traits::Clock;

pub struct SoftRtc {
    epoch_at_set: u32,
    set_at: Instant,
}

impl SoftRtc {
    /// Clock starting at the Unix epoch
    pub fn new() -> Self {
        Self {
            epoch_at_set: 0,
            set_at: Instant::now(),
        }
    }
}

impl Clock for SoftRtc {
    fn set_epoch(&mut self, epoch_s: u32) {
        self.epoch_at_set = epoch_s;
        self.set_at = Instant::now();
    }

    fn now_epoch(&self) -> u32 {
        let elapsed = u32::try_from(self.set_at.elapsed().as_secs()).unwrap_or(u32::MAX);
        self.epoch_at_set.saturating_add(elapsed)
    }
}
