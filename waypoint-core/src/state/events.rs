//! Configuration events delivered by the phone link

use heapless::Deque;

/// Maximum queued configuration events between two cycles
pub const INBOX_CAPACITY: usize = 8;

/// Configuration events pushed by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigEvent {
    /// Phone pushed its wall-clock time
    ///
    /// `primary` is usually seconds since 1970; the encoding is not
    /// guaranteed, see [`TimeSyncState`](super::TimeSyncState).
    TimeSync { primary: u32, secondary: u32 },
    /// Any other configuration kind; carried so it can be logged
    Other { kind: u8 },
}

impl ConfigEvent {
    /// Check if this event carries a time value
    pub fn is_time_sync(&self) -> bool {
        matches!(self, ConfigEvent::TimeSync { .. })
    }
}

/// Bounded queue of configuration events
///
/// Filled by [`Transport::pump`](crate::traits::Transport::pump) and drained
/// once per cycle by the tick driver. When full, the oldest event is dropped.
#[derive(Debug, Clone, Default)]
pub struct EventInbox {
    queue: Deque<ConfigEvent, INBOX_CAPACITY>,
    dropped: u32,
}

impl EventInbox {
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
            dropped: 0,
        }
    }

    /// Queue an event, evicting the oldest one if the inbox is full
    pub fn push(&mut self, event: ConfigEvent) {
        if self.queue.is_full() {
            self.queue.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        let _ = self.queue.push_back(event);
    }

    /// Take the oldest queued event
    pub fn pop(&mut self) -> Option<ConfigEvent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Events lost to overflow since creation
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
