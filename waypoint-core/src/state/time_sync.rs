//! Time synchronisation state

use super::events::ConfigEvent;
use crate::traits::Clock;

/// Smallest primary value accepted as seconds since 1970 (September 2020)
///
/// The phone's time payload encoding is not documented; this threshold is a
/// heuristic, not a protocol guarantee. Values below it still mark the clock
/// as synced, just without touching the clock.
pub const PLAUSIBLE_EPOCH_FLOOR: u32 = 1_600_000_000;

/// Whether (and how) the wall clock has been set by the phone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSyncState {
    synced: bool,
    epoch: Option<u32>,
}

impl TimeSyncState {
    pub const fn new() -> Self {
        Self {
            synced: false,
            epoch: None,
        }
    }

    /// At least one time-sync event has been received
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Epoch of the last sync that looked like a real timestamp
    pub fn trusted_epoch(&self) -> Option<u32> {
        self.epoch
    }

    /// Apply a configuration event
    ///
    /// Returns true if the event was a time sync.
    pub fn apply<C: Clock>(&mut self, event: &ConfigEvent, clock: &mut C) -> bool {
        let ConfigEvent::TimeSync { primary, .. } = *event else {
            return false;
        };

        if primary > PLAUSIBLE_EPOCH_FLOOR {
            clock.set_epoch(primary);
            self.epoch = Some(primary);
        } else {
            self.epoch = None;
        }
        self.synced = true;
        true
    }
}
