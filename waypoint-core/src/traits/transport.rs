//! Phone link collaborator

use crate::model::{NavigationSnapshot, NotificationRecord, WeatherSnapshot};
use crate::state::EventInbox;

/// Access to state pushed by the companion phone app
///
/// Queries are only fresh after [`Transport::pump`] has run for the current
/// cycle. Implementations never fail: missing or malformed data is reported
/// as absent.
pub trait Transport {
    /// Process everything received since the last call
    ///
    /// Configuration events (time sync and friends) are deposited into
    /// `inbox` instead of being delivered through callbacks.
    fn pump(&mut self, inbox: &mut EventInbox);

    /// Whether the phone is currently connected
    fn is_connected(&self) -> bool;

    /// Number of notifications waiting to be shown
    fn notification_count(&self) -> usize;

    /// Pending notification by index, oldest first
    fn notification_at(&self, index: usize) -> Option<NotificationRecord>;

    /// Drop all pending notifications
    fn clear_notifications(&mut self);

    /// Current navigation state
    fn navigation(&self) -> NavigationSnapshot;

    /// Number of weather entries available
    fn weather_count(&self) -> usize;

    /// Weather entry by index, today first
    fn weather_at(&self, index: usize) -> Option<WeatherSnapshot>;
}
