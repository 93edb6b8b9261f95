//! Screen mode selection
//!
//! One [`ModeSelector`] owns every piece of transient UI state: the
//! previous connection flag, the notification being shown and when it was
//! captured. It is evaluated once per cycle and decides which screen wins.

use crate::model::NotificationRecord;
use crate::traits::Transport;

/// Screen shown during a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    /// Phone not connected
    #[default]
    Disconnected,
    /// Phone connected this cycle (one-shot)
    Connected,
    /// Showing a captured notification
    Notification,
    /// Turn-by-turn navigation
    Navigation,
    /// Clock and weather
    Idle,
}

impl ScreenMode {
    /// Screens that are refreshed at the fast cycle rate
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ScreenMode::Connected | ScreenMode::Notification | ScreenMode::Navigation
        )
    }
}

/// Connection transition observed during the last evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEdge {
    /// Disconnected → connected
    Connected,
    /// Connected → disconnected
    Dropped,
}

/// Per-cycle screen mode state machine
#[derive(Debug, Clone)]
pub struct ModeSelector {
    mode: ScreenMode,
    was_connected: bool,
    edge: Option<LinkEdge>,
    notification: Option<NotificationRecord>,
    shown_at_ms: u64,
    timeout_ms: u32,
}

impl ModeSelector {
    /// Create a selector in the Disconnected state
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            mode: ScreenMode::Disconnected,
            was_connected: false,
            edge: None,
            notification: None,
            shown_at_ms: 0,
            timeout_ms,
        }
    }

    /// Mode chosen by the last evaluation
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Connection edge seen by the last evaluation, if any
    pub fn edge(&self) -> Option<LinkEdge> {
        self.edge
    }

    /// Notification currently on screen
    pub fn notification(&self) -> Option<&NotificationRecord> {
        self.notification.as_ref()
    }

    /// Milliseconds the current notification has been shown
    pub fn notification_age(&self, now_ms: u64) -> Option<u64> {
        self.notification
            .as_ref()
            .map(|_| now_ms.saturating_sub(self.shown_at_ms))
    }

    /// Pick the screen for this cycle
    ///
    /// Priority: connection state, connect edge, notification, navigation,
    /// idle. Capturing a notification clears the transport's pending queue.
    pub fn evaluate<T: Transport>(
        &mut self,
        now_ms: u64,
        link: &mut T,
        navigation_active: bool,
    ) -> ScreenMode {
        let connected = link.is_connected();
        self.edge = match (self.was_connected, connected) {
            (false, true) => Some(LinkEdge::Connected),
            (true, false) => Some(LinkEdge::Dropped),
            _ => None,
        };
        self.was_connected = connected;

        self.mode = self.select(now_ms, link, connected, navigation_active);
        self.mode
    }

    fn select<T: Transport>(
        &mut self,
        now_ms: u64,
        link: &mut T,
        connected: bool,
        navigation_active: bool,
    ) -> ScreenMode {
        if !connected {
            self.notification = None;
            return ScreenMode::Disconnected;
        }

        if self.edge == Some(LinkEdge::Connected) {
            self.notification = None;
            return ScreenMode::Connected;
        }

        if self.notification.is_none() {
            if let Some(record) = latest_valid(link) {
                link.clear_notifications();
                self.notification = Some(record);
                self.shown_at_ms = now_ms;
            }
        }

        if self.notification.is_some() {
            if now_ms.saturating_sub(self.shown_at_ms) < u64::from(self.timeout_ms) {
                return ScreenMode::Notification;
            }
            self.notification = None;
        }

        if navigation_active {
            ScreenMode::Navigation
        } else {
            ScreenMode::Idle
        }
    }
}

/// Newest pending record with any text in it
fn latest_valid<T: Transport>(link: &T) -> Option<NotificationRecord> {
    (0..link.notification_count())
        .rev()
        .filter_map(|i| link.notification_at(i))
        .find(NotificationRecord::is_valid)
}
