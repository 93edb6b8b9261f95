//! Bridge link transport
//!
//! [`LinkTransport`] turns frames from the bridge module into the state the
//! [`Transport`] trait exposes: connection flag, pending notifications,
//! navigation, weather. Configuration messages become [`ConfigEvent`]s.

use heapless::{Deque, Vec};
use waypoint_protocol::{
    ConfigPayload, Frame, FrameError, LinkMessage, NavigationPayload, NotificationPayload,
    WeatherPayload, CONFIG_KIND_TIME, MAX_WEATHER_ENTRIES,
};

use crate::model::{field_text, NavIcon, NavigationSnapshot, NotificationRecord, WeatherSnapshot};
use crate::state::{ConfigEvent, EventInbox};
use crate::traits::{FrameSource, Transport};

/// Pending notifications kept between captures
pub const MAX_PENDING_NOTIFICATIONS: usize = 4;

/// Upper bound on frames decoded by a single pump
const MAX_FRAMES_PER_PUMP: usize = 16;

/// Counters for frames seen on the link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Frames decoded and applied
    pub accepted: u32,
    /// Frames dropped because their payload could not be decoded
    pub rejected: u32,
    /// Reason the most recent frame was dropped
    pub last_error: Option<FrameError>,
}

/// [`Transport`] backed by a stream of bridge frames
pub struct LinkTransport<S> {
    source: S,
    connected: bool,
    pending: Deque<NotificationRecord, MAX_PENDING_NOTIFICATIONS>,
    navigation: NavigationSnapshot,
    weather: Vec<WeatherSnapshot, MAX_WEATHER_ENTRIES>,
    stats: LinkStats,
}

impl<S: FrameSource> LinkTransport<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            connected: false,
            pending: Deque::new(),
            navigation: NavigationSnapshot::default(),
            weather: Vec::new(),
            stats: LinkStats::default(),
        }
    }

    /// Frame counters since creation
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Decode and apply a single frame
    pub fn handle_frame(&mut self, frame: &Frame, inbox: &mut EventInbox) {
        match LinkMessage::from_frame(frame) {
            Ok(msg) => {
                self.stats.accepted = self.stats.accepted.wrapping_add(1);
                self.apply(msg, inbox);
            }
            Err(e) => {
                self.stats.rejected = self.stats.rejected.wrapping_add(1);
                self.stats.last_error = Some(e);
            }
        }
    }

    fn apply(&mut self, msg: LinkMessage<'_>, inbox: &mut EventInbox) {
        match msg {
            LinkMessage::LinkState(connected) => {
                self.connected = connected;
                if !connected {
                    self.pending.clear();
                    self.navigation = NavigationSnapshot::default();
                }
            }
            LinkMessage::Notification(payload) => self.push_notification(&payload),
            LinkMessage::Navigation(payload) => self.navigation = navigation_from(&payload),
            LinkMessage::Weather(payload) => self.weather = weather_from(&payload),
            LinkMessage::Config(payload) => inbox.push(config_event(&payload)),
            LinkMessage::ClearNotifications => self.pending.clear(),
        }
    }

    fn push_notification(&mut self, payload: &NotificationPayload<'_>) {
        if self.pending.is_full() {
            self.pending.pop_front();
        }
        let record = NotificationRecord::new(payload.app, payload.title, payload.body);
        let _ = self.pending.push_back(record);
    }
}

impl<S: FrameSource> Transport for LinkTransport<S> {
    fn pump(&mut self, inbox: &mut EventInbox) {
        for _ in 0..MAX_FRAMES_PER_PUMP {
            let Some(frame) = self.source.try_next() else {
                break;
            };
            self.handle_frame(&frame, inbox);
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn notification_count(&self) -> usize {
        self.pending.len()
    }

    fn notification_at(&self, index: usize) -> Option<NotificationRecord> {
        self.pending.iter().nth(index).cloned()
    }

    fn clear_notifications(&mut self) {
        self.pending.clear();
    }

    fn navigation(&self) -> NavigationSnapshot {
        self.navigation.clone()
    }

    fn weather_count(&self) -> usize {
        self.weather.len()
    }

    fn weather_at(&self, index: usize) -> Option<WeatherSnapshot> {
        self.weather.get(index).copied()
    }
}

fn navigation_from(payload: &NavigationPayload<'_>) -> NavigationSnapshot {
    NavigationSnapshot {
        active: payload.active,
        title: field_text(payload.title),
        directions: field_text(payload.directions),
        duration: field_text(payload.duration),
        icon: payload.icon.and_then(NavIcon::from_bytes),
    }
}

fn weather_from(payload: &WeatherPayload) -> Vec<WeatherSnapshot, MAX_WEATHER_ENTRIES> {
    payload
        .entries
        .iter()
        .map(|e| WeatherSnapshot {
            temp: e.temp,
            high: e.high,
            low: e.low,
        })
        .collect()
}

fn config_event(payload: &ConfigPayload) -> ConfigEvent {
    if payload.kind == CONFIG_KIND_TIME {
        ConfigEvent::TimeSync {
            primary: payload.a,
            secondary: payload.b,
        }
    } else {
        ConfigEvent::Other { kind: payload.kind }
    }
}
