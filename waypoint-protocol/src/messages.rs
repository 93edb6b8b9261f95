//! Message types carried over the bridge link
//!
//! All messages flow from the bridge module to the display. Payloads are
//! postcard-encoded and decoded without copying: string and icon fields
//! borrow from the frame they were parsed from.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

// Message type IDs: Bridge → Display
pub const MSG_LINK_STATE: u8 = 0x01;
pub const MSG_NOTIFICATION: u8 = 0x02;
pub const MSG_NAVIGATION: u8 = 0x03;
pub const MSG_WEATHER: u8 = 0x04;
pub const MSG_CONFIG: u8 = 0x05;
pub const MSG_CLEAR_NOTIFICATIONS: u8 = 0x06;

/// Configuration kind carrying the phone's wall-clock time
pub const CONFIG_KIND_TIME: u8 = 0x01;

/// Maximum weather entries per message
pub const MAX_WEATHER_ENTRIES: usize = 4;

/// A phone notification as forwarded by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationPayload<'a> {
    /// Source application name
    pub app: &'a str,
    /// Notification title
    pub title: &'a str,
    /// Notification body
    pub body: &'a str,
}

/// Current turn-by-turn navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationPayload<'a> {
    /// Whether the phone is actively navigating
    pub active: bool,
    /// Short step title, usually the distance to the next turn
    pub title: &'a str,
    /// Long-form instruction text
    pub directions: &'a str,
    /// Remaining duration / ETA text
    pub duration: &'a str,
    /// 1-bpp turn icon, row-major, MSB first
    #[serde(borrow)]
    pub icon: Option<&'a [u8]>,
}

/// One forecast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherEntry {
    /// Current temperature
    pub temp: i16,
    /// Forecast high
    pub high: i16,
    /// Forecast low
    pub low: i16,
}

/// Weather forecast batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherPayload {
    /// Entries, today first
    pub entries: Vec<WeatherEntry, MAX_WEATHER_ENTRIES>,
}

/// Raw configuration event from the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigPayload {
    /// Configuration kind (see `CONFIG_KIND_*`)
    pub kind: u8,
    /// First raw value
    pub a: u32,
    /// Second raw value
    pub b: u32,
}

/// Messages from the bridge to the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkMessage<'a> {
    /// Phone connected (true) or disconnected (false)
    LinkState(bool),
    /// New notification appended to the pending queue
    Notification(NotificationPayload<'a>),
    /// Navigation state replaced
    Navigation(NavigationPayload<'a>),
    /// Weather forecast replaced
    Weather(WeatherPayload),
    /// Configuration event
    Config(ConfigPayload),
    /// Phone dismissed all notifications
    ClearNotifications,
}

impl<'a> LinkMessage<'a> {
    /// Parse a message from a frame
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        let payload = frame.payload.as_slice();
        match frame.msg_type {
            MSG_LINK_STATE => match payload {
                [state] => Ok(LinkMessage::LinkState(*state != 0)),
                _ => Err(FrameError::InvalidPayload),
            },
            MSG_NOTIFICATION => decode(payload).map(LinkMessage::Notification),
            MSG_NAVIGATION => decode(payload).map(LinkMessage::Navigation),
            MSG_WEATHER => decode(payload).map(LinkMessage::Weather),
            MSG_CONFIG => decode(payload).map(LinkMessage::Config),
            MSG_CLEAR_NOTIFICATIONS => Ok(LinkMessage::ClearNotifications),
            other => Err(FrameError::UnknownType(other)),
        }
    }

    /// Encode this message into a frame (bridge side, tests, simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            LinkMessage::LinkState(connected) => {
                Frame::new(MSG_LINK_STATE, &[u8::from(*connected)])
            }
            LinkMessage::Notification(payload) => encode(MSG_NOTIFICATION, payload),
            LinkMessage::Navigation(payload) => encode(MSG_NAVIGATION, payload),
            LinkMessage::Weather(payload) => encode(MSG_WEATHER, payload),
            LinkMessage::Config(payload) => encode(MSG_CONFIG, payload),
            LinkMessage::ClearNotifications => Ok(Frame::empty(MSG_CLEAR_NOTIFICATIONS)),
        }
    }
}

fn decode<'a, T: Deserialize<'a>>(payload: &'a [u8]) -> Result<T, FrameError> {
    postcard::from_bytes(payload).map_err(|_| FrameError::InvalidPayload)
}

fn encode<T: Serialize>(msg_type: u8, payload: &T) -> Result<Frame, FrameError> {
    let mut buf = [0u8; MAX_PAYLOAD_SIZE];
    let used = postcard::to_slice(payload, &mut buf).map_err(|_| FrameError::PayloadTooLarge)?;
    Frame::new(msg_type, used)
}
