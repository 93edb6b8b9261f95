//! Bridge link protocol
//!
//! This crate defines the UART protocol between the BLE bridge module (which
//! talks to the companion phone app) and the display controller. The bridge
//! forwards phone state as small framed messages; the display never talks
//! back.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 2B LE  │ 1B   │ 0–512B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Payloads are postcard-encoded. Decoding borrows strings from the frame,
//! so a decoded [`LinkMessage`] lives as long as the [`Frame`] it came from.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{
    ConfigPayload, LinkMessage, NavigationPayload, NotificationPayload, WeatherEntry,
    WeatherPayload, CONFIG_KIND_TIME, MAX_WEATHER_ENTRIES,
};
