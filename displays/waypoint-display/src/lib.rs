//! Rendering side of the Waypoint companion display
//!
//! This crate provides:
//! - `FrameBuffer` / `TextMetrics` traits for pixel displays
//! - Draw command lists that renderers produce and backends replay
//! - The text layout engine (wrapping and truncation on a character grid)
//! - One renderer per screen kind
//! - `TickDriver`, which runs one complete display cycle
//!
//! # Architecture
//!
//! Renderers are pure: they read a snapshot and return a `DrawList`. Only
//! the driver touches the framebuffer, so every layout can be checked on the
//! host against a recording backend.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod command;
pub mod driver;
pub mod layout;
pub mod screens;

#[cfg(test)]
mod testing;

// Re-export key types
pub use backend::{Bitmap, DisplayError, FrameBuffer, TextBounds, TextMetrics, TextSize};
pub use command::{DrawCommand, DrawList, Label};
pub use driver::{CycleReport, TickDriver};
pub use layout::{truncate, TextBlock, CHAR_CELL_WIDTH, LINE_HEIGHT};
pub use screens::{render, Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
