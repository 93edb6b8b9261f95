//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};

use waypoint_core::traits::FrameSource;
use waypoint_protocol::Frame;

/// Channel capacity for frames from the bridge
const FRAME_CHANNEL_SIZE: usize = 4;

/// Frames parsed by the link RX task, drained by the tick task
pub static FRAME_CHANNEL: Channel<CriticalSectionRawMutex, Frame, FRAME_CHANNEL_SIZE> =
    Channel::new();

/// Non-blocking [`FrameSource`] over [`FRAME_CHANNEL`]
pub struct ChannelSource {
    rx: Receiver<'static, CriticalSectionRawMutex, Frame, FRAME_CHANNEL_SIZE>,
}

impl ChannelSource {
    pub fn new() -> Self {
        Self {
            rx: FRAME_CHANNEL.receiver(),
        }
    }
}

impl FrameSource for ChannelSource {
    fn try_next(&mut self) -> Option<Frame> {
        self.rx.try_receive().ok()
    }
}
