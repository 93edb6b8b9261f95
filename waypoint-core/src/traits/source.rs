//! Raw frame source

use waypoint_protocol::Frame;

/// Non-blocking supply of frames received from the bridge module
///
/// The receive side (a UART task on hardware) only parses frames; decoding
/// happens when the tick loop drains them.
pub trait FrameSource {
    /// Take the next received frame, if one is waiting
    fn try_next(&mut self) -> Option<Frame>;
}
