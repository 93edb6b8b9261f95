//! Collaborator traits
//!
//! These traits define the interface between the display logic and the
//! outside world. The firmware provides hardware-backed implementations;
//! tests provide small in-memory ones.

pub mod clock;
pub mod source;
pub mod transport;

pub use clock::Clock;
pub use source::FrameSource;
pub use transport::Transport;
