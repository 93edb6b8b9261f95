//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod link_rx;
pub mod tick;

pub use link_rx::link_rx_task;
pub use tick::{tick_task, Driver};
