//! Static configuration
//!
//! Board and timing constants compiled into the firmware. Nothing here is
//! read at runtime; the types exist so host tests can build variations.

pub mod types;

pub use types::*;
