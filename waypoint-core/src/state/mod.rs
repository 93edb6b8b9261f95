//! Screen mode state machine
//!
//! Decides which screen is shown each cycle. The selector is explicit,
//! owns all transient UI state, and is only mutated from the tick loop.

pub mod events;
pub mod machine;
pub mod time_sync;

pub use events::{ConfigEvent, EventInbox, INBOX_CAPACITY};
pub use machine::{LinkEdge, ModeSelector, ScreenMode};
pub use time_sync::{TimeSyncState, PLAUSIBLE_EPOCH_FLOOR};
