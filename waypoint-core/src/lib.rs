//! Board-agnostic core logic for the Waypoint companion display
//!
//! This crate contains everything that does not depend on a particular
//! panel or radio:
//!
//! - Collaborator traits (phone transport, wall clock, frame source)
//! - Data snapshots received from the phone
//! - Screen mode state machine and time synchronisation
//! - Bridge link transport built on `waypoint-protocol`
//! - Wall-clock formatting
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod link;
pub mod model;
pub mod state;
pub mod time;
pub mod traits;
