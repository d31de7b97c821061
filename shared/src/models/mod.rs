//! Data models
//!
//! Shared between the booking client and anything that talks to the
//! booking service on its behalf.

pub mod booking;

// Re-exports
pub use booking::*;
