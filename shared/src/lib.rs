//! Shared types for Strike
//!
//! Wire models exchanged with the booking service.

pub mod models;

// Re-exports
pub use models::{BookingRequest, BookingResult};
pub use serde::{Deserialize, Serialize};
