//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking payload sent to the booking endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Local datetime, e.g. "2025-11-11T18:00"
    pub when: String,
    /// Number of lanes (>= 1)
    pub lanes: u32,
    /// Number of players (>= 1)
    pub people: u32,
    /// One shoe size per player
    pub shoes: Vec<f64>,
}

/// Confirmed booking as returned by the booking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResult {
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    /// Expected to hold `people` entries, not re-checked client side
    pub shoes: Vec<f64>,
    /// Total price in SEK
    pub price: f64,
    /// Identifier assigned by the server
    pub id: String,
    pub active: bool,
}

impl BookingResult {
    /// The request fields of this booking
    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            when: self.when.clone(),
            lanes: self.lanes,
            people: self.people,
            shoes: self.shoes.clone(),
        }
    }
}
