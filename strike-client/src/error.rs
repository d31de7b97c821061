//! Client error types
//!
//! [`ValidationError`] covers problems with the draft that are caught before
//! any request is made. [`ClientError`] covers the credential and booking
//! exchange. The `Display` output of both is the message shown to the user.

use thiserror::Error;

use crate::form::{MAX_SHOE_SIZE, MIN_SHOE_SIZE, PLAYERS_PER_LANE};

/// Shown when an error carries no message of its own
pub const GENERIC_FAILURE: &str = "Something went wrong. Try again in a moment.";

/// Where a form error is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSlot {
    /// Next to the shoe size inputs
    Shoe,
    /// Below the whole form
    General,
}

/// Input error found while validating a draft
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Choose a date and time.")]
    MissingDateTime,

    #[error("The number of shoe sizes must be exactly {expected}.")]
    ShoeCountMismatch { expected: u32 },

    #[error("Fill in every shoe size; exactly {expected} values are required.")]
    EmptyShoeSize { expected: u32 },

    #[error("One or more shoe sizes is not a valid number.")]
    InvalidShoeSize,

    #[error("Shoe sizes must be between {min} and {max}.", min = MIN_SHOE_SIZE, max = MAX_SHOE_SIZE)]
    ShoeSizeOutOfRange,

    #[error(
        "Max {per_lane} players per lane. You have {people} {} but only {lanes} {}.",
        noun(.people, "player", "players"),
        noun(.lanes, "lane", "lanes"),
        per_lane = PLAYERS_PER_LANE
    )]
    LaneCapacity { people: u32, lanes: u32 },
}

impl ValidationError {
    /// Which error slot the message belongs in
    pub fn slot(&self) -> ErrorSlot {
        match self {
            Self::ShoeCountMismatch { .. }
            | Self::EmptyShoeSize { .. }
            | Self::InvalidShoeSize
            | Self::ShoeSizeOutOfRange => ErrorSlot::Shoe,
            Self::MissingDateTime | Self::LaneCapacity { .. } => ErrorSlot::General,
        }
    }
}

fn noun(count: &u32, singular: &'static str, plural: &'static str) -> &'static str {
    if *count == 1 { singular } else { plural }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Key endpoint answered with a non-success status
    #[error("Could not obtain an API key. Try again later.")]
    CredentialUnavailable,

    /// Key endpoint answered but no usable key could be extracted
    #[error("Invalid API key from server.")]
    InvalidCredential,

    /// Booking endpoint answered with a non-success status
    #[error("{0}")]
    BookingRejected(String),

    /// Success body did not match any known shape; holds the decode detail
    #[error("Invalid response from server.")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Message for the general error slot
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
