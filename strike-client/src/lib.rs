//! Strike Client - booking client for the Strike bowling service
//!
//! Holds the booking form controller, the credential/booking exchange
//! with the remote service and the confirmation renderer.

pub mod app;
pub mod confirmation;
pub mod config;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod form;
pub mod http;

pub use app::{App, Screen};
pub use confirmation::Confirmation;
pub use config::ClientConfig;
pub use credential::Credential;
pub use envelope::BookingEnvelope;
pub use error::{ClientError, ClientResult, ErrorSlot, ValidationError};
pub use form::{BookingDraft, BookingForm, SubmitOutcome};
pub use http::{BookingApi, NetworkBookingClient};

// Re-export shared types for convenience
pub use shared::models::{BookingRequest, BookingResult};
