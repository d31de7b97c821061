//! HTTP exchange with the booking service
//!
//! Booking is a two-stage pipeline: [`BookingApi::fetch_credential`] yields a
//! [`Credential`], and [`BookingApi::submit_booking`] requires one.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::envelope::BookingEnvelope;
use crate::error::{ClientError, ClientResult};
use shared::models::{BookingRequest, BookingResult};

/// Header carrying the API key on booking requests
pub const API_KEY_HEADER: &str = "x-api-key";

/// Used when a rejected booking carries no server message
pub const BOOKING_FAILED: &str =
    "The booking could not be completed. The server is unstable, try again.";

/// Booking service trait
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Stage one: obtain an API key
    async fn fetch_credential(&self) -> ClientResult<Credential>;

    /// Stage two: submit the booking with a key from stage one
    async fn submit_booking(
        &self,
        credential: &Credential,
        request: &BookingRequest,
    ) -> ClientResult<BookingResult>;
}

/// Network booking client
#[derive(Debug, Clone)]
pub struct NetworkBookingClient {
    client: Client,
    key_url: String,
    booking_url: String,
}

impl NetworkBookingClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            key_url: config.key_url.clone(),
            booking_url: config.booking_url.clone(),
        })
    }

    pub fn key_url(&self) -> &str {
        &self.key_url
    }

    pub fn booking_url(&self) -> &str {
        &self.booking_url
    }
}

#[async_trait]
impl BookingApi for NetworkBookingClient {
    async fn fetch_credential(&self) -> ClientResult<Credential> {
        let response = self.client.get(&self.key_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Key endpoint refused to issue an API key");
            return Err(ClientError::CredentialUnavailable);
        }

        let body = response.text().await?;
        let credential = Credential::from_body(&body)?;
        tracing::debug!("API key obtained");
        Ok(credential)
    }

    async fn submit_booking(
        &self,
        credential: &Credential,
        request: &BookingRequest,
    ) -> ClientResult<BookingResult> {
        let response = self
            .client
            .post(&self.booking_url)
            .header(API_KEY_HEADER, credential.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = rejection_message(&body);
            tracing::warn!(%status, %message, "Booking rejected");
            return Err(ClientError::BookingRejected(message));
        }

        let result = BookingEnvelope::parse(&body)?.into_result()?;
        tracing::info!(id = %result.id, when = %result.when, "Booking confirmed");
        Ok(result)
    }
}

/// Server supplied `message` from an error body, else [`BOOKING_FAILED`]
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| BOOKING_FAILED.to_string())
}
