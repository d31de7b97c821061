//! Booking form controller
//!
//! [`BookingForm`] owns the draft and the form's error slots, validates on
//! submit and runs the credential/booking exchange through a [`BookingApi`].

mod draft;

pub use draft::{BookingDraft, MAX_SHOE_SIZE, MIN_SHOE_SIZE, PLAYERS_PER_LANE};

use crate::error::{ClientError, ClientResult, ErrorSlot, ValidationError};
use crate::http::BookingApi;
use shared::models::{BookingRequest, BookingResult};

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service accepted the booking
    Booked(BookingResult),
    /// The draft failed validation; no request was made
    Invalid(ValidationError),
    /// The exchange with the service failed
    Failed(ClientError),
    /// A submission was already in flight; nothing happened
    AlreadySubmitting,
}

/// Booking form controller
#[derive(Debug)]
pub struct BookingForm<A> {
    api: A,
    draft: BookingDraft,
    general_error: Option<String>,
    shoe_error: Option<String>,
    submitting: bool,
}

impl<A: BookingApi> BookingForm<A> {
    /// Create a form with an empty draft
    pub fn new(api: A) -> Self {
        Self::with_draft(api, BookingDraft::default())
    }

    /// Create a form around an existing draft
    pub fn with_draft(api: A, draft: BookingDraft) -> Self {
        Self {
            api,
            draft,
            general_error: None,
            shoe_error: None,
            submitting: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn shoe_error(&self) -> Option<&str> {
        self.shoe_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.set_date(date);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.set_time(time);
    }

    pub fn set_lane_count(&mut self, lanes: u32) {
        self.draft.set_lane_count(lanes);
    }

    pub fn change_party_size(&mut self, people: u32) {
        self.draft.change_party_size(people);
    }

    pub fn change_shoe_size(&mut self, index: usize, value: impl Into<String>) {
        self.draft.change_shoe_size(index, value);
    }

    /// Validate the draft and, if it passes, book it.
    ///
    /// Errors land in the shoe or general slot; the draft is left intact so
    /// the user can correct it and submit again. `is_submitting` is reset
    /// even if this future is dropped before it completes.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            tracing::debug!("Submit ignored, a booking is already in flight");
            return SubmitOutcome::AlreadySubmitting;
        }

        self.general_error = None;
        self.shoe_error = None;

        let request = match self.draft.validate() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "Booking draft rejected");
                let message = Some(err.to_string());
                match err.slot() {
                    ErrorSlot::Shoe => self.shoe_error = message,
                    ErrorSlot::General => self.general_error = message,
                }
                return SubmitOutcome::Invalid(err);
            }
        };

        tracing::info!(
            when = %request.when,
            lanes = request.lanes,
            people = request.people,
            "Submitting booking"
        );

        let result = {
            let _guard = SubmittingGuard::engage(&mut self.submitting);
            exchange(&self.api, &request).await
        };

        match result {
            Ok(booking) => SubmitOutcome::Booked(booking),
            Err(err) => {
                tracing::warn!(error = ?err, "Booking failed");
                self.general_error = Some(err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Credential first, then the booking with that credential
async fn exchange<A: BookingApi + ?Sized>(
    api: &A,
    request: &BookingRequest,
) -> ClientResult<BookingResult> {
    let credential = api.fetch_credential().await?;
    api.submit_booking(&credential, request).await
}

/// Holds the submitting flag up for its lifetime
struct SubmittingGuard<'a>(&'a mut bool);

impl<'a> SubmittingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
