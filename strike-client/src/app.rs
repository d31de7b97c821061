//! Top-level app state
//!
//! The app shows either the booking form or the confirmation of the one
//! booking it made. Moving to the confirmation consumes the form, so there
//! is no way back.

use crate::confirmation::Confirmation;
use crate::form::{BookingForm, SubmitOutcome};
use crate::http::BookingApi;
use shared::models::BookingResult;

/// Which screen is shown
#[derive(Debug)]
pub enum Screen<A> {
    Form(BookingForm<A>),
    Confirmed(BookingResult),
}

/// App container
#[derive(Debug)]
pub struct App<A> {
    screen: Screen<A>,
}

impl<A: BookingApi> App<A> {
    /// Start on an empty booking form
    pub fn new(api: A) -> Self {
        Self {
            screen: Screen::Form(BookingForm::new(api)),
        }
    }

    pub fn screen(&self) -> &Screen<A> {
        &self.screen
    }

    /// The form, while it is shown
    pub fn form(&self) -> Option<&BookingForm<A>> {
        match &self.screen {
            Screen::Form(form) => Some(form),
            Screen::Confirmed(_) => None,
        }
    }

    /// The form, while it is shown
    pub fn form_mut(&mut self) -> Option<&mut BookingForm<A>> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            Screen::Confirmed(_) => None,
        }
    }

    /// The confirmed booking, once there is one
    pub fn booking(&self) -> Option<&BookingResult> {
        match &self.screen {
            Screen::Form(_) => None,
            Screen::Confirmed(booking) => Some(booking),
        }
    }

    pub fn confirmation(&self) -> Option<Confirmation<'_>> {
        self.booking().map(Confirmation::new)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.screen, Screen::Confirmed(_))
    }

    /// Submit the form. A booking moves the app to the confirmation screen.
    ///
    /// Returns `None` when the confirmation is already shown.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let Screen::Form(form) = &mut self.screen else {
            return None;
        };

        let outcome = form.submit().await;
        if let SubmitOutcome::Booked(booking) = &outcome {
            self.confirm(booking.clone());
        }
        Some(outcome)
    }

    fn confirm(&mut self, booking: BookingResult) {
        tracing::info!(id = %booking.id, "Showing booking confirmation");
        self.screen = Screen::Confirmed(booking);
    }
}
