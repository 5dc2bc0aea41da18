//! Newsletter signup form state.
//!
//! `Idle -> (validating) -> Submitting -> Success | Error`. Validation runs
//! locally and never reaches the network; a submission in flight blocks
//! further submissions until it resolves.

use crate::client::{ClientError, StorefrontApi};
use crate::types::MessageResponse;

pub const HEADING: &str = "Join Our Newsletter";
pub const SUBHEADING: &str = "Get exclusive deals and updates delivered to your inbox";
pub const PLACEHOLDER: &str = "Enter your email";
pub const SUBMIT_LABEL: &str = "Subscribe";
pub const SUBMITTING_LABEL: &str = "Subscribing...";
pub const FALLBACK_ERROR: &str = "Failed to subscribe. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    #[error("Please enter your email")]
    Empty,
    #[error("Please enter a valid email")]
    Malformed,
}

/// Syntactic check only: the address must contain both `@` and `.`.
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EmailValidationError::Empty);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(EmailValidationError::Malformed);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    email: String,
    status: SubmissionStatus,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Input and button are disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validate and enter `Submitting`. Returns the address to send, or `None`
    /// when validation failed or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting() {
            return None;
        }

        if let Err(e) = validate_email(&self.email) {
            self.status = SubmissionStatus::Error(e.to_string());
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(self.email.trim().to_string())
    }

    /// Leave `Submitting` with the outcome of the subscribe call.
    pub fn finish(&mut self, result: Result<MessageResponse, ClientError>) {
        match result {
            Ok(body) => {
                self.email.clear();
                self.status = SubmissionStatus::Success(body.message);
            }
            Err(e) => {
                tracing::warn!(error = %e, "newsletter subscription failed");
                let message = e.server_message().unwrap_or(FALLBACK_ERROR).to_string();
                self.status = SubmissionStatus::Error(message);
            }
        }
    }

    /// Full submission against `api`.
    pub async fn submit<A: StorefrontApi + ?Sized>(&mut self, api: &A) -> &SubmissionStatus {
        if let Some(email) = self.begin_submit() {
            let result = api.subscribe(&email).await;
            self.finish(result);
        }
        &self.status
    }
}
