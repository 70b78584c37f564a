use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::domain::rules::email::is_valid_email;
use crate::usecase::ports::outbox::{FeedbackEvent, FeedbackOutbox};

pub const SUBSCRIPTION_KIND: &str = "BRD Updates";
pub const APPROVAL_KIND: &str = "BRD Approval";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please describe the update you need.")]
    EmptyMessage,
    #[error("Could not record your request: {0}")]
    Delivery(String),
}

#[derive(Clone)]
pub struct FeedbackService {
    outbox: Arc<dyn FeedbackOutbox>,
}

impl FeedbackService {
    pub fn new(outbox: Arc<dyn FeedbackOutbox>) -> Self {
        Self { outbox }
    }

    fn deliver(&self, event: FeedbackEvent) -> Result<FeedbackEvent, FeedbackError> {
        self.outbox
            .deliver(&event)
            .map_err(FeedbackError::Delivery)?;
        Ok(event)
    }

    /// Validates the address before anything reaches the outbox.
    pub fn subscribe_email(&self, email: &str, kind: &str) -> Result<String, FeedbackError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(FeedbackError::InvalidEmail);
        }
        self.deliver(FeedbackEvent::Subscription {
            email: email.to_string(),
            kind: kind.to_string(),
        })?;
        Ok(format!("{email} will receive {kind}."))
    }

    pub fn record_approval(&self, kind: &str, document_version: &str) -> Result<String, FeedbackError> {
        self.deliver(FeedbackEvent::Approval {
            kind: kind.to_string(),
            document_version: document_version.to_string(),
            at: Utc::now(),
        })?;
        Ok(format!("Approval recorded for {document_version}."))
    }

    pub fn request_update(
        &self,
        requirement_key: Option<&str>,
        email: &str,
        message: &str,
    ) -> Result<String, FeedbackError> {
        let email = email.trim();
        let message = message.trim();
        if !is_valid_email(email) {
            return Err(FeedbackError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        self.deliver(FeedbackEvent::UpdateRequest {
            requirement_key: requirement_key
                .filter(|key| !key.is_empty())
                .map(|key| key.to_string()),
            email: email.to_string(),
            message: message.to_string(),
        })?;
        Ok("Update request sent.".to_string())
    }
}
