use tracing::info;

use crate::usecase::ports::outbox::{FeedbackEvent, FeedbackOutbox};

/// Outbox with no backend: every event is logged and reported delivered.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutbox;

impl FeedbackOutbox for LogOutbox {
    fn deliver(&self, event: &FeedbackEvent) -> Result<(), String> {
        match event {
            FeedbackEvent::Subscription { email, kind } => {
                info!(%email, %kind, "email subscription added");
            }
            FeedbackEvent::Approval {
                kind,
                document_version,
                at,
            } => {
                info!(%kind, %document_version, at = %at.to_rfc3339(), "document approval recorded");
            }
            FeedbackEvent::UpdateRequest {
                requirement_key,
                email,
                message,
            } => {
                info!(
                    requirement = requirement_key.as_deref().unwrap_or("(document)"),
                    %email,
                    %message,
                    "update requested"
                );
            }
        }
        Ok(())
    }
}
