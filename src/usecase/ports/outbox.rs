use chrono::{DateTime, Utc};

/// A reader-side action the dashboard acknowledges but never writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Subscription {
        email: String,
        kind: String,
    },
    Approval {
        kind: String,
        document_version: String,
        at: DateTime<Utc>,
    },
    UpdateRequest {
        requirement_key: Option<String>,
        email: String,
        message: String,
    },
}

pub trait FeedbackOutbox: Send + Sync {
    fn deliver(&self, event: &FeedbackEvent) -> Result<(), String>;
}
