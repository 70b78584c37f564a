use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
}

/// Key/value store behind the settings service.
pub trait SettingsRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn load_settings(&self) -> Result<BTreeMap<String, String>, RepoError>;
    fn upsert_setting(&self, key: &str, value: &str) -> Result<(), RepoError>;
}
