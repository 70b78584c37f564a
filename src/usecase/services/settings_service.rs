use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::settings::{Settings, SheetFormat, Theme};
use crate::usecase::ports::repo::{RepoError, SettingsRepository};

pub const THEME_KEY: &str = "theme";
pub const SHEET_URL_KEY: &str = "sheet_url";
pub const SHEET_FORMAT_KEY: &str = "sheet_format";

/// Read/write boundary for reader preferences persisted across launches.
#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), RepoError> {
        self.repo.init()
    }

    /// Stored values over defaults; unreadable values fall back to the default.
    pub fn load(&self) -> Result<Settings, RepoError> {
        let stored = self.repo.load_settings()?;
        let mut settings = Settings::default();

        if let Some(raw) = stored.get(THEME_KEY) {
            match Theme::parse(raw) {
                Some(theme) => settings.theme = theme,
                None => warn!(value = %raw, "ignoring unknown stored theme"),
            }
        }
        if let Some(url) = stored.get(SHEET_URL_KEY).filter(|url| !url.trim().is_empty()) {
            settings.sheet_url = url.trim().to_string();
        }
        if let Some(raw) = stored.get(SHEET_FORMAT_KEY) {
            match SheetFormat::parse(raw) {
                Some(format) => settings.sheet_format = format,
                None => warn!(value = %raw, "ignoring unknown stored sheet format"),
            }
        }

        Ok(settings)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), RepoError> {
        debug!(theme = theme.as_str(), "saving theme");
        self.repo.upsert_setting(THEME_KEY, theme.as_str())
    }

    pub fn set_sheet_source(&self, url: &str, format: SheetFormat) -> Result<(), RepoError> {
        debug!(%url, format = format.as_str(), "saving sheet source");
        self.repo.upsert_setting(SHEET_URL_KEY, url.trim())?;
        self.repo.upsert_setting(SHEET_FORMAT_KEY, format.as_str())
    }
}
