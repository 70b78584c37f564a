use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::board::{SortState, StatusFilter};
use crate::domain::entities::settings::{Settings, Theme};
use crate::infra::outbox::log::LogOutbox;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::usecase::ports::sheet_source::SourceChoice;
use crate::usecase::services::feedback_service::{FeedbackError, FeedbackService};
use crate::usecase::services::settings_service::SettingsService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A dismissible confirmation or error shown above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn from_result(result: Result<String, FeedbackError>) -> Self {
        match result {
            Ok(message) => Notice::success(message),
            Err(err) => Notice::error(err.to_string()),
        }
    }
}

/// Services shared with components through context.
#[derive(Clone)]
pub struct AppServices {
    pub settings: SettingsService,
    pub feedback: FeedbackService,
}

impl AppServices {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            settings: SettingsService::new(Arc::new(SqliteRepo { db_path })),
            feedback: FeedbackService::new(Arc::new(LogOutbox)),
        }
    }
}

pub fn published_source(settings: &Settings) -> SourceChoice {
    SourceChoice::Published {
        url: settings.sheet_url.clone(),
        format: settings.sheet_format,
    }
}

pub struct AppState {
    pub source: Signal<SourceChoice>,
    pub reload_tick: Signal<u64>,
    pub selected_version: Signal<Option<String>>,
    pub sort_state: Signal<SortState>,
    pub status_filter: Signal<StatusFilter>,
    pub theme: Signal<Theme>,
    pub show_email_bar: Signal<bool>,
    pub show_request_dialog: Signal<bool>,
    pub show_settings: Signal<bool>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let initial_source = published_source(settings);
        let initial_theme = settings.theme;
        Self {
            source: use_signal(move || initial_source),
            reload_tick: use_signal(|| 0_u64),
            selected_version: use_signal(|| None::<String>),
            sort_state: use_signal(SortState::default),
            status_filter: use_signal(StatusFilter::default),
            theme: use_signal(move || initial_theme),
            show_email_bar: use_signal(|| false),
            show_request_dialog: use_signal(|| false),
            show_settings: use_signal(|| false),
            notice: use_signal(|| None::<Notice>),
        }
    }
}
