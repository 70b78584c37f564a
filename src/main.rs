use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod board;
        pub mod settings;
        pub mod sheet;
    }
    pub mod rules {
        pub mod deadline;
        pub mod deliverable;
        pub mod email;
        pub mod numbering;
    }
}

mod infra {
    pub mod import {
        pub mod csv;
        pub mod xlsx;
    }
    pub mod outbox {
        pub mod log;
    }
    pub mod source {
        pub mod local_file;
        pub mod published;
    }
    pub mod sqlite {
        pub mod queries;
        pub mod repo;
        pub mod schema;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
    }
}

mod ui {
    pub mod components {
        pub mod email_bar;
        pub mod header;
        pub mod notice;
        pub mod request_dialog;
        pub mod requirement_card;
        pub mod settings_dialog;
        pub mod sidebar;
        pub mod sort_controls;
    }
    pub mod state {
        pub mod app_state;
    }
    pub mod style;
}

mod usecase {
    pub mod ports {
        pub mod outbox;
        pub mod repo;
        pub mod sheet_source;
    }
    pub mod services {
        pub mod board_service;
        pub mod feedback_service;
        pub mod settings_service;
        pub mod sheet_service;
    }
}

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::{default_webview_data_dir, APP_TITLE};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_logging();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    info!(dir = %webview_data_dir.display(), "starting dashboard");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(APP_TITLE))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}
