use std::path::PathBuf;

use chrono::Local;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::{info, warn};

use crate::config::{apply_env_overrides, default_db_path, APP_TITLE, DOCUMENT_HEADING, DOCUMENT_SUMMARY};
use crate::domain::entities::board::LoadState;
use crate::domain::entities::settings::{Settings, Theme};
use crate::platform::desktop::blocking::{run_blocking, run_off_ui_thread};
use crate::ui::components::email_bar::EmailBar;
use crate::ui::components::header::Header;
use crate::ui::components::notice::NoticeBanner;
use crate::ui::components::request_dialog::{RequestUpdateDialog, RequirementChoice};
use crate::ui::components::requirement_card::RequirementCard;
use crate::ui::components::settings_dialog::SettingsDialog;
use crate::ui::components::sidebar::Sidebar;
use crate::ui::components::sort_controls::SortControls;
use crate::ui::state::app_state::{published_source, AppServices, AppState, Notice};
use crate::ui::style::{content_column_style, palette, root_container_style};
use crate::usecase::ports::sheet_source::SourceChoice;
use crate::usecase::services::board_service::{build_views, resolve_version, status_options, visible_views};
use crate::usecase::services::feedback_service::APPROVAL_KIND;
use crate::usecase::services::sheet_service::SheetService;

#[component]
pub fn App() -> Element {
    let db_path = match default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve the settings location: {err}" }
                }
            };
        }
    };

    rsx! {
        Dashboard { db_path }
    }
}

fn initial_settings(services: &AppServices) -> Settings {
    let stored = services
        .settings
        .init()
        .and_then(|_| services.settings.load())
        .unwrap_or_else(|err| {
            warn!(error = %err, "using default settings");
            Settings::default()
        });
    apply_env_overrides(stored, |key| std::env::var(key).ok())
}

#[component]
fn Dashboard(db_path: PathBuf) -> Element {
    let services = use_hook(|| AppServices::new(db_path.clone()));
    let settings = use_hook(|| initial_settings(&services));

    let AppState {
        mut source,
        mut reload_tick,
        mut selected_version,
        mut sort_state,
        mut status_filter,
        mut theme,
        mut show_email_bar,
        mut show_request_dialog,
        mut show_settings,
        mut notice,
    } = AppState::new(&settings);

    use_context_provider(|| services.clone());
    use_context_provider(|| notice);
    use_context_provider(|| theme);

    let snapshot = use_resource(move || {
        let choice = source();
        let tick = reload_tick();
        async move {
            info!(source = %choice.label(), tick, "loading requirements");
            let today = Local::now().date_naive();
            let loaded =
                run_off_ui_thread(move || SheetService::for_choice(&choice).load_snapshot(today)).await;
            match loaded {
                Ok(result) => LoadState::from_result(result),
                Err(err) => LoadState::Failed(format!("{err:#}")),
            }
        }
    });

    let today = Local::now().date_naive();
    let load_state = snapshot.cloned().unwrap_or(LoadState::Loading);
    let picked_version = selected_version();
    let sort = sort_state();
    let filter = status_filter();
    let current_theme = theme();
    let p = palette(current_theme);

    let views = visible_views(&load_state, picked_version.as_deref(), sort, &filter, today);
    let (versions, current_version, last_updated, statuses, choices) = match load_state.snapshot() {
        Some(snap) => {
            let version = resolve_version(snap, picked_version.as_deref());
            let all_views = build_views(snap, version.as_deref(), today);
            let choices: Vec<RequirementChoice> = all_views
                .iter()
                .map(|view| (view.key.clone(), view.title.clone()))
                .collect();
            (
                snap.document_versions.clone(),
                version,
                Some(snap.last_updated_label()),
                status_options(&all_views),
                choices,
            )
        }
        None => (Vec::new(), None, None, Vec::new(), Vec::new()),
    };
    let source_label = source().label();

    let services_for_theme = services.clone();
    let settings_for_document = settings.clone();
    let services_for_approve = services.clone();
    let (settings_url, settings_format) = match source() {
        SourceChoice::Published { url, format } => (url, format),
        SourceChoice::LocalFile(_) => (settings.sheet_url.clone(), settings.sheet_format),
    };

    rsx! {
        div {
            style: "{root_container_style(current_theme)}",
            Sidebar {
                theme: current_theme,
                email_bar_visible: show_email_bar(),
                on_theme: move |next: Theme| {
                    theme.set(next);
                    if let Err(err) = run_blocking(|| services_for_theme.settings.set_theme(next)) {
                        warn!(error = %err, "failed to save theme");
                        notice.set(Some(Notice::error(format!("Could not save theme: {err}"))));
                    }
                },
                on_toggle_email_bar: move |_| show_email_bar.set(!show_email_bar()),
                on_document: move |_| {
                    if matches!(source(), SourceChoice::LocalFile(_)) {
                        selected_version.set(None);
                        source.set(published_source(&settings_for_document));
                    }
                },
                on_reload: move |_| *reload_tick.write() += 1,
                on_open_file: move |_| {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Sheet export", &["csv", "xlsx"])
                        .pick_file()
                    {
                        info!(path = %path.display(), "opening local sheet export");
                        selected_version.set(None);
                        source.set(SourceChoice::LocalFile(path));
                    }
                },
                on_settings: move |_| show_settings.set(true),
            }
            div {
                style: "{content_column_style()}",
                Header {
                    title: APP_TITLE.to_string(),
                    versions,
                    selected_version: current_version.clone(),
                    last_updated,
                    on_version: move |version: String| selected_version.set(Some(version)),
                    on_approve: move |_| {
                        let Some(version) = current_version.clone() else {
                            return;
                        };
                        let confirm = MessageDialog::new()
                            .set_level(MessageLevel::Info)
                            .set_title("Approve document")
                            .set_description(format!("Approve version {version} of this document?"))
                            .set_buttons(MessageButtons::YesNo)
                            .show();
                        if confirm != MessageDialogResult::Yes {
                            return;
                        }
                        let result = run_blocking(|| {
                            services_for_approve.feedback.record_approval(APPROVAL_KIND, &version)
                        });
                        notice.set(Some(Notice::from_result(result)));
                    },
                }
                if show_email_bar() {
                    EmailBar {}
                }
                if let Some(current) = notice() {
                    NoticeBanner {
                        notice: current,
                        on_dismiss: move |_| notice.set(None),
                    }
                }
                section { style: "padding: 0 32px 16px 32px;",
                    h2 { style: "font-weight: 400; margin: 0 0 8px 0;", "{DOCUMENT_HEADING}" }
                    p { style: "margin: 0 0 6px 0; line-height: 1.5;", "{DOCUMENT_SUMMARY}" }
                    span { style: "font-size: 12px; color: {p.muted};", "Source: {source_label}" }
                }
                SortControls {
                    sort,
                    filter,
                    statuses,
                    on_sort: move |key| sort_state.set(sort_state().select(key)),
                    on_filter: move |next| status_filter.set(next),
                    on_request_update: move |_| show_request_dialog.set(true),
                }
                div { style: "display: flex; flex-direction: column; gap: 12px; padding: 0 32px 32px 32px;",
                    {match load_state {
                        LoadState::Loading => rsx! {
                            p { style: "color: {p.muted};", "Loading requirements..." }
                        },
                        LoadState::Failed(err) => rsx! {
                            div {
                                p { style: "font-weight: 600;", "Failed to load requirements" }
                                p { style: "font-size: 13px; color: {p.muted};", "{err}" }
                            }
                        },
                        LoadState::Ready(_) if views.is_empty() => rsx! {
                            p { style: "color: {p.muted};", "No requirements match the current filters." }
                        },
                        LoadState::Ready(_) => rsx! {
                            for view in views {
                                RequirementCard { key: "{view.key}", view: view.clone() }
                            }
                        },
                    }}
                }
            }
            if show_request_dialog() {
                RequestUpdateDialog {
                    requirements: choices,
                    on_close: move |_| show_request_dialog.set(false),
                }
            }
            if show_settings() {
                SettingsDialog {
                    url: settings_url,
                    format: settings_format,
                    source,
                    on_close: move |_| show_settings.set(false),
                }
            }
        }
    }
}
