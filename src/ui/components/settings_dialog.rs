use dioxus::prelude::*;

use crate::domain::entities::settings::{SheetFormat, Theme};
use crate::infra::source::published::export_url;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::{AppServices, Notice};
use crate::ui::style::{modal_backdrop_style, modal_panel_style, palette};
use crate::usecase::ports::sheet_source::SourceChoice;

/// Edits the published sheet URL and export format, then points the board at it.
#[component]
pub fn SettingsDialog(
    url: String,
    format: SheetFormat,
    mut source: Signal<SourceChoice>,
    on_close: EventHandler<()>,
) -> Element {
    let services = use_context::<AppServices>();
    let theme = use_context::<Signal<Theme>>();
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let mut draft_url = use_signal(move || url);
    let mut draft_format = use_signal(move || format);
    let mut error = use_signal(|| None::<String>);
    let p = palette(theme());
    let field_style = format!(
        "width: 100%; box-sizing: border-box; padding: 6px 10px; border: 1px solid {}; border-radius: 6px;",
        p.border
    );

    rsx! {
        div {
            style: "{modal_backdrop_style()}",
            onclick: move |_| on_close.call(()),
            div {
                style: "{modal_panel_style(theme())}",
                onclick: move |event| event.stop_propagation(),
                h3 { style: "margin-top: 0;", "Sheet source" }
                div { style: "display: flex; flex-direction: column; gap: 10px;",
                    label { "Published URL" }
                    input {
                        style: "{field_style}",
                        value: "{draft_url}",
                        oninput: move |event| draft_url.set(event.value()),
                    }
                    label { "Export format" }
                    select {
                        style: "{field_style}",
                        value: "{draft_format().as_str()}",
                        onchange: move |event| {
                            if let Some(parsed) = SheetFormat::parse(&event.value()) {
                                draft_format.set(parsed);
                            }
                        },
                        option { value: "csv", selected: draft_format() == SheetFormat::Csv, "CSV" }
                        option { value: "xlsx", selected: draft_format() == SheetFormat::Xlsx, "XLSX" }
                    }
                    if let Some(err) = error() {
                        div { style: "color: #b91c1c; font-size: 13px;", "{err}" }
                    }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 14px;",
                    button { onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        onclick: move |_| {
                            let format = draft_format();
                            let url = export_url(draft_url().trim(), format);
                            if url.is_empty() {
                                error.set(Some("Enter the published sheet URL.".to_string()));
                                return;
                            }
                            let saved = run_blocking(|| services.settings.set_sheet_source(&url, format));
                            if let Err(err) = saved {
                                error.set(Some(err.to_string()));
                                return;
                            }
                            source.set(SourceChoice::Published { url, format });
                            notice.set(Some(Notice::success("Sheet source saved.")));
                            on_close.call(());
                        },
                        "Save"
                    }
                }
            }
        }
    }
}
