use dioxus::prelude::*;

use crate::domain::entities::settings::Theme;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::{AppServices, Notice};
use crate::ui::style::{modal_backdrop_style, modal_panel_style, palette};

/// Requirement picker entry: (key, title).
pub type RequirementChoice = (String, String);

#[component]
pub fn RequestUpdateDialog(requirements: Vec<RequirementChoice>, on_close: EventHandler<()>) -> Element {
    let services = use_context::<AppServices>();
    let theme = use_context::<Signal<Theme>>();
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let mut requirement_key = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
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
                h3 { style: "margin-top: 0;", "Request an update" }
                div { style: "display: flex; flex-direction: column; gap: 10px;",
                    label { "Requirement" }
                    select {
                        style: "{field_style}",
                        value: "{requirement_key}",
                        onchange: move |event| requirement_key.set(event.value()),
                        option { value: "", "General" }
                        {requirements.iter().map(|(key, title)| {
                            let key = key.clone();
                            let title = title.clone();
                            rsx!(
                                option { value: "{key}", "{title}" }
                            )
                        })}
                    }
                    label { "Email" }
                    input {
                        style: "{field_style}",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                    label { "Message" }
                    textarea {
                        style: "{field_style} min-height: 96px;",
                        value: "{message}",
                        oninput: move |event| message.set(event.value()),
                    }
                    if let Some(err) = error() {
                        div { style: "color: #b91c1c; font-size: 13px;", "{err}" }
                    }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 14px;",
                    button { onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        onclick: move |_| {
                            let key = requirement_key();
                            let result = run_blocking(|| {
                                services.feedback.request_update(Some(key.as_str()), &email(), &message())
                            });
                            match result {
                                Ok(confirmation) => {
                                    notice.set(Some(Notice::success(confirmation)));
                                    on_close.call(());
                                }
                                Err(err) => error.set(Some(err.to_string())),
                            }
                        },
                        "Send"
                    }
                }
            }
        }
    }
}
