use dioxus::prelude::*;

use crate::domain::entities::settings::Theme;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::{AppServices, Notice};
use crate::ui::style::palette;
use crate::usecase::services::feedback_service::{FeedbackService, SUBSCRIPTION_KIND};

fn submit(
    feedback: &FeedbackService,
    mut email: Signal<String>,
    mut notice: Signal<Option<Notice>>,
) {
    let result = run_blocking(|| feedback.subscribe_email(&email(), SUBSCRIPTION_KIND));
    if result.is_ok() {
        email.set(String::new());
    }
    notice.set(Some(Notice::from_result(result)));
}

#[component]
pub fn EmailBar() -> Element {
    let services = use_context::<AppServices>();
    let theme = use_context::<Signal<Theme>>();
    let notice = use_context::<Signal<Option<Notice>>>();
    let mut email = use_signal(String::new);
    let p = palette(theme());
    let feedback_for_key = services.feedback.clone();
    let feedback_for_click = services.feedback.clone();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; padding: 12px 32px; background: {p.accent};",
            span { "Get notified when this document changes" }
            input {
                r#type: "email",
                placeholder: "name@example.com",
                value: "{email}",
                style: "flex: 1; max-width: 320px; padding: 6px 10px; border: 1px solid {p.border}; border-radius: 6px;",
                oninput: move |event| email.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        submit(&feedback_for_key, email, notice);
                    }
                },
            }
            button {
                style: "border: 1px solid {p.border}; border-radius: 6px; padding: 6px 14px; cursor: pointer; background: {p.surface}; color: {p.text};",
                onclick: move |_| submit(&feedback_for_click, email, notice),
                "Subscribe"
            }
        }
    }
}
