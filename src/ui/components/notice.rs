use dioxus::prelude::*;

use crate::ui::state::app_state::Notice;
use crate::ui::style::notice_style;

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { style: "padding: 0 32px 12px 32px;",
            div { style: "{notice_style(notice.level)}",
                span { "{notice.message}" }
                button {
                    style: "border: none; background: transparent; cursor: pointer; color: inherit;",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
