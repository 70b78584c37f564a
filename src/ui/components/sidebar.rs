use dioxus::prelude::*;

use crate::domain::entities::settings::Theme;
use crate::ui::style::{sidebar_button_style, sidebar_style};

#[component]
pub fn Sidebar(
    theme: Theme,
    email_bar_visible: bool,
    on_theme: EventHandler<Theme>,
    on_toggle_email_bar: EventHandler<()>,
    on_document: EventHandler<()>,
    on_reload: EventHandler<()>,
    on_open_file: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            style: "{sidebar_style(theme)}",
            button {
                title: "Light theme",
                style: "{sidebar_button_style(theme, theme == Theme::Light)}",
                onclick: move |_| on_theme.call(Theme::Light),
                "☀"
            }
            button {
                title: "Dark theme",
                style: "{sidebar_button_style(theme, theme == Theme::Dark)}",
                onclick: move |_| on_theme.call(Theme::Dark),
                "☾"
            }
            button {
                title: "Published document",
                style: "{sidebar_button_style(theme, false)}",
                onclick: move |_| on_document.call(()),
                "📄"
            }
            button {
                title: "Open a CSV or XLSX export",
                style: "{sidebar_button_style(theme, false)}",
                onclick: move |_| on_open_file.call(()),
                "📂"
            }
            button {
                title: "Document updates by email",
                style: "{sidebar_button_style(theme, email_bar_visible)}",
                onclick: move |_| on_toggle_email_bar.call(()),
                "✉"
            }
            div { style: "margin-top: auto; display: flex; flex-direction: column; gap: 20px;",
                button {
                    title: "Reload sheet",
                    style: "{sidebar_button_style(theme, false)}",
                    onclick: move |_| on_reload.call(()),
                    "⟳"
                }
                button {
                    title: "Settings",
                    style: "{sidebar_button_style(theme, false)}",
                    onclick: move |_| on_settings.call(()),
                    "⚙"
                }
            }
        }
    }
}
