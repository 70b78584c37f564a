use dioxus::prelude::*;

use crate::domain::entities::settings::Theme;
use crate::ui::style::palette;

#[component]
pub fn Header(
    title: String,
    versions: Vec<String>,
    selected_version: Option<String>,
    last_updated: Option<String>,
    on_version: EventHandler<String>,
    on_approve: EventHandler<()>,
) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let p = palette(theme());
    let can_approve = selected_version.is_some();
    let selected = selected_version.clone().unwrap_or_default();

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 24px 32px; gap: 16px;",
            div {
                h1 { style: "font-size: 32px; font-weight: 300; margin: 0;", "{title}" }
                if let Some(date) = last_updated {
                    span { style: "font-size: 13px; color: {p.muted};", "Last updated {date}" }
                }
            }
            div { style: "display: flex; align-items: center; gap: 12px;",
                if !versions.is_empty() {
                    label { style: "font-size: 13px; color: {p.muted};", "Version " }
                    select {
                        value: "{selected}",
                        onchange: move |event| on_version.call(event.value()),
                        {versions.iter().map(|version| {
                            let is_selected = *version == selected;
                            rsx!(
                                option { value: "{version}", selected: is_selected, "{version}" }
                            )
                        })}
                    }
                }
                button {
                    disabled: !can_approve,
                    style: "border: 1px solid {p.border}; border-radius: 999px; padding: 8px 20px; background: {p.surface}; color: {p.text}; cursor: pointer;",
                    onclick: move |_| on_approve.call(()),
                    "Approve Document"
                }
            }
        }
    }
}
