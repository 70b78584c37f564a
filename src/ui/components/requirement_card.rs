use dioxus::prelude::*;

use crate::domain::entities::board::RequirementView;
use crate::domain::entities::settings::Theme;
use crate::domain::rules::deliverable::classify_deliverable;
use crate::ui::style::{card_style, deliverable_line_style, palette, priority_badge_style};

/// One requirement; collapsed to title and badge until clicked.
#[component]
pub fn RequirementCard(view: RequirementView) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let mut open = use_signal(|| false);
    let p = palette(theme());
    let is_open = open();
    let chevron = if is_open { "▾" } else { "▸" };
    let lines: Vec<_> = view
        .deliverables
        .iter()
        .map(|raw| classify_deliverable(raw))
        .collect();
    let stakeholders = view.stakeholders.join(", ");

    rsx! {
        div {
            style: "{card_style(theme(), is_open)}",
            div {
                style: "display: flex; align-items: center; gap: 12px; cursor: pointer;",
                onclick: move |_| open.set(!open()),
                span { style: "color: {p.muted};", "{chevron}" }
                div { style: "flex: 1; min-width: 0;",
                    div { style: "font-size: 16px; font-weight: 600;", "{view.title}" }
                    if !view.subtitle.is_empty() {
                        div { style: "font-size: 13px; color: {p.muted};", "{view.subtitle}" }
                    }
                }
                span { style: "{priority_badge_style(view.priority)}", "{view.status}" }
            }
            if is_open {
                div { style: "margin-top: 12px; display: flex; flex-direction: column; gap: 10px;",
                    if !view.review_by.is_empty() {
                        div { style: "font-size: 13px; color: {p.muted};", "Review by: {view.review_by}" }
                    }
                    if !lines.is_empty() {
                        div {
                            h4 { style: "margin: 0 0 6px 0;", "Deliverables" }
                            {lines.iter().map(|line| {
                                let style = deliverable_line_style(line.tier);
                                let number = line.number.clone().unwrap_or_default();
                                let text = line.text.clone();
                                rsx!(
                                    div { style: "{style}",
                                        if !number.is_empty() {
                                            span { style: "color: {p.muted}; margin-right: 6px;", "{number}" }
                                        }
                                        "{text}"
                                    }
                                )
                            })}
                        }
                    }
                    if !stakeholders.is_empty() {
                        div {
                            h4 { style: "margin: 0 0 6px 0;", "Sign-off" }
                            span { "{stakeholders}" }
                        }
                    }
                    if !view.links.is_empty() {
                        div {
                            h4 { style: "margin: 0 0 6px 0;", "Quick links" }
                            ul { style: "margin: 0; padding-left: 18px;",
                                {view.links.iter().map(|link| {
                                    let label = if link.text.is_empty() { link.url.clone() } else { link.text.clone() };
                                    let url = link.url.clone();
                                    rsx!(
                                        li { a { href: "{url}", target: "_blank", "{label}" } }
                                    )
                                })}
                            }
                        }
                    }
                    if !view.note.is_empty() {
                        div { style: "font-size: 13px; color: {p.muted}; border-left: 3px solid {p.border}; padding-left: 8px;",
                            "{view.note}"
                        }
                    }
                }
            }
        }
    }
}
