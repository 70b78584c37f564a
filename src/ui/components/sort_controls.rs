use dioxus::prelude::*;

use crate::domain::entities::board::{SortDirection, SortKey, SortState, StatusFilter};
use crate::domain::entities::settings::Theme;
use crate::ui::style::palette;

pub const ALL_STATUSES_VALUE: &str = "__all__";

pub fn status_filter_from_value(value: &str) -> StatusFilter {
    if value == ALL_STATUSES_VALUE {
        StatusFilter::All
    } else {
        StatusFilter::Status(value.to_string())
    }
}

pub fn status_filter_value(filter: &StatusFilter) -> String {
    match filter {
        StatusFilter::All => ALL_STATUSES_VALUE.to_string(),
        StatusFilter::Status(status) => status.clone(),
    }
}

/// Arrow shown next to the active sort button; inactive buttons show none.
pub fn sort_indicator(sort: SortState, key: SortKey) -> &'static str {
    if sort.key != key {
        return "";
    }
    match sort.direction {
        SortDirection::Asc => " ↑",
        SortDirection::Desc => " ↓",
    }
}

#[component]
pub fn SortControls(
    sort: SortState,
    filter: StatusFilter,
    statuses: Vec<String>,
    on_sort: EventHandler<SortKey>,
    on_filter: EventHandler<StatusFilter>,
    on_request_update: EventHandler<()>,
) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let p = palette(theme());
    let selected = status_filter_value(&filter);
    let button_style = |active: bool| {
        let background = if active { p.accent } else { p.surface };
        format!(
            "border: 1px solid {}; border-radius: 6px; padding: 4px 12px; cursor: pointer; color: {}; background: {background};",
            p.border, p.text
        )
    };
    let priority_style = button_style(sort.key == SortKey::Priority);
    let deadline_style = button_style(sort.key == SortKey::Deadline);
    let request_style = button_style(false);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; padding: 0 32px 16px 32px; flex-wrap: wrap;",
            span { style: "font-size: 13px; color: {p.muted};", "Sort by" }
            button {
                style: "{priority_style}",
                onclick: move |_| on_sort.call(SortKey::Priority),
                "{SortKey::Priority.label()}{sort_indicator(sort, SortKey::Priority)}"
            }
            button {
                style: "{deadline_style}",
                onclick: move |_| on_sort.call(SortKey::Deadline),
                "{SortKey::Deadline.label()}{sort_indicator(sort, SortKey::Deadline)}"
            }
            span { style: "font-size: 13px; color: {p.muted}; margin-left: 12px;", "Status" }
            select {
                value: "{selected}",
                onchange: move |event| on_filter.call(status_filter_from_value(&event.value())),
                option { value: "{ALL_STATUSES_VALUE}", selected: selected == ALL_STATUSES_VALUE, "All" }
                {statuses.iter().map(|status| {
                    let is_selected = *status == selected;
                    rsx!(
                        option { value: "{status}", selected: is_selected, "{status}" }
                    )
                })}
            }
            button {
                style: "{request_style} margin-left: auto;",
                onclick: move |_| on_request_update.call(()),
                "Request Update"
            }
        }
    }
}
