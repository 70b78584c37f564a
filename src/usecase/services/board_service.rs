use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::entities::board::{
    LoadState, Priority, RequirementView, SortDirection, SortKey, SortState, StatusFilter,
};
use crate::domain::entities::sheet::SheetSnapshot;
use crate::domain::rules::deadline::deadline_days;
use crate::domain::rules::numbering::number_content_lines;

/// The version shown when the reader has not picked one: the newest one introduced.
pub fn default_version(snapshot: &SheetSnapshot) -> Option<String> {
    snapshot.document_versions.last().cloned()
}

/// Keeps a reader's version choice while the snapshot still offers it.
pub fn resolve_version(snapshot: &SheetSnapshot, selected: Option<&str>) -> Option<String> {
    selected
        .filter(|version| snapshot.document_versions.iter().any(|v| v == version))
        .map(|version| version.to_string())
        .or_else(|| default_version(snapshot))
}

fn group_by_key<'a, T, F>(items: &'a [T], key_of: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut grouped: HashMap<&str, Vec<&T>> = HashMap::new();
    for item in items {
        grouped.entry(key_of(item)).or_default().push(item);
    }
    grouped
}

/// Joins the four collections into one view per displayed requirement.
///
/// Rows only ever attach to the entry with an identical key. `version` of
/// `None` keeps every version.
pub fn build_views(
    snapshot: &SheetSnapshot,
    version: Option<&str>,
    today: NaiveDate,
) -> Vec<RequirementView> {
    let contents = group_by_key(&snapshot.contents, |c| c.key.as_str());
    let stakeholders = group_by_key(&snapshot.stakeholders, |s| s.key.as_str());
    let links = group_by_key(&snapshot.links, |l| l.key.as_str());

    snapshot
        .requirements
        .iter()
        .filter(|entry| entry.display)
        .filter(|entry| version.map_or(true, |v| entry.document_version == v))
        .map(|entry| {
            let key = entry.key.as_str();
            let deliverables = contents
                .get(key)
                .map(|lines| number_content_lines(lines.iter().copied()))
                .unwrap_or_default();
            let names = stakeholders
                .get(key)
                .map(|rows| {
                    rows.iter()
                        .filter(|s| !s.name.is_empty())
                        .map(|s| s.name.clone())
                        .collect()
                })
                .unwrap_or_default();
            let quick_links = links
                .get(key)
                .map(|rows| {
                    rows.iter()
                        .filter(|l| !l.text.is_empty() || !l.url.is_empty())
                        .map(|l| (*l).clone())
                        .collect()
                })
                .unwrap_or_default();

            RequirementView {
                key: entry.key.clone(),
                title: entry.title.clone(),
                subtitle: entry.subtitle.clone(),
                document_version: entry.document_version.clone(),
                status: entry.status.clone(),
                priority: Priority::from_label(&entry.status),
                review_by: entry.review_by.clone(),
                note: entry.note.clone(),
                deliverables,
                stakeholders: names,
                links: quick_links,
                deadline_days: deadline_days(&entry.review_by, today),
            }
        })
        .collect()
}

fn title_order(a: &RequirementView, b: &RequirementView) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

/// Filters by status, then sorts. Title ties always break ascending.
pub fn arrange_views(
    views: &[RequirementView],
    sort: SortState,
    filter: &StatusFilter,
) -> Vec<RequirementView> {
    let mut arranged: Vec<RequirementView> = views
        .iter()
        .filter(|view| filter.matches(&view.status))
        .cloned()
        .collect();

    arranged.sort_by(|a, b| {
        let primary = match sort.key {
            SortKey::Priority => a.priority.importance().cmp(&b.priority.importance()),
            SortKey::Deadline => a.deadline_days.cmp(&b.deadline_days),
        };
        let primary = match sort.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| title_order(a, b))
    });

    arranged
}

/// Distinct status labels in first-appearance order.
pub fn status_options(views: &[RequirementView]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for view in views {
        if !view.status.is_empty() && !options.contains(&view.status) {
            options.push(view.status.clone());
        }
    }
    options
}

/// Cards the board shows right now; none unless the fetch succeeded.
pub fn visible_views(
    state: &LoadState,
    version: Option<&str>,
    sort: SortState,
    filter: &StatusFilter,
    today: NaiveDate,
) -> Vec<RequirementView> {
    match state.snapshot() {
        Some(snapshot) => {
            let version = resolve_version(snapshot, version);
            let views = build_views(snapshot, version.as_deref(), today);
            arrange_views(&views, sort, filter)
        }
        None => Vec::new(),
    }
}
