use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::rules::deadline::parse_review_date;

/// Discriminant carried in column 0 of every flat sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTag {
    /// A requirement row; the tag itself is the `Display?` flag.
    Requirement { display: bool },
    Content,
    Stakeholder,
    Link,
}

impl RowTag {
    pub const ACCEPTED: &'static str = "true, false, content, stakeholder, link";

    /// Matches the whole trimmed cell, ignoring case. Prefixes and suffixes
    /// such as `content-2` are not tags and fail the load.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(RowTag::Requirement { display: true }),
            "false" => Some(RowTag::Requirement { display: false }),
            "content" => Some(RowTag::Content),
            "stakeholder" => Some(RowTag::Stakeholder),
            "link" => Some(RowTag::Link),
            _ => None,
        }
    }
}

/// One parsed record from a CSV export or a workbook tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line (CSV) or row (workbook) number in the source.
    pub line: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    /// Trimmed cell value, empty when the row is shorter than `idx`.
    pub fn cell(&self, idx: usize) -> String {
        self.cells
            .get(idx)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|value| value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEntry {
    pub display: bool,
    pub document_version: String,
    pub title: String,
    pub key: String,
    pub subtitle: String,
    pub status: String,
    pub review_by: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub key: String,
    pub topic: String,
    pub bullet: String,
    pub sub_bullet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stakeholder {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub key: String,
    pub text: String,
    pub url: String,
}

/// Everything one fetch of the sheet produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSnapshot {
    pub requirements: Vec<RequirementEntry>,
    pub contents: Vec<ContentLine>,
    pub stakeholders: Vec<Stakeholder>,
    pub links: Vec<QuickLink>,
    /// Distinct document versions in first-appearance order.
    pub document_versions: Vec<String>,
    pub last_updated: NaiveDate,
}

impl SheetSnapshot {
    pub fn last_updated_label(&self) -> String {
        self.last_updated.format("%b %-d, %Y").to_string()
    }

    /// Rows whose key matches no requirement entry. They never surface.
    pub fn orphaned_row_count(&self) -> usize {
        let keys: HashSet<&str> = self
            .requirements
            .iter()
            .map(|entry| entry.key.as_str())
            .collect();
        let orphaned = |key: &str| !keys.contains(key);

        self.contents.iter().filter(|c| orphaned(&c.key)).count()
            + self.stakeholders.iter().filter(|s| orphaned(&s.key)).count()
            + self.links.iter().filter(|l| orphaned(&l.key)).count()
    }
}

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    requirements: Vec<RequirementEntry>,
    contents: Vec<ContentLine>,
    stakeholders: Vec<Stakeholder>,
    links: Vec<QuickLink>,
    document_versions: Vec<String>,
    latest_review: Option<NaiveDate>,
}

impl SnapshotBuilder {
    pub fn push_requirement(&mut self, entry: RequirementEntry) {
        if !entry.document_version.is_empty()
            && !self.document_versions.contains(&entry.document_version)
        {
            self.document_versions.push(entry.document_version.clone());
        }
        if let Some(date) = parse_review_date(&entry.review_by) {
            self.latest_review = Some(match self.latest_review {
                Some(current) if current >= date => current,
                _ => date,
            });
        }
        self.requirements.push(entry);
    }

    pub fn push_content(&mut self, line: ContentLine) {
        self.contents.push(line);
    }

    pub fn push_stakeholder(&mut self, stakeholder: Stakeholder) {
        self.stakeholders.push(stakeholder);
    }

    pub fn push_link(&mut self, link: QuickLink) {
        self.links.push(link);
    }

    pub fn finish(self, today: NaiveDate) -> SheetSnapshot {
        SheetSnapshot {
            requirements: self.requirements,
            contents: self.contents,
            stakeholders: self.stakeholders,
            links: self.links,
            document_versions: self.document_versions,
            last_updated: self.latest_review.unwrap_or(today),
        }
    }
}
