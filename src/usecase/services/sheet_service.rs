use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::entities::sheet::{
    ContentLine, QuickLink, RawRow, RequirementEntry, RowTag, SheetSnapshot, SnapshotBuilder,
    Stakeholder,
};
use crate::infra::import::csv::read_csv_rows;
use crate::infra::import::xlsx::read_workbook_tabs;
use crate::infra::source::local_file::LocalSheetFile;
use crate::infra::source::published::PublishedSheet;
use crate::usecase::ports::sheet_source::{
    SheetError, SheetPayload, SheetSource, SourceChoice, WorkbookTabs,
};

pub const REQUIREMENTS_TAB: &str = "Requirements Dropdown";
pub const CONTENT_TAB: &str = "Requirements Content";
pub const STAKEHOLDERS_TAB: &str = "Sign-Off Stakeholders";
pub const LINKS_TAB: &str = "Quick Links";

pub struct SheetService {
    source: Arc<dyn SheetSource>,
}

impl SheetService {
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        Self { source }
    }

    pub fn for_choice(choice: &SourceChoice) -> Self {
        let source: Arc<dyn SheetSource> = match choice {
            SourceChoice::Published { url, format } => Arc::new(PublishedSheet::new(url.clone(), *format)),
            SourceChoice::LocalFile(path) => Arc::new(LocalSheetFile::new(path.clone())),
        };
        Self::new(source)
    }

    /// Downloads and parses the whole sheet. Nothing is cached between calls.
    pub fn load_snapshot(&self, today: NaiveDate) -> Result<SheetSnapshot, SheetError> {
        let origin = self.source.describe();
        info!(%origin, "fetching sheet");

        let snapshot = self
            .source
            .fetch()
            .and_then(|payload| parse_payload(payload, today));

        match &snapshot {
            Ok(snapshot) => {
                info!(
                    %origin,
                    requirements = snapshot.requirements.len(),
                    contents = snapshot.contents.len(),
                    stakeholders = snapshot.stakeholders.len(),
                    links = snapshot.links.len(),
                    versions = snapshot.document_versions.len(),
                    "parsed sheet snapshot"
                );
                let orphaned = snapshot.orphaned_row_count();
                if orphaned > 0 {
                    debug!(orphaned, "rows without a matching requirement key are dropped");
                }
            }
            Err(err) => warn!(%origin, error = %err, "failed to load sheet"),
        }

        snapshot
    }
}

pub fn parse_payload(payload: SheetPayload, today: NaiveDate) -> Result<SheetSnapshot, SheetError> {
    match payload {
        SheetPayload::Csv(text) => {
            let rows = read_csv_rows(&text).map_err(|err| SheetError::Csv(format!("{err:#}")))?;
            snapshot_from_rows(&rows, today)
        }
        SheetPayload::Xlsx(bytes) => {
            let tabs =
                read_workbook_tabs(bytes).map_err(|err| SheetError::Workbook(format!("{err:#}")))?;
            snapshot_from_tabs(&tabs, today)
        }
    }
}

fn requirement_from_cells(display: bool, row: &RawRow, offset: usize) -> RequirementEntry {
    RequirementEntry {
        display,
        document_version: row.cell(offset),
        title: row.cell(offset + 1),
        key: row.cell(offset + 2),
        subtitle: row.cell(offset + 3),
        status: row.cell(offset + 4),
        review_by: row.cell(offset + 5),
        note: row.cell(offset + 6),
    }
}

fn content_from_cells(row: &RawRow, offset: usize) -> ContentLine {
    ContentLine {
        key: row.cell(offset),
        topic: row.cell(offset + 1),
        bullet: row.cell(offset + 2),
        sub_bullet: row.cell(offset + 3),
    }
}

fn stakeholder_from_cells(row: &RawRow, offset: usize) -> Stakeholder {
    Stakeholder {
        key: row.cell(offset),
        name: row.cell(offset + 1),
    }
}

fn link_from_cells(row: &RawRow, offset: usize) -> QuickLink {
    QuickLink {
        key: row.cell(offset),
        text: row.cell(offset + 1),
        url: row.cell(offset + 2),
    }
}

/// Builds a snapshot from the flat single-tab layout where column 0 tags each row.
///
/// The first row is the header. Blank rows are skipped; the first row with an
/// empty tag but other content ends the data section.
pub fn snapshot_from_rows(rows: &[RawRow], today: NaiveDate) -> Result<SheetSnapshot, SheetError> {
    let mut builder = SnapshotBuilder::default();

    for row in rows.iter().skip(1) {
        if row.is_blank() {
            continue;
        }
        let raw_tag = row.cell(0);
        if raw_tag.is_empty() {
            break;
        }
        let tag = RowTag::parse(&raw_tag).ok_or_else(|| SheetError::UnknownRowTag {
            line: row.line,
            tag: raw_tag.clone(),
        })?;

        match tag {
            RowTag::Requirement { display } => {
                builder.push_requirement(requirement_from_cells(display, row, 1))
            }
            RowTag::Content => builder.push_content(content_from_cells(row, 1)),
            RowTag::Stakeholder => builder.push_stakeholder(stakeholder_from_cells(row, 1)),
            RowTag::Link => builder.push_link(link_from_cells(row, 1)),
        }
    }

    Ok(builder.finish(today))
}

fn data_rows<'a>(tabs: &'a WorkbookTabs, tab: &str) -> Result<impl Iterator<Item = &'a RawRow>, SheetError> {
    let rows = tabs
        .get(tab)
        .ok_or_else(|| SheetError::MissingTab(tab.to_string()))?;
    Ok(rows.iter().skip(1).filter(|row| !row.is_blank()))
}

/// Builds a snapshot from the four named workbook tabs, each with a header row.
pub fn snapshot_from_tabs(tabs: &WorkbookTabs, today: NaiveDate) -> Result<SheetSnapshot, SheetError> {
    let mut builder = SnapshotBuilder::default();

    for row in data_rows(tabs, REQUIREMENTS_TAB)? {
        let flag = row.cell(0);
        let display = match RowTag::parse(&flag) {
            Some(RowTag::Requirement { display }) => display,
            _ => {
                return Err(SheetError::InvalidDisplayFlag {
                    tab: REQUIREMENTS_TAB.to_string(),
                    line: row.line,
                    value: flag,
                })
            }
        };
        builder.push_requirement(requirement_from_cells(display, row, 1));
    }
    for row in data_rows(tabs, CONTENT_TAB)? {
        builder.push_content(content_from_cells(row, 0));
    }
    for row in data_rows(tabs, STAKEHOLDERS_TAB)? {
        builder.push_stakeholder(stakeholder_from_cells(row, 0));
    }
    for row in data_rows(tabs, LINKS_TAB)? {
        builder.push_link(link_from_cells(row, 0));
    }

    Ok(builder.finish(today))
}
