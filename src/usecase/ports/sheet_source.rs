use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::settings::SheetFormat;
use crate::domain::entities::sheet::{RawRow, RowTag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("failed to fetch sheet: {0}")]
    Http(String),
    #[error("sheet request failed: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("failed to read sheet export {path}: {message}")]
    Io { path: String, message: String },
    #[error("failed to parse csv: {0}")]
    Csv(String),
    #[error("failed to read workbook: {0}")]
    Workbook(String),
    #[error("workbook has no `{0}` tab")]
    MissingTab(String),
    #[error("line {line}: unrecognized row tag `{tag}` (expected exactly one of {accepted})", accepted = RowTag::ACCEPTED)]
    UnknownRowTag { line: usize, tag: String },
    #[error("{tab} row {line}: invalid display flag `{value}`")]
    InvalidDisplayFlag {
        tab: String,
        line: usize,
        value: String,
    },
}

/// Raw bytes of one sheet download, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetPayload {
    Csv(String),
    Xlsx(Vec<u8>),
}

/// Workbook rows keyed by tab name.
pub type WorkbookTabs = BTreeMap<String, Vec<RawRow>>;

/// Where the board's sheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    Published { url: String, format: SheetFormat },
    LocalFile(PathBuf),
}

impl SourceChoice {
    pub fn label(&self) -> String {
        match self {
            SourceChoice::Published { format, .. } => {
                format!("published sheet ({})", format.as_str())
            }
            SourceChoice::LocalFile(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

pub trait SheetSource: Send + Sync {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<SheetPayload, SheetError>;
}
