use std::path::PathBuf;

use crate::domain::entities::settings::SheetFormat;
use crate::usecase::ports::sheet_source::{SheetError, SheetPayload, SheetSource};

/// A CSV or XLSX export saved on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSheetFile {
    pub path: PathBuf,
}

impl LocalSheetFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Format by extension; anything unrecognised is read as CSV.
    pub fn format(&self) -> SheetFormat {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SheetFormat::parse)
            .unwrap_or(SheetFormat::Csv)
    }

    fn io_error(&self, err: std::io::Error) -> SheetError {
        SheetError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl SheetSource for LocalSheetFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<SheetPayload, SheetError> {
        match self.format() {
            SheetFormat::Csv => std::fs::read_to_string(&self.path)
                .map(SheetPayload::Csv)
                .map_err(|err| self.io_error(err)),
            SheetFormat::Xlsx => std::fs::read(&self.path)
                .map(SheetPayload::Xlsx)
                .map_err(|err| self.io_error(err)),
        }
    }
}
