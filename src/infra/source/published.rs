use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::domain::entities::settings::SheetFormat;
use crate::usecase::ports::sheet_source::{SheetError, SheetPayload, SheetSource};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Points a published-sheet link at the export matching `format` by rewriting
/// its `output` query parameter. Links without one come back unchanged.
pub fn export_url(url: &str, format: SheetFormat) -> String {
    let Ok(mut parsed) = Url::parse(url.trim()) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(key, _)| key == "output") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "output" {
                format.as_str().to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

/// A Google Sheet published to the web as CSV or XLSX.
///
/// The blocking client is built per fetch so it is created and dropped on
/// the worker thread that runs the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedSheet {
    pub url: String,
    pub format: SheetFormat,
}

impl PublishedSheet {
    pub fn new(url: impl Into<String>, format: SheetFormat) -> Self {
        Self {
            url: url.into(),
            format,
        }
    }
}

impl SheetSource for PublishedSheet {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<SheetPayload, SheetError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| SheetError::Http(err.to_string()))?;

        let response = client
            .get(export_url(&self.url, self.format))
            .send()
            .map_err(|err| SheetError::Http(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        match self.format {
            SheetFormat::Csv => response
                .text()
                .map(SheetPayload::Csv)
                .map_err(|err| SheetError::Http(err.to_string())),
            SheetFormat::Xlsx => response
                .bytes()
                .map(|bytes| SheetPayload::Xlsx(bytes.to_vec()))
                .map_err(|err| SheetError::Http(err.to_string())),
        }
    }
}
