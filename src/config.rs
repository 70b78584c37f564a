use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::settings::{Settings, SheetFormat};

pub const APP_TITLE: &str = "UX Business Requirements";
pub const DOCUMENT_HEADING: &str = "UX Requirements & Testing Framework";
pub const DOCUMENT_SUMMARY: &str = "This document outlines the comprehensive UX business requirements for the Adobe Certification Portal (ACP). The ACP serves as the primary platform for users to discover, register for, complete, and manage their Adobe DX product certifications.";

pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSEkwZQNs2I4eWnLlwXMp7oR7y9-CdxlMMn4t2HeqCUfA9JdQnoOMroFJM2OqzPtiLIWTjki1f4TyJB/pub?output=csv";

pub const SHEET_URL_ENV: &str = "BRD_SHEET_URL";
pub const SHEET_FORMAT_ENV: &str = "BRD_SHEET_FORMAT";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "brd").ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("settings.sqlite"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

/// Environment values win over persisted settings for the sheet source.
pub fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(SHEET_URL_ENV).filter(|url| !url.trim().is_empty()) {
        settings.sheet_url = url.trim().to_string();
    }
    if let Some(format) = lookup(SHEET_FORMAT_ENV).as_deref().and_then(SheetFormat::parse) {
        settings.sheet_format = format;
    }
    settings
}
