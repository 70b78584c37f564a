use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::infra::sqlite::schema::open_connection;

pub fn load_settings(db_path: &Path) -> Result<BTreeMap<String, String>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare("SELECT key, value FROM setting ORDER BY key ASC")
        .context("failed to prepare settings query")?;

    let settings_iter = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            Ok((key, value))
        })
        .context("failed to query settings")?;

    let mut settings = BTreeMap::new();
    for item in settings_iter {
        let (key, value) = item.context("failed to read settings row")?;
        settings.insert(key, value);
    }

    Ok(settings)
}

pub fn upsert_setting(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO setting(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )
    .with_context(|| format!("failed to save setting: {key}"))?;
    Ok(())
}
