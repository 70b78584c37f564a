use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::infra::sqlite::queries::{load_settings, upsert_setting};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RepoError, SettingsRepository};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SettingsRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn load_settings(&self) -> Result<BTreeMap<String, String>, RepoError> {
        load_settings(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn upsert_setting(&self, key: &str, value: &str) -> Result<(), RepoError> {
        upsert_setting(&self.db_path, key, value)
            .map_err(|err| RepoError::Message(format!("{err:#}")))
    }
}
