use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    constants::{DEFAULT_FIXTURES_PATH, DEFAULT_SKIP_FILE, FIXTURES_ENV, SKIP_FILE_ENV},
    filter::Filter,
    models::suite::FixtureSuite,
};

/// Where fixtures and the skip list are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fixtures_dir: PathBuf,
    pub skip_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first
    /// if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var(FIXTURES_ENV).ok(),
            std::env::var(SKIP_FILE_ENV).ok(),
        )
    }

    pub fn from_vars(fixtures_dir: Option<String>, skip_file: Option<String>) -> Self {
        Self {
            fixtures_dir: fixtures_dir
                .filter(|s| !s.is_empty())
                .map_or_else(|| DEFAULT_FIXTURES_PATH.clone(), PathBuf::from),
            skip_file: skip_file
                .filter(|s| !s.is_empty())
                .map_or_else(|| DEFAULT_SKIP_FILE.clone(), PathBuf::from),
        }
    }

    /// Loads the skip list. A missing file skips nothing.
    pub fn filter(&self) -> Result<Filter, eyre::Error> {
        if !self.skip_file.exists() {
            debug!("no skip file at {}", self.skip_file.display());
            return Ok(Filter::default());
        }
        Filter::load_file(&self.skip_file)
    }

    pub fn load_suite(&self) -> Result<FixtureSuite, eyre::Error> {
        let filter = self.filter()?;
        info!("loading fixtures from {}", self.fixtures_dir.display());
        Ok(FixtureSuite::load(&self.fixtures_dir, &filter)?)
    }
}
