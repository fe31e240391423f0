//! Fixed runtime configuration.
//!
//! # Invariants
//! - No flags or environment variables are read; every path derives from
//!   the working directory.

use contactbook_core::db::DB_FILE_NAME;
use contactbook_core::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "logs";

/// Resolved paths and log level for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Resolves the configuration against the current working directory.
    pub fn resolve() -> io::Result<Self> {
        Ok(Self::in_dir(&std::env::current_dir()?))
    }

    pub fn in_dir(base: &Path) -> Self {
        Self {
            db_path: base.join(DB_FILE_NAME),
            log_dir: base.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}
