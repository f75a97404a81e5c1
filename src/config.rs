use std::path::PathBuf;

use crate::errors::{Result, StoreError};

/// Base directory used by development builds, relative to the working
/// directory.
pub const DEV_BASE_DIR: &str = ".hitbase-dev";

/// Build profile, mirroring the host's production/development switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Production,
    Development,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

pub struct AppPaths {
    pub base_dir: PathBuf,
    pub db_path: PathBuf,
}

impl AppPaths {
    /// Resolve the paths for the given build mode. An unresolvable
    /// user-data directory is a `Config` error.
    pub fn resolve(mode: BuildMode) -> Result<Self> {
        match mode {
            BuildMode::Production => {
                let base = dirs::data_dir()
                    .ok_or_else(|| {
                        StoreError::Config("could not resolve the user data directory".into())
                    })?
                    .join("hitbase");
                Ok(Self::from_base(base))
            }
            BuildMode::Development => Ok(Self::from_base(PathBuf::from(DEV_BASE_DIR))),
        }
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            db_path: base.join("hits.db"),
            base_dir: base,
        }
    }

    /// Paths for an explicitly chosen database file (the `--db` override).
    pub fn from_db_path(db_path: PathBuf) -> Self {
        let base_dir = db_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { base_dir, db_path }
    }
}
