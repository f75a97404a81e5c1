pub mod models;
pub mod remote;
pub mod schema;
pub mod sqlite;

use crate::config::AppPaths;
use crate::errors::Result;
use crate::runtime::Deployment;
use models::{Hit, NewHit};

/// Backend-neutral persistence interface for hits.
///
/// Lifecycle calls surface errors to the caller. The data operations never
/// do: failures are reported on stderr and folded into `false` or an empty
/// `Vec`, so callers get the same contract from both backends.
pub trait HitStore {
    fn open_database(&mut self) -> Result<()>;
    /// Errors when called before `open_database`.
    fn init_tables(&mut self) -> Result<()>;
    /// Closing a store that is not open is a no-op.
    fn close_database(&mut self) -> Result<()>;
    /// Inserts parser output. A failed record is skipped and the rest are
    /// still attempted; returns `true` only when every record landed.
    fn insert_hits_from_textarea(&self, hits: &[NewHit]) -> bool;
    /// Inserts fully-formed records. Stops at the first failure.
    fn insert_hits_from_display(&self, hits: &[Hit]) -> bool;
    /// Every stored hit, unordered. Empty when unopened or on failure.
    fn get_hits(&self) -> Vec<Hit>;
    /// Deletes every stored hit. `true` on success.
    fn clean_hits(&self) -> bool;
}

/// Binds the storage backend once for the resolved deployment.
pub fn from_deployment(deployment: &Deployment, paths: &AppPaths) -> Result<Box<dyn HitStore>> {
    match deployment {
        Deployment::Local => Ok(Box::new(sqlite::SqliteStore::new(&paths.db_path))),
        Deployment::Remote(base_url) => Ok(Box::new(remote::RemoteStore::new(base_url.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_local_deployment_binds_sqlite() {
        let paths = AppPaths::from_db_path(PathBuf::from(":memory:"));
        let mut store = from_deployment(&Deployment::Local, &paths).unwrap();
        store.open_database().unwrap();
        store.init_tables().unwrap();
        assert!(store.insert_hits_from_textarea(&[NewHit::custom("bound")]));
        assert_eq!(store.get_hits().len(), 1);
    }

    #[test]
    fn test_remote_deployment_binds_remote() {
        let deployment = Deployment::Remote("http://127.0.0.1:1".to_string());
        let paths = AppPaths::from_db_path(PathBuf::from(":memory:"));
        let mut store = from_deployment(&deployment, &paths).unwrap();
        // remote lifecycle is a no-op, even with nothing listening
        store.open_database().unwrap();
        store.init_tables().unwrap();
        store.close_database().unwrap();
    }
}
