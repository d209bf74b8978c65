use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::Clock;
use crate::error::Result;
use crate::store::{FileStore, KvStore, RecordStore};

pub type DynKvStore = Box<dyn KvStore + Send>;

/// Shared handler state.
///
/// The record store sits behind one mutex so that each request's
/// load-mutate-store cycle runs alone; this is what keeps two concurrent
/// check-ins for the same person from both passing the open-session test.
pub struct AppState {
    store: Mutex<RecordStore<DynKvStore>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(kv: DynKvStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(RecordStore::new(kv)),
            clock,
        }
    }

    pub fn store(&self) -> MutexGuard<'_, RecordStore<DynKvStore>> {
        // a panicking handler cannot leave a half-written collection behind,
        // every write replaces the whole value
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn init_store(data_dir: &Path) -> Result<DynKvStore> {
    Ok(Box::new(FileStore::open(data_dir)?))
}
