use crate::models::WeeklyBasis;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub weekly_basis: WeeklyBasis,
    /// Serializes read-modify-write round trips within this process.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, weekly_basis: WeeklyBasis) -> Self {
        Self {
            store,
            weekly_basis,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
