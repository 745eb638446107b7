use crate::config::DashboardConfig;
use crate::db::ConnectionProvider;

/// Shared, immutable state handed to every handler.
///
/// Holds no connections and no mutable data; the store is the only
/// shared resource between requests.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub db: ConnectionProvider,
    pub patient_id: i64,
}

impl AppContext {
    pub fn new(db: ConnectionProvider, patient_id: i64) -> Self {
        Self { db, patient_id }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            ConnectionProvider::new(&config.database_path),
            config.patient_id,
        )
    }
}
