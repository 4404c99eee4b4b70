//! Shared application state handed to every handler.

use std::sync::{Arc, Mutex};

use crate::alerts::AlertDispatcher;
use crate::config::Settings;
use crate::dedup::FingerprintIndex;
use crate::store::ScanStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<ScanStore>,
    /// Held for the whole search-then-index step of an upload.
    pub index: Arc<Mutex<FingerprintIndex>>,
    pub alerts: AlertDispatcher,
}

impl AppState {
    /// Build the state, loading the fingerprint index when a path is configured.
    pub fn new(settings: Settings) -> Self {
        let index = match &settings.fingerprint_path {
            Some(path) => FingerprintIndex::open(path),
            None => FingerprintIndex::in_memory(),
        };
        let alerts = AlertDispatcher::new(settings.alert_webhook_url.clone());
        Self {
            settings: Arc::new(settings),
            store: Arc::new(ScanStore::new()),
            index: Arc::new(Mutex::new(index)),
            alerts,
        }
    }
}
