use cemetery_core::{PersistError, SnapshotStore};
use web_sys as web;

/// `window.localStorage` as a snapshot store.
///
/// Private browsing modes may refuse storage entirely; then loads return
/// nothing and saves report `Unavailable` without touching the page.
#[derive(Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web::Storage> {
        web::window()?.local_storage().ok().flatten()
    }
}

impl SnapshotStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let raw = Self::storage()?.get_item(key).ok()??;
        if raw.is_empty() {
            log::info!("[storage] {} is empty", key);
            return None;
        }
        Some(raw)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        let storage = Self::storage().ok_or(PersistError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}
