use shared::draw::{ResultStore, STORAGE_KEY};
use web_sys::{window, Storage};

/// `localStorage`-backed implementation of the result store. Storage access
/// can fail (private browsing, disabled storage); every path degrades to a
/// no-op or `None` rather than raising.
pub struct LocalResultStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

impl ResultStore for LocalResultStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(STORAGE_KEY, raw).is_err() {
                log::warn!("Failed to persist results to local storage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
