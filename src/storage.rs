use typefall_core::ScoreStore;
use web_sys as web;

/// `localStorage`-backed score store. Private browsing modes may deny
/// storage; the game then runs without persistence.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(s)) => Some(s),
            Ok(None) => {
                log::warn!("[storage] localStorage unavailable, high score will not persist");
                None
            }
            Err(e) => {
                log::warn!("[storage] localStorage error: {:?}", e);
                None
            }
        };
        Self { storage }
    }
}

impl ScoreStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[storage] could not persist {}: {:?}", key, e);
            }
        }
    }
}
