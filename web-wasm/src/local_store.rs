//! localStorage による永続化

use far_review_common::{Error, KeyValueStore, Result};
use gloo::storage::{LocalStorage, Storage};

/// ブラウザのlocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}
