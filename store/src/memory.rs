use std::sync::{Arc, Mutex};

use crate::TokenStore;

/// In-memory TokenStore for testing and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    async fn put(&self, token: &str) {
        *self.slot.lock().unwrap() = Some(token.to_string());
    }

    async fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get().await.is_none());

        store.put("tok-1").await;
        assert_eq!(store.get().await.as_deref(), Some("tok-1"));

        // Replacing keeps a single slot
        store.put("tok-2").await;
        assert_eq!(store.get().await.as_deref(), Some("tok-2"));

        store.clear().await;
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store = MemoryTokenStore::new();
        let other = store.clone();

        store.put("shared").await;
        assert_eq!(other.get().await.as_deref(), Some("shared"));

        other.clear().await;
        assert!(store.get().await.is_none());
    }
}
