//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] persists the session token as a single `token` file
//! under a base directory, so a signed-in session is picked up again after an
//! app restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token          # file containing the bearer token string
//! ```
//!
//! Use [`FileTokenStore::default_dir`] for a platform-appropriate base
//! (`~/.local/share/clubhub/` on Linux, `~/Library/Application Support/clubhub/`
//! on macOS, `AppData\Roaming\clubhub\` on Windows).

use std::path::PathBuf;

use crate::TokenStore;

/// Filesystem-backed TokenStore for persistence across restarts.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Platform data directory for ClubHub (`<data_dir>/clubhub`).
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clubhub")
    }

    fn token_path(&self) -> PathBuf {
        self.base.join("token")
    }
}

impl TokenStore for FileTokenStore {
    async fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    async fn put(&self, token: &str) {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, token);
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("clubhub_token_test_{}_{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert!(store.get().await.is_none());

        store.put("persisted-token").await;

        // Re-open from the same directory, as after an app restart
        let store2 = FileTokenStore::new(dir.clone());
        assert_eq!(store2.get().await.as_deref(), Some("persisted-token"));

        store2.clear().await;
        assert!(store.get().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_absent() {
        let dir = temp_base("empty");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("token"), "\n").unwrap();

        let store = FileTokenStore::new(dir.clone());
        assert!(store.get().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
