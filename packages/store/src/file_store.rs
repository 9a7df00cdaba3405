//! # Filesystem-backed key/value store
//!
//! [`FileStore`] keeps each key in its own file under a base directory. It is
//! the desktop counterpart of the browser's `localStorage`, so a login
//! survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── authToken      # raw token
//! └── user           # JSON-encoded session user
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `"rewards"` for
//! the platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/rewards/` |
//! | Linux | `~/.local/share/rewards/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\rewards\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed key/value store for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys become file names; anything outside [A-Za-z0-9_-.] is replaced.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.entry_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rewards_test_{tag}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");

        let store = FileStore::new(dir.clone());
        store.set("authToken", "tok-123");

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("authToken").as_deref(), Some("tok-123"));

        reopened.remove("authToken");
        assert!(store.get("authToken").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_base_reads_as_empty() {
        let dir = temp_base("missing");
        let store = FileStore::new(dir.clone());
        assert!(store.get("user").is_none());
        store.remove("user");
        assert!(!dir.exists());
    }

    #[test]
    fn test_key_is_sanitized() {
        let dir = temp_base("sanitize");
        let store = FileStore::new(dir.clone());
        store.set("../escape", "x");
        assert!(dir.join(".._escape").exists());
        assert_eq!(store.get("../escape").as_deref(), Some("x"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
