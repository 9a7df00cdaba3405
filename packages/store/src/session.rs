//! Persisted login session.
//!
//! The session lives under two well-known keys so that it stays readable by
//! anything else sharing the storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`AUTH_TOKEN_KEY`] | raw bearer token |
//! | [`USER_KEY`] | JSON `{ "id", "name", "email" }` |

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

/// The logged-in user as remembered by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Reads and writes the session through any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored user, or `None` if the entry is missing or not valid JSON.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// A session is only complete when both the token and the user are present.
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn save(&self, session: &Session) {
        self.storage.set(AUTH_TOKEN_KEY, &session.token);
        if let Ok(json) = serde_json::to_string(&session.user) {
            self.storage.set(USER_KEY, &json);
        }
    }

    pub fn clear(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn ana() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user: SessionUser {
                id: "7".to_string(),
                name: "Ana Silva".to_string(),
                email: "ana@x.com".to_string(),
            },
        }
    }

    #[test]
    fn test_save_writes_both_keys() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());

        sessions.save(&ana());

        assert_eq!(storage.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt-token"));
        let user: serde_json::Value =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(user["id"], "7");
        assert_eq!(user["name"], "Ana Silva");
        assert_eq!(user["email"], "ana@x.com");
    }

    #[test]
    fn test_load_roundtrip() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());

        sessions.save(&ana());
        assert_eq!(sessions.load(), Some(ana()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStore::new();
        storage.set("theme", "dark");
        let sessions = SessionStore::new(storage.clone());
        sessions.save(&ana());

        sessions.clear();

        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(sessions.load().is_none());
        // Unrelated keys survive
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_user_reads_as_absent() {
        let storage = MemoryStore::new();
        storage.set(AUTH_TOKEN_KEY, "tok");
        storage.set(USER_KEY, "not json");
        let sessions = SessionStore::new(storage);

        assert_eq!(sessions.token().as_deref(), Some("tok"));
        assert!(sessions.user().is_none());
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_user_with_extra_fields_is_accepted() {
        let storage = MemoryStore::new();
        storage.set(
            USER_KEY,
            r#"{"id":"1","name":"Bruno","email":"b@x.com","token":"t"}"#,
        );
        let sessions = SessionStore::new(storage);
        assert_eq!(sessions.user().map(|u| u.name), Some("Bruno".to_string()));
    }
}
