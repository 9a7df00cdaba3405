//! Client-held state for the rewards app: key/value storage backends, the
//! persisted login session and the client configuration file.

pub mod config;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ApiConfig, RewardsConfig};
pub use kv::KeyValueStore;
pub use session::{Session, SessionStore, SessionUser, AUTH_TOKEN_KEY, USER_KEY};
