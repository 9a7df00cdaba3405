//! Platform storage constructor.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file per key under `<data_dir>/rewards/` via [`store::FileStore`]
//! - Anything else: process memory via [`store::MemoryStore`]

use std::rc::Rc;

use store::KeyValueStore;

pub type SharedStorage = Rc<dyn KeyValueStore>;

pub fn make_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("rewards");
        Rc::new(store::FileStore::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}
