//! Platform storage for the session record.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Native**: one JSON file per key under `<data_dir>/second-brain/`
//! - **WASM without `web`**: in-memory only

use store::KeyValueStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_storage() -> impl KeyValueStore + 'static {
    store::LocalStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_storage() -> impl KeyValueStore + 'static {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("second-brain");
    store::FileStore::new(base)
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_storage() -> impl KeyValueStore + 'static {
    store::MemoryStore::new()
}
