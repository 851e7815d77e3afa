//! Client-side state for Second Brain: models, durable storage, the
//! persisted session record, the demo board, and the image feed.

pub mod board;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod record;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use board::{Board, BoardError};
pub use config::AppConfig;
pub use error::StoreError;
pub use feed::Feed;
pub use models::{Column, FeedImage, Person, User};
pub use record::UserRecord;
pub use storage::KeyValueStore;
