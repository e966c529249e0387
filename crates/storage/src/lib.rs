//! Persistence for games in progress.
//!
//! `kniffel-storage` owns the snapshot schema ([`SaveGame`]) and the
//! [`SaveStore`] contract for reading and writing it. The file
//! implementation keeps one JSON document per save path with atomic
//! replacement; the in-memory implementation backs tests. Conversions
//! between records and [`kniffel_core::GameState`] validate structure, so
//! a corrupted file surfaces as an error here instead of bad state
//! downstream.
pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{Result, StorageError};
pub use file::FileSaveStore;
pub use memory::MemorySaveStore;
pub use record::{PlayerRecord, SaveGame};
pub use store::SaveStore;
