//! # Storage Layer
//!
//! Notes live in a single durable key-value slot: the whole collection is
//! serialized as one JSON document under one fixed key. The [`KeyValueStore`]
//! trait is that slot; [`note_store::NoteStore`] sits on top of it and owns
//! serialization, validation and the in-memory copy.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `<key>.json` file per key
//!   inside a data directory. Writes are atomic (temp file, then rename).
//! - [`memory::MemBackend`]: in-memory storage for tests, with switches to
//!   simulate read and write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── notes.json     # JSON array of notes (key "notes" by default)
//! └── config.json    # configuration, see config.rs
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod note_store;

pub use note_store::{decode_notes, encode_notes, NoteStore, StoreStatus};

pub type FileStore = NoteStore<fs::FileBackend>;
pub type InMemoryStore = NoteStore<memory::MemBackend>;

/// A durable text slot addressed by key.
///
/// Implementations take `&self` and handle their own interior mutability so a
/// store can be shared by reference across consumers.
pub trait KeyValueStore {
    /// Read the text under `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text under `key`.
    fn set(&self, key: &str, text: &str) -> Result<()>;
}
