//! # Notekeep Architecture
//!
//! Notekeep is a small local note keeper. The library holds all behavior;
//! the `notekeep` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the NoteStore for the session                       │
//! │  - Parses selectors, dispatches to commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Search (search.rs)         │
//! │  - One function per user operation, returns CmdResult       │
//! │  - Search is a pure filter recomputed on every call         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: validation, duplicates, load/save lifecycle   │
//! │  - KeyValueStore: one durable text slot per key             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store lifecycle
//!
//! A [`store::NoteStore`] starts in `Loading` and becomes `Ready` after the
//! first successful `load` (or a `reset`). Mutations before that fail with
//! [`error::NoteError::NotReady`]. Each mutation re-reads durable storage,
//! applies the change, writes the whole collection back, and only then
//! updates the in-memory list. Mutations are serialized by an internal lock.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user operation
//! - [`store`]: `NoteStore` and the key-value backends
//! - [`search`]: Case-insensitive substring filtering
//! - [`model`]: `Note` and `NoteId`
//! - [`index`]: Display positions and note selectors
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod search;
pub mod store;
