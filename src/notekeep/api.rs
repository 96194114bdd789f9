//! # API Facade
//!
//! The single entry point a UI talks to. It owns the [`NoteStore`] for the
//! session (there is no global note list) and dispatches to the command layer.
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Normalizes inputs** (selector strings into [`NoteSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `NotesApi<B: KeyValueStore>` is generic over the storage backend:
//! `NotesApi<FileBackend>` in production, `NotesApi<MemBackend>` in tests.

use crate::commands;
use crate::error::Result;
use crate::index::NoteSelector;
use crate::search::SearchField;
use crate::store::{KeyValueStore, NoteStore};

pub struct NotesApi<B: KeyValueStore> {
    store: NoteStore<B>,
    paths: commands::NotekeepPaths,
}

impl<B: KeyValueStore> NotesApi<B> {
    pub fn new(store: NoteStore<B>, paths: commands::NotekeepPaths) -> Self {
        Self { store, paths }
    }

    /// Initial fetch. Mutations fail with `NotReady` until this succeeds
    /// (or until `reset`).
    pub fn load(&self) -> Result<commands::CmdResult> {
        let notes = self.store.load()?;
        Ok(commands::CmdResult::default().with_affected_notes(notes))
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    pub fn create_note(&self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, title, content)
    }

    pub fn update_note(
        &self,
        selector: &str,
        title: &str,
        content: &str,
    ) -> Result<commands::CmdResult> {
        let selector = selector.parse::<NoteSelector>()?;
        commands::update::run(&self.store, &selector, title, content)
    }

    pub fn delete_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&self.store, &selectors)
    }

    pub fn list_notes(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query, fields)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn reset(&self) -> Result<commands::CmdResult> {
        commands::reset::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &commands::NotekeepPaths {
        &self.paths
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NotekeepPaths};
