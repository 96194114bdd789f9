use super::KeyValueStore;
use crate::config::NotekeepConfig;
use crate::error::{NoteError, Result};
use crate::model::{normalize_fields, validate_time_format, Note, NoteId, DEFAULT_TIME_FORMAT};
use chrono::{Local, NaiveDateTime};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "notes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// The first successful `load` has not happened yet.
    Loading,
    Ready,
}

struct State {
    status: StoreStatus,
    notes: Vec<Note>,
}

/// The single owner of the note collection.
///
/// The in-memory list is only replaced after the corresponding durable write
/// succeeded, so it never holds anything the backend does not. Every
/// operation runs under one lock: mutations are serialized, and the
/// re-read-then-write inside `create`/`update`/`remove` cannot interleave with
/// another mutation through the same store.
pub struct NoteStore<B: KeyValueStore> {
    backend: B,
    key: String,
    time_format: String,
    clock: fn() -> NaiveDateTime,
    state: Mutex<State>,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<B: KeyValueStore> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            clock: local_now,
            state: Mutex::new(State {
                status: StoreStatus::Loading,
                notes: Vec::new(),
            }),
        }
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Fails with `Config` for a pattern chrono cannot render.
    pub fn with_time_format(mut self, format: &str) -> Result<Self> {
        validate_time_format(format)?;
        self.time_format = format.to_string();
        Ok(self)
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(self, config: &NotekeepConfig) -> Result<Self> {
        self.with_storage_key(&config.storage_key)
            .with_time_format(&config.time_format)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Read the whole collection from durable storage and make it current.
    ///
    /// A missing key is an empty collection. On failure nothing changes,
    /// including the loading status.
    pub fn load(&self) -> Result<Vec<Note>> {
        let mut state = self.lock();
        let notes = self.read_persisted()?;
        debug!(count = notes.len(), key = %self.key, "Loaded notes from storage");
        state.notes = notes.clone();
        state.status = StoreStatus::Ready;
        Ok(notes)
    }

    pub fn refresh(&self) -> Result<Vec<Note>> {
        self.load()
    }

    /// Overwrite durable storage with an empty collection.
    ///
    /// This is the recovery path after `load` reported corrupt data; it also
    /// marks the store ready.
    pub fn reset(&self) -> Result<()> {
        let mut state = self.lock();
        self.persist(&[])?;
        warn!(key = %self.key, "Note storage reset to an empty collection");
        state.notes.clear();
        state.status = StoreStatus::Ready;
        Ok(())
    }

    pub fn create(&self, title: &str, content: &str) -> Result<Note> {
        let mut state = self.lock();
        ensure_ready(&state)?;
        let (title, content) = normalize_fields(title, content)?;

        // Duplicates are checked against what is persisted, not the possibly
        // stale in-memory list.
        let mut notes = self.read_persisted()?;
        if notes.iter().any(|n| n.is_duplicate_of(&title, &content)) {
            return Err(NoteError::Duplicate);
        }

        let mut id = NoteId::generate();
        while notes.iter().any(|n| n.id == id) {
            id = NoteId::generate();
        }

        let note = Note::new(id, title, content, (self.clock)(), &self.time_format)?;
        notes.push(note.clone());
        self.persist(&notes)?;

        info!(id = %note.id, total = notes.len(), "Note created");
        state.notes = notes;
        Ok(note)
    }

    /// Replace title and content of an existing note and restamp it.
    ///
    /// Position and id are kept. Other notes are not checked for duplicates.
    pub fn update(&self, id: &NoteId, title: &str, content: &str) -> Result<Note> {
        let mut state = self.lock();
        ensure_ready(&state)?;
        let (title, content) = normalize_fields(title, content)?;

        let mut notes = self.read_persisted()?;
        let note = notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))?;
        note.title = title;
        note.content = content;
        note.stamp((self.clock)(), &self.time_format)?;
        let updated = note.clone();

        self.persist(&notes)?;

        info!(id = %updated.id, "Note updated");
        state.notes = notes;
        Ok(updated)
    }

    /// Delete the note with `id`. Returns the removed note, or `None` when no
    /// such note exists (which is not an error and writes nothing).
    pub fn remove(&self, id: &NoteId) -> Result<Option<Note>> {
        let mut state = self.lock();
        ensure_ready(&state)?;

        let mut notes = self.read_persisted()?;
        let Some(position) = notes.iter().position(|n| &n.id == id) else {
            debug!(id = %id, "Remove of unknown note ignored");
            return Ok(None);
        };
        let removed = notes.remove(position);
        self.persist(&notes)?;

        info!(id = %removed.id, total = notes.len(), "Note deleted");
        state.notes = notes;
        Ok(Some(removed))
    }

    /// Snapshot of the current in-memory collection, in stored order.
    pub fn notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    pub fn get(&self, id: &NoteId) -> Option<Note> {
        self.lock().notes.iter().find(|n| &n.id == id).cloned()
    }

    pub fn status(&self) -> StoreStatus {
        self.lock().status
    }

    pub fn is_ready(&self) -> bool {
        self.status() == StoreStatus::Ready
    }

    pub fn len(&self) -> usize {
        self.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().notes.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_persisted(&self) -> Result<Vec<Note>> {
        match self.backend.get(&self.key)? {
            Some(text) => decode_notes(&text).inspect_err(|e| {
                warn!(key = %self.key, error = %e, "Stored notes could not be parsed");
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, notes: &[Note]) -> Result<()> {
        let text = encode_notes(notes)?;
        self.backend.set(&self.key, &text)?;
        debug!(count = notes.len(), key = %self.key, "Notes saved to storage");
        Ok(())
    }
}

fn ensure_ready(state: &State) -> Result<()> {
    match state.status {
        StoreStatus::Ready => Ok(()),
        StoreStatus::Loading => Err(NoteError::NotReady),
    }
}

/// Serialize a collection into its durable text form.
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    serde_json::to_string_pretty(notes)
        .map_err(|e| NoteError::Store(format!("Failed to encode notes: {}", e)))
}

/// Parse the durable text form. Anything that is not a JSON array of notes
/// is reported as corrupt storage.
pub fn decode_notes(text: &str) -> Result<Vec<Note>> {
    serde_json::from_str(text).map_err(NoteError::CorruptStorage)
}
