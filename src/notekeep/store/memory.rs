use super::KeyValueStore;
use crate::error::{NoteError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory storage backend for testing.
#[derive(Default)]
pub struct MemBackend {
    slots: Mutex<HashMap<String, String>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `get` fail with an IO error.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Make every following `set` fail with an IO error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Write raw text, bypassing the failure switches.
    pub fn put_raw(&self, key: &str, text: &str) {
        self.lock().insert(key.to_string(), text.to_string());
    }

    /// Read raw text, bypassing the failure switches.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self, flag: &AtomicBool, what: &str) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(NoteError::Io(std::io::Error::other(format!(
                "Simulated {} error",
                what
            ))));
        }
        Ok(())
    }
}

impl KeyValueStore for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check(&self.simulate_read_error, "read")?;
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, text: &str) -> Result<()> {
        self.check(&self.simulate_write_error, "write")?;
        self.lock().insert(key.to_string(), text.to_string());
        Ok(())
    }
}

impl Default for super::InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl super::InMemoryStore {
    pub fn new() -> Self {
        super::NoteStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::NoteId;
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap_or_default()
    }

    pub fn later_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(8, 5, 0))
            .unwrap_or_default()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A loaded, empty store with a fixed clock.
        pub fn new() -> Self {
            let store = InMemoryStore::new().with_clock(fixed_now);
            let _ = store.load();
            Self { store }
        }

        pub fn with_notes(self, count: usize) -> Self {
            for i in 0..count {
                let _ = self.store.create(
                    &format!("Test Note {}", i + 1),
                    &format!("Content for note {}", i + 1),
                );
            }
            self
        }

        pub fn with_note(self, title: &str, content: &str) -> Self {
            let _ = self.store.create(title, content);
            self
        }

        pub fn id_at(&self, position: usize) -> NoteId {
            self.store.notes()[position].id.clone()
        }
    }
}
