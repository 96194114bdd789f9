use super::KeyValueStore;
use crate::error::{NoteError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl super::FileStore {
    /// A note store persisting into `root`.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        super::NoteStore::with_backend(FileBackend::new(root))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(NoteError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NoteError::Io(e)),
        }
    }

    fn set(&self, key: &str, text: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, text)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(NoteError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.get("notes").unwrap(), None);
    }

    #[test]
    fn set_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FileBackend::new(&root);

        backend.set("notes", "[]").unwrap();
        assert_eq!(fs::read_to_string(root.join("notes.json")).unwrap(), "[]");
    }

    #[test]
    fn set_replaces_previous_text() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("notes", "[1]").unwrap();
        backend.set("notes", "[]").unwrap();
        assert_eq!(backend.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(matches!(
            backend.set("../notes", "[]"),
            Err(NoteError::Store(_))
        ));
        assert!(matches!(backend.get(""), Err(NoteError::Store(_))));
    }
}
