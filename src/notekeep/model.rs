use crate::error::{NoteError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use uuid::Uuid;

pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// Opaque note identifier.
///
/// New notes get a random UUID, but any string already present in storage is
/// accepted as-is (older clients wrote millisecond timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    // Date and time of creation, or of the last edit.
    #[serde(rename = "date", alias = "createdDate")]
    pub created_date: NaiveDate,
    #[serde(rename = "time", alias = "createdTime")]
    pub created_time: String,
}

impl Note {
    /// Builds a note from already-normalized fields.
    pub fn new(
        id: NoteId,
        title: String,
        content: String,
        at: NaiveDateTime,
        time_format: &str,
    ) -> Result<Self> {
        let mut note = Self {
            id,
            title,
            content,
            created_date: at.date(),
            created_time: String::new(),
        };
        note.stamp(at, time_format)?;
        Ok(note)
    }

    /// Set date and time to `at`. Nothing changes if `time_format` cannot be
    /// rendered.
    pub fn stamp(&mut self, at: NaiveDateTime, time_format: &str) -> Result<()> {
        let mut time = String::new();
        write!(time, "{}", at.format(time_format)).map_err(|_| {
            NoteError::Config(format!("Invalid time format: {:?}", time_format))
        })?;
        self.created_date = at.date();
        self.created_time = time;
        Ok(())
    }

    /// Exact, case-sensitive comparison against already-trimmed fields.
    pub fn is_duplicate_of(&self, title: &str, content: &str) -> bool {
        self.title == title && self.content == content
    }
}

/// Rejects blank strftime patterns and ones chrono cannot render.
pub fn validate_time_format(format: &str) -> Result<()> {
    if format.trim().is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    {
        return Err(NoteError::Config(format!(
            "Invalid time format: {:?}",
            format
        )));
    }
    Ok(())
}

/// Trims both fields and rejects either one being empty.
pub fn normalize_fields(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(NoteError::Validation(
            "Please enter both title and content".to_string(),
        ));
    }
    Ok((title.to_string(), content.to_string()))
}
