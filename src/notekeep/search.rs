//! # Search
//!
//! Search is a derived view: [`filter`] is recomputed from the current note
//! list and query every time either changes. There is no persisted index to
//! keep in sync, which is fine for a personal collection of notes.
//!
//! Matching is case-insensitive substring containment on the chosen fields.
//! Results keep the original order; there is no relevance ranking.

use crate::error::{NoteError, Result};
use crate::model::Note;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Content,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::Title, SearchField::Content];

    fn value<'a>(&self, note: &'a Note) -> &'a str {
        match self {
            SearchField::Title => &note.title,
            SearchField::Content => &note.content,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => f.write_str("title"),
            SearchField::Content => f.write_str("content"),
        }
    }
}

impl FromStr for SearchField {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "content" => Ok(SearchField::Content),
            other => Err(NoteError::Config(format!("Unknown search field: {}", other))),
        }
    }
}

/// Notes whose `fields` contain `query`, in their original order.
///
/// A blank query returns every note. A non-blank query with no fields
/// matches nothing.
pub fn filter<'a>(notes: &'a [Note], query: &str, fields: &[SearchField]) -> Vec<&'a Note> {
    let query = query.trim();
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            fields
                .iter()
                .any(|field| field.value(note).to_lowercase().contains(&needle))
        })
        .collect()
}

/// A query plus the fields it applies to, as held by a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    fields: Vec<SearchField>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchField::ALL.to_vec())
    }
}

impl SearchState {
    pub fn new(fields: Vec<SearchField>) -> Self {
        Self {
            query: String::new(),
            fields,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn has_active_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        filter(notes, &self.query, &self.fields)
    }
}
