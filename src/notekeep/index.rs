//! # Display Indexes
//!
//! Notes are addressed by opaque ids in storage, which are awkward to type.
//! Listings number notes 1, 2, 3... in stored order, and commands accept
//! either that number or a raw id through [`NoteSelector`].
//!
//! Indexes are assigned over the *whole* collection before any search filter
//! is applied, so the number shown next to a search hit is the same number
//! `edit` and `delete` resolve.

use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use std::fmt;
use std::str::FromStr;

/// 1-based position of a note in the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(DisplayIndex),
    Id(NoteId),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NoteError::Validation("Empty note selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(NoteError::Validation(
                "Note indexes start at 1".to_string(),
            )),
            Ok(n) => Ok(NoteSelector::Index(DisplayIndex(n))),
            Err(_) => Ok(NoteSelector::Id(NoteId::new(s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note,
            index: DisplayIndex(i + 1),
        })
        .collect()
}
