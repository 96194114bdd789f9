use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::{KeyValueStore, NoteStore};

use super::helpers::notes_by_selectors;

pub fn run<B: KeyValueStore>(store: &NoteStore<B>, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let notes = notes_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_notes(notes))
}
