use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::{KeyValueStore, NoteStore};

use super::helpers::resolve_selectors;

/// Delete every selected note. Selectors are resolved up front so that
/// removing one note does not shift the indexes of the others.
pub fn run<B: KeyValueStore>(store: &NoteStore<B>, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let ids = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (selector, id) in selectors.iter().zip(ids) {
        match store.remove(&id)? {
            Some(note) => {
                result.add_message(CmdMessage::success(format!(
                    "Note deleted ({}): {}",
                    selector, note.title
                )));
                result.affected_notes.push(note);
            }
            None => {
                result.add_message(CmdMessage::info(format!("No note with id {}", id)));
            }
        }
    }

    Ok(result)
}
