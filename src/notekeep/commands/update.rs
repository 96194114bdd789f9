use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::{KeyValueStore, NoteStore};

use super::helpers::resolve_selectors;

pub fn run<B: KeyValueStore>(
    store: &NoteStore<B>,
    selector: &NoteSelector,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let ids = resolve_selectors(store, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for id in ids {
        let note = store.update(&id, title, content)?;
        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            selector, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
