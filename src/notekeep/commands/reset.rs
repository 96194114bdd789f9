use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KeyValueStore, NoteStore};

/// Replace whatever is stored with an empty collection.
pub fn run<B: KeyValueStore>(store: &NoteStore<B>) -> Result<CmdResult> {
    let previous = store.len();
    store.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "Note storage reset ({} notes discarded)",
        previous
    )));
    Ok(result)
}
