use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KeyValueStore, NoteStore};

pub fn run<B: KeyValueStore>(store: &NoteStore<B>, title: &str, content: &str) -> Result<CmdResult> {
    let note = store.create(title, content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        store.len(),
        note.title
    )));
    Ok(result.with_affected_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn creates_note_and_reports_position() {
        let fixture = StoreFixture::new().with_notes(2);
        let result = run(&fixture.store, "Third", "body").unwrap();
        assert_eq!(result.affected_notes[0].title, "Third");
        assert_eq!(result.messages[0].content, "Note created (3): Third");
    }

    #[test]
    fn propagates_duplicate_error() {
        let fixture = StoreFixture::new().with_note("A", "b");
        assert!(matches!(
            run(&fixture.store, "A", "b"),
            Err(NoteError::Duplicate)
        ));
    }
}
