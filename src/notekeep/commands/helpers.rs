use crate::error::{NoteError, Result};
use crate::index::{index_notes, DisplayNote, NoteSelector};
use crate::model::{Note, NoteId};
use crate::store::{KeyValueStore, NoteStore};

pub fn indexed_notes<B: KeyValueStore>(store: &NoteStore<B>) -> Vec<DisplayNote> {
    index_notes(store.notes())
}

/// Turn selectors into ids against the current list.
///
/// Indexes must point at an existing note. Ids are passed through unchecked;
/// each command decides what a missing id means. A number beyond the list is
/// also tried as an id, since older clients used numeric timestamp ids.
pub fn resolve_selectors<B: KeyValueStore>(
    store: &NoteStore<B>,
    selectors: &[NoteSelector],
) -> Result<Vec<NoteId>> {
    let notes = store.notes();
    selectors
        .iter()
        .map(|selector| resolve_one(&notes, selector))
        .collect()
}

fn resolve_one(notes: &[Note], selector: &NoteSelector) -> Result<NoteId> {
    match selector {
        NoteSelector::Id(id) => Ok(id.clone()),
        NoteSelector::Index(idx) => {
            if let Some(note) = idx.0.checked_sub(1).and_then(|i| notes.get(i)) {
                return Ok(note.id.clone());
            }
            let as_id = NoteId::new(idx.to_string());
            if notes.iter().any(|n| n.id == as_id) {
                return Ok(as_id);
            }
            Err(NoteError::NotFound(format!("index {}", idx)))
        }
    }
}

pub fn notes_by_selectors<B: KeyValueStore>(
    store: &NoteStore<B>,
    selectors: &[NoteSelector],
) -> Result<Vec<DisplayNote>> {
    let ids = resolve_selectors(store, selectors)?;
    let indexed = indexed_notes(store);
    ids.into_iter()
        .map(|id| {
            indexed
                .iter()
                .find(|dn| dn.note.id == id)
                .cloned()
                .ok_or_else(|| NoteError::NotFound(id.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_indexes_in_stored_order() {
        let fixture = StoreFixture::new().with_notes(3);
        let ids = resolve_selectors(
            &fixture.store,
            &[
                NoteSelector::Index(DisplayIndex(3)),
                NoteSelector::Index(DisplayIndex(1)),
            ],
        )
        .unwrap();
        assert_eq!(ids, vec![fixture.id_at(2), fixture.id_at(0)]);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let fixture = StoreFixture::new().with_notes(1);
        let err =
            resolve_selectors(&fixture.store, &[NoteSelector::Index(DisplayIndex(2))]).unwrap_err();
        assert!(matches!(err, NoteError::NotFound(_)));
    }

    #[test]
    fn numeric_ids_from_older_clients_resolve() {
        let fixture = StoreFixture::new();
        fixture.store.backend().put_raw(
            "notes",
            r#"[{"id":"1700000000000","title":"Old","content":"note","date":"2023-11-14","time":"10:13 PM"}]"#,
        );
        fixture.store.load().unwrap();

        let sel: NoteSelector = "1700000000000".parse().unwrap();
        let found = notes_by_selectors(&fixture.store, &[sel]).unwrap();
        assert_eq!(found[0].note.title, "Old");
        assert_eq!(found[0].index, DisplayIndex(1));
    }

    #[test]
    fn unknown_id_fails_lookup() {
        let fixture = StoreFixture::new().with_notes(1);
        let err = notes_by_selectors(&fixture.store, &[NoteSelector::Id(NoteId::new("x"))])
            .unwrap_err();
        assert!(matches!(err, NoteError::NotFound(id) if id == "x"));
    }
}
