use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::{filter, SearchField};
use crate::store::{KeyValueStore, NoteStore};

use super::helpers::indexed_notes;

pub fn run<B: KeyValueStore>(
    store: &NoteStore<B>,
    query: Option<&str>,
    fields: &[SearchField],
) -> Result<CmdResult> {
    let indexed = indexed_notes(store);
    let query = query.unwrap_or_default();
    if query.trim().is_empty() {
        return Ok(CmdResult::default().with_listed_notes(indexed));
    }

    let notes: Vec<_> = indexed.iter().map(|dn| dn.note.clone()).collect();
    let matching: Vec<_> = filter(&notes, query, fields)
        .into_iter()
        .map(|note| note.id.clone())
        .collect();
    let total = indexed.len();
    let listed: Vec<_> = indexed
        .into_iter()
        .filter(|dn| matching.contains(&dn.note.id))
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} notes match \"{}\"",
        listed.len(),
        total,
        query.trim()
    )));
    Ok(result.with_listed_notes(listed))
}
