use super::entry::Entry;

/// Picks the entry to display: the one with the most meanings, with the
/// earliest entry winning ties.
pub fn best_entry(entries: &[Entry]) -> Option<&Entry> {
    let mut best: Option<&Entry> = None;
    for entry in entries {
        match best {
            Some(current) if entry.meanings.len() <= current.meanings.len() => {}
            _ => best = Some(entry),
        }
    }
    best
}
