use std::cmp::Ordering;

use crate::entry::OperatorEntry;

/// Number of leading codepoints that take part in the ordering.
const SORT_DEPTH: usize = 3;

/// Codepoint at `index`, with missing codepoints counting as 0 so that a shorter operator sorts
/// before a longer one with the same prefix.
#[inline]
fn codepoint_at(entry: &OperatorEntry, index: usize) -> u16 {
    entry.codepoints().get(index).copied().unwrap_or(0)
}

/// Table order: first codepoint, then (for compound operators) the second and third codepoint,
/// then the form.
pub fn compare(a: &OperatorEntry, b: &OperatorEntry) -> Ordering {
    let mut ordering = codepoint_at(a, 0).cmp(&codepoint_at(b, 0));
    if ordering == Ordering::Equal && (a.codepoints().len() > 1 || b.codepoints().len() > 1) {
        ordering = (1..SORT_DEPTH)
            .map(|index| codepoint_at(a, index).cmp(&codepoint_at(b, index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal);
    }
    ordering.then_with(|| a.form().sort_rank().cmp(&b.form().sort_rank()))
}

/// Sort a table in place. Entries that compare equal keep their input order.
pub fn sort_entries(entries: &mut [OperatorEntry]) {
    entries.sort_by(compare);
}
