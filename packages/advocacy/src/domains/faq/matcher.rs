//! Keyword scoring for the FAQ assistant.
//!
//! An entry scores the summed length of every keyword found in the lowercased
//! input, so longer (more specific) phrases win. The first entry to reach the
//! top score is kept; later entries must beat it strictly.

use super::models::FaqEntry;

pub fn score(entry: &FaqEntry, lowered_input: &str) -> usize {
    entry
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty() && lowered_input.contains(k.as_str()))
        .map(|k| k.chars().count())
        .sum()
}

/// Best entry for the input, or None when nothing scores above zero.
pub fn find_best_match<'a>(entries: &'a [FaqEntry], input: &str) -> Option<&'a FaqEntry> {
    let lowered = input.to_lowercase();
    let mut best: Option<&FaqEntry> = None;
    let mut highest = 0;

    for entry in entries {
        let s = score(entry, &lowered);
        if s > highest {
            highest = s;
            best = Some(entry);
        }
    }

    best
}
