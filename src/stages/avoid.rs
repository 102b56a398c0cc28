//! Avoid list stage - breaks up forbidden substrings.

use super::HardeningState;
use crate::policy::VALID_CHARS;

/// Returns the character index at which `needle` first occurs in `text`.
///
/// Matching is literal and case-sensitive. An empty needle matches at 0.
pub fn find_first_occurrence(text: &str, needle: &str) -> Option<usize> {
    text.find(needle)
        .map(|byte_index| text[..byte_index].chars().count())
}

/// Replaces the first character of the first occurrence of each avoid list
/// entry, in list order.
///
/// Exactly one substitution is made per entry. Later occurrences, and any
/// occurrence the substitution itself creates, are left in place.
pub fn scrub_avoid_list(state: &mut HardeningState<'_>) {
    let avoid = state.avoid_list();

    for entry in avoid.iter() {
        let Some(index) = find_first_occurrence(&state.text(), entry) else {
            continue;
        };
        let replacement = state.draw(VALID_CHARS);
        state.replace(index, replacement);
    }
}
