//! Repeat suppression stage - limits how often a character may occur.

use super::HardeningState;
use crate::analysis::analyze_repeats;
use crate::policy::{MAX_OCCURRENCES, VALID_CHARS};

/// Replaces surplus occurrences of characters that appear more than
/// [`MAX_OCCURRENCES`] times.
///
/// For each such character, every repeat except the last is overwritten, so
/// the first occurrence and the final repeat survive. Replacements are drawn
/// independently and are not re-checked, so a replacement may itself
/// collide with an existing character.
pub fn suppress_repeats(state: &mut HardeningState<'_>) {
    let analysis = analyze_repeats(state.buffer());

    for (c, indices) in analysis.repeats() {
        if analysis.count(c) <= MAX_OCCURRENCES {
            continue;
        }
        let Some((_, surplus)) = indices.split_last() else {
            continue;
        };
        for &index in surplus {
            let replacement = state.draw(VALID_CHARS);
            state.replace(index, replacement);
        }
    }
}
