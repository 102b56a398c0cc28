//! Repeated character analysis.

use std::collections::HashMap;

/// Occurrence counts and repeat positions for one snapshot of a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatAnalysis {
    counts: HashMap<char, usize>,
    // Ordered by the index of each character's first repeat.
    repeated: Vec<(char, Vec<usize>)>,
}

impl RepeatAnalysis {
    /// Total number of occurrences of `c`.
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<char, usize> {
        &self.counts
    }

    /// Indices at which `c` reappears after its first occurrence, ascending.
    ///
    /// Returns `None` for characters that occur at most once.
    pub fn repeated_indices(&self, c: char) -> Option<&[usize]> {
        self.repeated
            .iter()
            .find(|(repeated, _)| *repeated == c)
            .map(|(_, indices)| indices.as_slice())
    }

    /// Iterates over repeated characters in the order their first repeat
    /// appears in the buffer.
    pub fn repeats(&self) -> impl Iterator<Item = (char, &[usize])> {
        self.repeated
            .iter()
            .map(|(c, indices)| (*c, indices.as_slice()))
    }
}

/// Counts every character in `buffer` and records where each one repeats.
pub fn analyze_repeats(buffer: &[char]) -> RepeatAnalysis {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut slots: HashMap<char, usize> = HashMap::new();
    let mut repeated: Vec<(char, Vec<usize>)> = Vec::new();

    for (index, &c) in buffer.iter().enumerate() {
        let count = counts.entry(c).or_insert(0);
        *count += 1;
        if *count == 1 {
            continue;
        }

        let slot = *slots.entry(c).or_insert_with(|| {
            repeated.push((c, Vec::new()));
            repeated.len() - 1
        });
        repeated[slot].1.push(index);
    }

    RepeatAnalysis { counts, repeated }
}
