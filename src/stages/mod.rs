//! Password hardening stages
//!
//! Each stage repairs one aspect of the policy by mutating the shared
//! [`HardeningState`]. Stages run once, in a fixed order, and never re-check
//! the work of earlier stages.

mod avoid;
mod classes;
mod length;
mod repeats;

pub use avoid::{find_first_occurrence, scrub_avoid_list};
pub use classes::{ensure_digit, ensure_lowercase, ensure_uppercase};
pub use length::{pad_to_minimum, trim_to_maximum};
pub use repeats::suppress_repeats;

use crate::avoid_list::AvoidList;
use crate::random::CharacterSource;

/// Signature shared by every stage function.
pub type Stage = fn(&mut HardeningState<'_>);

/// Mutable state threaded through the stages.
///
/// The buffer can only change through [`push`](Self::push),
/// [`drop_front`](Self::drop_front) and [`replace`](Self::replace). Every
/// character appended, removed or overwritten counts as one operation.
pub struct HardeningState<'a> {
    buffer: Vec<char>,
    operations: usize,
    source: &'a mut dyn CharacterSource,
    avoid: &'a AvoidList,
}

impl<'a> HardeningState<'a> {
    pub fn new(
        password: &str,
        avoid: &'a AvoidList,
        source: &'a mut dyn CharacterSource,
    ) -> Self {
        Self {
            buffer: password.chars().collect(),
            operations: 0,
            source,
            avoid,
        }
    }

    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn operations(&self) -> usize {
        self.operations
    }

    pub fn avoid_list(&self) -> &'a AvoidList {
        self.avoid
    }

    /// Current buffer contents as a string.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Draws a fresh character from `alphabet`.
    pub fn draw(&mut self, alphabet: &[u8]) -> char {
        self.source.pick(alphabet)
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
        self.operations += 1;
    }

    /// Removes up to `n` characters from the front, one operation each.
    pub fn drop_front(&mut self, n: usize) {
        let n = n.min(self.len());
        self.buffer.drain(..n);
        self.operations += n;
    }

    /// Overwrites the character at `index`, if it is in bounds.
    pub fn replace(&mut self, index: usize, c: char) {
        if let Some(slot) = self.buffer.get_mut(index) {
            *slot = c;
            self.operations += 1;
        }
    }

    /// Consumes the state, returning the buffer and the operation count.
    pub fn finish(self) -> (Vec<char>, usize) {
        (self.buffer, self.operations)
    }
}
