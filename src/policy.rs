//! Hardening policy constants and character classes.

/// Minimum length the padding stage brings the password up to.
pub const MIN_LENGTH: usize = 7;

/// Maximum length the trimming stage cuts the password down to.
///
/// Class repair runs after trimming, so a hardened password may end up a
/// few characters longer than this.
pub const MAX_LENGTH: usize = 22;

/// Maximum number of times a single character may occur once repeats
/// have been suppressed.
pub const MAX_OCCURRENCES: usize = 2;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";

/// Replacement alphabet for padding, repeat suppression and avoid-list repair.
pub const VALID_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A character class every hardened password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
}

impl CharacterClass {
    /// Alphabet used to manufacture a character of this class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
        }
    }

    /// Returns `true` if `c` belongs to this class (ASCII only).
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Digit => c.is_ascii_digit(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
        }
    }
}
