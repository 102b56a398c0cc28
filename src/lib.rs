//! Password hardening library
//!
//! This library turns an arbitrary password into one that satisfies a fixed
//! policy, counting every edit it had to make along the way.
//!
//! # Policy
//!
//! Stages run once, in this order:
//!
//! 1. pad to at least 7 characters
//! 2. trim from the front to at most 22 characters
//! 3. add a lowercase letter, an uppercase letter and a digit if missing
//! 4. reduce any character occurring more than twice to two occurrences
//! 5. break up the first occurrence of each avoid list entry
//!
//! Later stages do not re-check earlier ones, so a hardened password can be
//! longer than 22 characters, and avoid list repair can leave a character
//! with three occurrences.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-harden` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_harden::{AvoidList, HardenedPassword};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let avoid = AvoidList::from_path("avoid.txt").expect("Failed to load avoid list");
//! let password = SecretString::new("abc".to_string().into());
//!
//! let hardened = HardenedPassword::new(&password, &avoid);
//!
//! println!("Secure: {}", hardened.final_password().expose_secret());
//! println!("Operations: {}", hardened.operation_count());
//! ```

// Internal modules
mod analysis;
mod avoid_list;
mod hardener;
mod policy;
mod random;
mod stages;

// Public API
pub use analysis::{RepeatAnalysis, analyze_repeats};
pub use avoid_list::{AVOID_LIST_PATH_ENV, AvoidList, AvoidListError};
pub use hardener::{HardenedPassword, StageReport};
pub use policy::{
    CharacterClass, DIGITS, LOWERCASE, MAX_LENGTH, MAX_OCCURRENCES, MIN_LENGTH, UPPERCASE,
    VALID_CHARS,
};
pub use random::{CharacterSource, RngSource};
pub use stages::find_first_occurrence;

#[cfg(feature = "async")]
pub use hardener::harden_password_tx;
