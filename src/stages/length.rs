//! Length stages - pads short passwords and trims long ones.

use super::HardeningState;
use crate::policy::{MAX_LENGTH, MIN_LENGTH, VALID_CHARS};

/// Appends random valid characters until the password is [`MIN_LENGTH`] long.
pub fn pad_to_minimum(state: &mut HardeningState<'_>) {
    while state.len() < MIN_LENGTH {
        let c = state.draw(VALID_CHARS);
        state.push(c);
    }
}

/// Drops characters from the front until the password is at most
/// [`MAX_LENGTH`] long.
pub fn trim_to_maximum(state: &mut HardeningState<'_>) {
    let excess = state.len().saturating_sub(MAX_LENGTH);
    state.drop_front(excess);
}
