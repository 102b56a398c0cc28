//! Character class stages - make sure each required class is present.
//!
//! These stages append and never trim, so they can push the password past
//! `MAX_LENGTH`. That length is not enforced again.

use super::HardeningState;
use crate::policy::CharacterClass;

fn ensure_class(state: &mut HardeningState<'_>, class: CharacterClass) {
    while !state.buffer().iter().any(|&c| class.contains(c)) {
        let c = state.draw(class.alphabet());
        state.push(c);
    }
}

pub fn ensure_lowercase(state: &mut HardeningState<'_>) {
    ensure_class(state, CharacterClass::Lowercase);
}

pub fn ensure_uppercase(state: &mut HardeningState<'_>) {
    ensure_class(state, CharacterClass::Uppercase);
}

pub fn ensure_digit(state: &mut HardeningState<'_>) {
    ensure_class(state, CharacterClass::Digit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avoid_list::AvoidList;
    use crate::policy::MAX_LENGTH;
    use crate::random::testing::CyclingSource;

    #[test]
    fn test_missing_classes_are_appended() {
        let avoid = AvoidList::default();
        let mut source = CyclingSource::default();
        let mut state = HardeningState::new("!!!!!!!", &avoid, &mut source);

        ensure_lowercase(&mut state);
        ensure_uppercase(&mut state);
        ensure_digit(&mut state);
        assert_eq!(state.text(), "!!!!!!!aB2");
        assert_eq!(state.operations(), 3);
    }

    #[test]
    fn test_present_class_is_left_alone() {
        let avoid = AvoidList::default();
        let mut source = CyclingSource::default();
        let mut state = HardeningState::new("HasAll123", &avoid, &mut source);

        ensure_lowercase(&mut state);
        ensure_uppercase(&mut state);
        ensure_digit(&mut state);
        assert_eq!(state.text(), "HasAll123");
        assert_eq!(state.operations(), 0);
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let avoid = AvoidList::default();
        let mut source = CyclingSource::default();
        let mut state = HardeningState::new("ÀÉÎ", &avoid, &mut source);

        ensure_uppercase(&mut state);
        assert_eq!(state.text(), "ÀÉÎA");
    }

    #[test]
    fn test_appending_can_exceed_max_length() {
        let avoid = AvoidList::default();
        let mut source = CyclingSource::default();
        let full = "x".repeat(MAX_LENGTH);
        let mut state = HardeningState::new(&full, &avoid, &mut source);

        ensure_uppercase(&mut state);
        ensure_digit(&mut state);
        assert_eq!(state.len(), MAX_LENGTH + 2);
    }
}
