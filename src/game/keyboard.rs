//! On-screen keyboard coloring state
//!
//! Tracks the best feedback seen so far for each character across a round.
//! Priority is `correct > present > absent`: a key's displayed state only
//! ever upgrades, never downgrades, even when a later guess scores the same
//! character worse.

use crate::core::{Equation, Feedback, Tile};
use rustc_hash::FxHashMap;

/// Display state of a single key, ordered by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyState {
    Absent,
    Present,
    Correct,
}

impl KeyState {
    const fn from_tile(tile: Tile) -> Self {
        match tile {
            Tile::Absent => Self::Absent,
            Tile::Present => Self::Present,
            Tile::Correct => Self::Correct,
        }
    }
}

/// Per-character keyboard state for one round
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    states: FxHashMap<u8, KeyState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the keyboard, upgrading keys monotonically
    pub fn record(&mut self, guess: &Equation, feedback: Feedback) {
        let tiles = feedback.tiles();
        for (i, &ch) in guess.chars().iter().enumerate() {
            let incoming = KeyState::from_tile(tiles[i]);
            self.states
                .entry(ch)
                .and_modify(|current| *current = (*current).max(incoming))
                .or_insert(incoming);
        }
    }

    /// Display state for a key, `None` while the key is unused
    #[must_use]
    pub fn state_of(&self, key: u8) -> Option<KeyState> {
        self.states.get(&key).copied()
    }

    /// Forget everything (new game)
    pub fn reset(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(s: &str) -> Equation {
        Equation::new(s).unwrap()
    }

    fn scored(guess: &str, target: &str) -> (Equation, Feedback) {
        let guess = eq(guess);
        let feedback = Feedback::calculate(&guess, &eq(target));
        (guess, feedback)
    }

    #[test]
    fn unused_keys_have_no_state() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.state_of(b'7'), None);
    }

    #[test]
    fn record_marks_correct_present_absent() {
        let mut keyboard = KeyboardState::new();
        let (guess, feedback) = scored("22+11=33", "11+22=33");
        keyboard.record(&guess, feedback);

        assert_eq!(keyboard.state_of(b'+'), Some(KeyState::Correct));
        assert_eq!(keyboard.state_of(b'='), Some(KeyState::Correct));
        assert_eq!(keyboard.state_of(b'3'), Some(KeyState::Correct));
        assert_eq!(keyboard.state_of(b'1'), Some(KeyState::Present));
        assert_eq!(keyboard.state_of(b'2'), Some(KeyState::Present));
        assert_eq!(keyboard.state_of(b'9'), None);
    }

    #[test]
    fn key_state_upgrades() {
        let mut keyboard = KeyboardState::new();

        // '1' scores present on the first guess, correct once the target
        // itself is guessed
        let (g1, f1) = scored("10+44=54", "40+14=54");
        keyboard.record(&g1, f1);
        assert_eq!(keyboard.state_of(b'1'), Some(KeyState::Present));

        let (g2, f2) = scored("40+14=54", "40+14=54");
        keyboard.record(&g2, f2);
        assert_eq!(keyboard.state_of(b'1'), Some(KeyState::Correct));
        assert_eq!(keyboard.state_of(b'4'), Some(KeyState::Correct));
    }

    #[test]
    fn key_state_never_downgrades() {
        let mut keyboard = KeyboardState::new();

        // First guess: everything correct
        let (g1, f1) = scored("12+34=46", "12+34=46");
        keyboard.record(&g1, f1);
        assert_eq!(keyboard.state_of(b'1'), Some(KeyState::Correct));

        // Later guess against a different round would score '1' worse;
        // simulate by recording a misplaced '1'
        let (g2, f2) = scored("31+15=46", "12+34=46");
        keyboard.record(&g2, f2);
        assert_eq!(keyboard.state_of(b'1'), Some(KeyState::Correct));
    }

    #[test]
    fn reset_clears_all_keys() {
        let mut keyboard = KeyboardState::new();
        let (guess, feedback) = scored("12+34=46", "12+34=46");
        keyboard.record(&guess, feedback);

        keyboard.reset();
        assert_eq!(keyboard.state_of(b'1'), None);
        assert_eq!(keyboard.state_of(b'='), None);
    }

    #[test]
    fn ordering_matches_priority() {
        assert!(KeyState::Correct > KeyState::Present);
        assert!(KeyState::Present > KeyState::Absent);
    }
}
