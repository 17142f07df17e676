//! Guess feedback calculation and representation
//!
//! Feedback encodes the per-position result of a guess using base-3 encoding:
//! - 0 = Absent (character not in target, or all occurrences used up)
//! - 1 = Present (character in target, wrong position)
//! - 2 = Correct (character in correct position)
//!
//! The feedback is stored as a single u16 value (0-6560), where each of the
//! 8 positions contributes digit × 3^position to the total.

use super::Equation;
use super::equation::TARGET_LEN;

/// Per-position classification of one guess character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

/// Feedback for a full 8-character guess
///
/// Represents the colored feedback as a single value.
/// Value range: 0-6560 (3^8 - 1 = 6561 possible feedbacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u16);

impl Feedback {
    /// All correct (perfect match): 3^8 - 1
    pub const PERFECT: Self = Self(6560);

    /// Create a new feedback from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 6561
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!(value < 6561, "Feedback value must be < 3^8");
        Self(value)
    }

    /// Get the raw feedback value (0-6560)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 6560
    }

    /// Calculate the feedback when `guess` is guessed and `target` is the answer
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate characters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (correct) and remove them from the
    ///    pool of available target characters
    /// 2. Second pass: mark present-but-wrong-position from the remaining
    ///    pool, consuming it greedily left to right
    /// 3. Encode as base-3 number
    ///
    /// A character fully consumed by exact matches elsewhere is marked
    /// absent, never double-credited as present.
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        let mut result = [0u16; TARGET_LEN];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..TARGET_LEN {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = 2;

                // Remove from available pool
                let ch = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&ch) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but character still available
        #[allow(clippy::needless_range_loop)]
        for i in 0..TARGET_LEN {
            if result[i] == 0 {
                let ch = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&ch)
                    && *count > 0
                {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut feedback = 0u16;
        let mut multiplier = 1u16;
        for &digit in &result {
            feedback += digit * multiplier;
            multiplier *= 3;
        }

        Self(feedback)
    }

    /// Decode into per-position tiles, ordered by guess position
    #[must_use]
    pub fn tiles(self) -> [Tile; TARGET_LEN] {
        let mut tiles = [Tile::Absent; TARGET_LEN];
        let mut val = self.0;

        for tile in &mut tiles {
            *tile = match val % 3 {
                2 => Tile::Correct,
                1 => Tile::Present,
                _ => Tile::Absent,
            };
            val /= 3;
        }

        tiles
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..TARGET_LEN {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..TARGET_LEN {
            if val % 3 == 1 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles()
            .iter()
            .map(|tile| match tile {
                Tile::Correct => '🟩',
                Tile::Present => '🟨',
                Tile::Absent => '⬜',
            })
            .collect()
    }
}
