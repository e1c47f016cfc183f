//! Letter multisets
//!
//! A `LetterCounts` records how many times each letter occurs in a word, which
//! turns "can this word be spelled from those letters" into a single pass.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// Counting is by `char`, so the caller decides on case by normalizing first.
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut total = 0;
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// True if there are no letters at all
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether `word` can be spelled using these letters
    ///
    /// Each letter of `word` consumes one occurrence; the check fails as soon
    /// as a letter is exhausted. Equivalent to asking whether the letters of
    /// `word` form a sub-multiset of `self`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::new("silkworm");
    /// assert!(root.can_spell("worms"));
    /// assert!(!root.can_spell("sill"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for letter in word.chars() {
            match remaining.get_mut(&letter) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let counts = LetterCounts::new("balloons");
        assert_eq!(counts.count('l'), 2);
        assert_eq!(counts.count('o'), 2);
        assert_eq!(counts.count('b'), 1);
        assert_eq!(counts.count('z'), 0);
        assert_eq!(counts.count('s'), 1);
        assert_eq!(counts.len(), 8);
    }

    #[test]
    fn empty_word_has_no_letters() {
        let counts = LetterCounts::new("");
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
    }

    #[test]
    fn can_spell_subsets() {
        let root = LetterCounts::new("silkworm");
        assert!(root.can_spell("silk"));
        assert!(root.can_spell("worm"));
        assert!(root.can_spell("worms"));
        assert!(root.can_spell("silkworm"));
        assert!(root.can_spell(""));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let root = LetterCounts::new("silkworm");
        // Only one 'l' available
        assert!(!root.can_spell("sill"));
        assert!(!root.can_spell("silly"));

        let root = LetterCounts::new("balloons");
        assert!(root.can_spell("ball"));
        assert!(root.can_spell("balls"));
        // One 's', two 'l's
        assert!(!root.can_spell("bass"));
        assert!(!root.can_spell("balllo"));
    }

    #[test]
    fn can_spell_rejects_missing_letters() {
        let root = LetterCounts::new("silkworm");
        assert!(!root.can_spell("storm"));
        assert!(!root.can_spell("silkworms"));
    }

    #[test]
    fn can_spell_is_case_sensitive() {
        let root = LetterCounts::new("silkworm");
        assert!(!root.can_spell("SILK"));
    }

    #[test]
    fn letter_order_does_not_matter() {
        assert_eq!(LetterCounts::new("stop"), LetterCounts::new("pots"));
        assert_ne!(LetterCounts::new("stop"), LetterCounts::new("stoop"));
    }
}
