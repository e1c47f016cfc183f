//! Dictionary oracle
//!
//! The game never decides on its own whether a string is a real word; it asks
//! a [`SpellChecker`]. The built-in implementation is backed by the embedded
//! word list, and tests substitute their own fixed vocabularies.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// The single language tag the game plays in
pub const LANGUAGE: &str = "en";

/// A capability that judges whether a word is spelled correctly
pub trait SpellChecker {
    /// Returns true if no part of `word` is flagged as misspelled in `language`
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool {
        (**self).is_spelled_correctly(word, language)
    }
}

/// Spell checker backed by a set of known words
///
/// Lookups are case-insensitive. Only [`LANGUAGE`] is supported; any other
/// language tag reports every word as misspelled.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Dictionary over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::new(DICTIONARY);
        tracing::debug!(count = dictionary.len(), "built embedded dictionary");
        dictionary
    }

    /// Check whether the dictionary knows `word`
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListDictionary {
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool {
        language == LANGUAGE && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dictionary_knows_nothing() {
        let dictionary = WordListDictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("silk"));
        assert!(!dictionary.is_spelled_correctly("silk", LANGUAGE));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let dictionary = WordListDictionary::new(["Silk", "worm"]);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("SILK"));
        assert!(dictionary.contains("Worm"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn blank_entries_are_dropped() {
        let dictionary = WordListDictionary::new(["silk", "", "   "]);
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn other_languages_are_unsupported() {
        let dictionary = WordListDictionary::new(["silk"]);
        assert!(dictionary.is_spelled_correctly("silk", "en"));
        assert!(!dictionary.is_spelled_correctly("silk", "fr"));
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        for word in ["silk", "worm", "worms", "milk", "silkworm"] {
            assert!(dictionary.contains(word), "missing '{word}'");
        }
        assert!(!dictionary.contains("klimsow"));
        assert!(!dictionary.contains("sill y"));
    }

    #[test]
    fn references_delegate() {
        let dictionary = WordListDictionary::new(["silk"]);
        let by_ref: &dyn SpellChecker = &dictionary;
        assert!(by_ref.is_spelled_correctly("silk", LANGUAGE));
        assert!(SpellChecker::is_spelled_correctly(&by_ref, "silk", LANGUAGE));
    }
}
