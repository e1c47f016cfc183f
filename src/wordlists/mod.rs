//! Word lists for the game
//!
//! The start-word list a session picks its root from, and the dictionary the
//! built-in spell checker recognizes. Both are embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_eight_letters() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Root '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for root in START_WORDS {
            assert!(dictionary.contains(root), "Root '{root}' not in dictionary");
        }
    }

    #[test]
    fn lists_are_not_empty() {
        assert!(START_WORDS_COUNT > 0);
        assert!(DICTIONARY_COUNT > START_WORDS_COUNT);
    }
}
