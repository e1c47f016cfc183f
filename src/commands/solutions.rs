//! Solution finder
//!
//! Lists every dictionary word that can be spelled from a root.

use crate::core::{LetterCounts, normalize};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of searching for every word a root can make
pub struct SolutionsResult {
    pub root: String,
    /// Longest words first, alphabetical within a length
    pub words: Vec<String>,
    /// Word length to number of words of that length
    pub by_length: BTreeMap<usize, usize>,
}

/// Find every word in `dictionary` spellable from `root`, excluding the root itself
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
///
/// let result = find_solutions("silkworm", &["silk", "sill", "worms", "silkworm"]);
/// assert_eq!(result.words, vec!["worms", "silk"]);
/// ```
pub fn find_solutions<S>(root: &str, dictionary: &[S]) -> SolutionsResult
where
    S: AsRef<str> + Sync,
{
    let root = normalize(root);
    let letters = LetterCounts::new(&root);

    let mut words: Vec<String> = dictionary
        .par_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| !word.is_empty() && *word != root && letters.can_spell(word))
        .collect();

    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();

    let mut by_length = BTreeMap::new();
    for word in &words {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    SolutionsResult {
        root,
        words,
        by_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    #[test]
    fn finds_only_spellable_words() {
        let result = find_solutions("silkworm", DICTIONARY);

        assert!(!result.words.is_empty());
        for word in &result.words {
            assert!(letters_fit(word, "silkworm"), "'{word}' not spellable");
        }
        assert!(result.words.iter().any(|w| w == "silk"));
        assert!(result.words.iter().any(|w| w == "worms"));
        assert!(!result.words.iter().any(|w| w == "silkworm"));
        assert!(!result.words.iter().any(|w| w == "sill"));
    }

    #[test]
    fn orders_longest_first_then_alphabetical() {
        let result = find_solutions("silkworm", &["owl", "silk", "milk", "worms", "ow"]);
        assert_eq!(result.words, vec!["worms", "milk", "silk", "owl", "ow"]);
    }

    #[test]
    fn counts_by_length() {
        let result = find_solutions("silkworm", &["owl", "silk", "milk", "worms"]);
        assert_eq!(result.by_length.get(&3), Some(&1));
        assert_eq!(result.by_length.get(&4), Some(&2));
        assert_eq!(result.by_length.get(&5), Some(&1));
        assert_eq!(result.by_length.values().sum::<usize>(), result.words.len());
    }

    #[test]
    fn normalizes_and_dedups_entries() {
        let result = find_solutions(" SilkWorm ", &["Silk", "silk", " milk "]);
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.words, vec!["milk", "silk"]);
    }

    #[test]
    fn empty_dictionary_has_no_solutions() {
        let empty: [&str; 0] = [];
        let result = find_solutions("silkworm", &empty);
        assert!(result.words.is_empty());
        assert!(result.by_length.is_empty());
    }

    fn letters_fit(word: &str, root: &str) -> bool {
        let mut remaining: Vec<char> = root.chars().collect();
        word.chars().all(|letter| match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
                true
            }
            None => false,
        })
    }
}
