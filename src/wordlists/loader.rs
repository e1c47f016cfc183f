//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Each line is trimmed and lowercased; blank lines are skipped. An empty
/// result is not an error here, callers decide whether they can work with it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);

    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let input = &["silkworm", "absolute", "airplane"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "absolute", "airplane"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("silkworm\n\n  \nabsolute\n");
        assert_eq!(words, vec!["silkworm", "absolute"]);
    }

    #[test]
    fn words_from_text_normalizes_lines() {
        let words = words_from_text("  SilkWorm \r\nAIRPLANE");
        assert_eq!(words, vec!["silkworm", "airplane"]);
    }

    #[test]
    fn words_from_text_blank_input() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("definitely/not/a/real/start.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Silkworm\n\nabsolute\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["silkworm", "absolute"]);
    }
}
