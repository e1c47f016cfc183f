//! Candidate normalization

/// Normalize a submitted candidate: trim surrounding whitespace and lowercase
///
/// Two candidates that normalize to the same string are the same word as far
/// as the game is concerned.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("SILK"), "silk");
        assert_eq!(normalize("SiLk"), "silk");
    }

    #[test]
    fn normalize_trims_whitespace_and_newlines() {
        assert_eq!(normalize("  worm  "), "worm");
        assert_eq!(normalize("\tworm\r\n"), "worm");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream "), "ice cream");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("\n\t ").is_empty());
    }
}
