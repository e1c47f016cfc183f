//! Shared fixtures for unit tests

use crate::dictionary::SpellChecker;
use crate::game::Session;

/// Spell checker that recognizes everything
pub struct AcceptAll;

impl SpellChecker for AcceptAll {
    fn is_spelled_correctly(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Spell checker that recognizes nothing
pub struct RejectAll;

impl SpellChecker for RejectAll {
    fn is_spelled_correctly(&self, _word: &str, _language: &str) -> bool {
        false
    }
}

/// A fresh session rooted at "silkworm"
pub fn silkworm_session() -> Session {
    Session::with_root("silkworm").unwrap()
}
