//! Reasons a candidate can be turned down

use std::fmt;

/// Why a submitted word was not accepted
///
/// Variants are listed in the order the rules are evaluated; a failed
/// submission reports exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word is already in the accepted list
    AlreadyUsed,
    /// The root word does not have the letters to spell it
    NotSpellableFromRoot { root: String },
    /// The dictionary does not recognize the word
    NotARealWord,
    /// The word is the root word itself
    SameAsRoot,
}

impl Rejection {
    /// Short headline for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "word used already",
            Self::NotSpellableFromRoot { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::SameAsRoot => "Word is the root",
        }
    }

    /// Longer explanation shown under the title
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotSpellableFromRoot { root } => {
                format!("you can't spell that word from '{root}'!")
            }
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::SameAsRoot => "That's the word you started with!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
