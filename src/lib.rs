//! Word Scramble
//!
//! A word game: a root word is picked at random, and the player finds other
//! words that can be spelled from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{Rejection, Session, SubmitOutcome};
//!
//! let dictionary = WordListDictionary::embedded();
//! let mut session = Session::with_root("silkworm").unwrap();
//!
//! assert_eq!(
//!     session.submit("silk", &dictionary),
//!     SubmitOutcome::Accepted("silk".to_string())
//! );
//! assert_eq!(
//!     session.submit("SILK", &dictionary),
//!     SubmitOutcome::Rejected(Rejection::AlreadyUsed)
//! );
//! ```

// Core domain types
pub mod core;

// Spell checking
pub mod dictionary;

// Rules and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;

#[cfg(test)]
mod test_utils;
