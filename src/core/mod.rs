//! Core domain types for the word game
//!
//! Pure, dependency-light building blocks: candidate normalization and
//! letter multisets. Everything here is deterministic and easy to test.

mod candidate;
mod letters;

pub use candidate::normalize;
pub use letters::LetterCounts;
