//! Game session state

use super::Rejection;
use super::validator;
use crate::core::normalize;
use crate::dictionary::SpellChecker;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::VecDeque;
use std::fmt;

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The word list had no usable entries
    EmptyWordList,
    /// An explicitly requested root word was blank
    BlankRoot,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no root words"),
            Self::BlankRoot => write!(f, "Root word must not be blank"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Result of submitting a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The normalized word was added to the front of the accepted list
    Accepted(String),
    /// The word broke a rule; nothing changed
    Rejected(Rejection),
    /// The candidate was blank; nothing changed
    Ignored,
}

/// An active game: one root word and the words found from it so far
///
/// A session only exists once started, and stays active until dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    accepted: VecDeque<String>,
    draft: String,
}

impl Session {
    /// Start a session with a root picked uniformly at random from `word_list`
    ///
    /// Blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyWordList`] if there is nothing to pick from.
    pub fn start<S: AsRef<str>>(word_list: &[S]) -> Result<Self, SessionError> {
        Self::start_with_rng(word_list, &mut rand::rng())
    }

    /// Like [`Session::start`], drawing from the given random number generator
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyWordList`] if there is nothing to pick from.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::game::Session;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = Session::start_with_rng(&["silkworm"], &mut rng).unwrap();
    /// assert_eq!(session.root(), "silkworm");
    /// ```
    pub fn start_with_rng<S, R>(word_list: &[S], rng: &mut R) -> Result<Self, SessionError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let candidates: Vec<&str> = word_list
            .iter()
            .map(|word| word.as_ref().trim())
            .filter(|word| !word.is_empty())
            .collect();

        let root = candidates.choose(rng).ok_or(SessionError::EmptyWordList)?;
        let session = Self::with_root(root)?;

        tracing::info!(root = %session.root, choices = candidates.len(), "session started");
        Ok(session)
    }

    /// Start a session with a specific root word
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BlankRoot`] if `root` is blank.
    pub fn with_root(root: &str) -> Result<Self, SessionError> {
        let root = normalize(root);
        if root.is_empty() {
            return Err(SessionError::BlankRoot);
        }

        Ok(Self {
            root,
            accepted: VecDeque::new(),
            draft: String::new(),
        })
    }

    /// The word whose letters every answer is built from
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> &VecDeque<String> {
        &self.accepted
    }

    /// The in-progress input
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mutable access to the in-progress input, for editing
    #[inline]
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Submit a candidate word
    ///
    /// On acceptance the word is prepended to the accepted list and the draft
    /// is cleared. A rejected or blank candidate leaves the session untouched,
    /// including the draft.
    pub fn submit<D: SpellChecker + ?Sized>(
        &mut self,
        candidate: &str,
        checker: &D,
    ) -> SubmitOutcome {
        match validator::accept(candidate, self, checker) {
            Ok(Some(word)) => {
                tracing::debug!(word = %word, "word accepted");
                self.accepted.push_front(word.clone());
                self.draft.clear();
                SubmitOutcome::Accepted(word)
            }
            Ok(None) => SubmitOutcome::Ignored,
            Err(rejection) => {
                tracing::debug!(candidate, reason = rejection.title(), "word rejected");
                SubmitOutcome::Rejected(rejection)
            }
        }
    }

    /// Submit whatever is currently in the draft
    pub fn submit_draft<D: SpellChecker + ?Sized>(&mut self, checker: &D) -> SubmitOutcome {
        let candidate = self.draft.clone();
        self.submit(&candidate, checker)
    }

    #[cfg(test)]
    pub(crate) fn force_accept(&mut self, word: &str) {
        self.accepted.push_front(normalize(word));
    }
}
