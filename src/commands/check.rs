//! Non-interactive word checking
//!
//! Plays a fixed list of submissions against a chosen root and records what
//! happened to each one.

use crate::dictionary::SpellChecker;
use crate::game::{Session, SessionError, SubmitOutcome};

/// One submission and its outcome
pub struct CheckStep {
    pub candidate: String,
    pub outcome: SubmitOutcome,
}

/// Result of checking a list of words
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub accepted: Vec<String>,
}

impl CheckResult {
    /// Number of submissions that were rejected
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, SubmitOutcome::Rejected(_)))
            .count()
    }
}

/// Submit `words` in order to a fresh session rooted at `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn run_check<S, D>(root: &str, words: &[S], checker: &D) -> Result<CheckResult, SessionError>
where
    S: AsRef<str>,
    D: SpellChecker + ?Sized,
{
    let mut session = Session::with_root(root)?;

    let steps = words
        .iter()
        .map(|word| CheckStep {
            candidate: word.as_ref().to_string(),
            outcome: session.submit(word.as_ref(), checker),
        })
        .collect();

    Ok(CheckResult {
        root: session.root().to_string(),
        steps,
        accepted: session.accepted().iter().cloned().collect(),
    })
}
