//! Word acceptance rules
//!
//! Each rule is an independent predicate. [`accept`] normalizes a candidate
//! and runs the rules in a fixed order, stopping at the first one that fails:
//!
//! 1. [`is_original`] - not already accepted
//! 2. [`is_possible`] - spellable from the root's letters
//! 3. [`is_real`] - recognized by the spell checker
//! 4. [`is_not_root`] - not the root word itself

use super::{Rejection, Session};
use crate::core::{LetterCounts, normalize};
use crate::dictionary::{LANGUAGE, SpellChecker};

/// True if `candidate` is not among the `accepted` words
///
/// Comparison ignores case and surrounding whitespace on both sides.
///
/// # Examples
/// ```
/// use word_scramble::game::validator::is_original;
///
/// assert!(is_original("worm", ["silk"]));
/// assert!(!is_original(" SILK ", ["silk"]));
/// ```
#[must_use]
pub fn is_original<I>(candidate: &str, accepted: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let candidate = normalize(candidate);
    !accepted
        .into_iter()
        .any(|word| normalize(word.as_ref()) == candidate)
}

/// True if every letter of `candidate` is available in `root`, with multiplicity
///
/// Both words are compared as given; normalize them first.
///
/// # Examples
/// ```
/// use word_scramble::game::validator::is_possible;
///
/// assert!(is_possible("silk", "silkworm"));
/// assert!(!is_possible("silly", "silkworm"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    LetterCounts::new(root).can_spell(candidate)
}

/// True if the spell checker flags nothing in `candidate`
#[must_use]
pub fn is_real<D: SpellChecker + ?Sized>(candidate: &str, checker: &D) -> bool {
    checker.is_spelled_correctly(candidate, LANGUAGE)
}

/// True unless `candidate` is the root word
#[must_use]
pub fn is_not_root(candidate: &str, root: &str) -> bool {
    candidate != root
}

/// Decide whether `candidate` may join the session's accepted words
///
/// Returns `Ok(None)` when the candidate is blank after normalization; that is
/// not treated as a rejection. Otherwise returns the normalized word, or the
/// first rule it broke.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first failing rule.
pub fn accept<D: SpellChecker + ?Sized>(
    candidate: &str,
    session: &Session,
    checker: &D,
) -> Result<Option<String>, Rejection> {
    let answer = normalize(candidate);
    if answer.is_empty() {
        return Ok(None);
    }

    if !is_original(&answer, session.accepted()) {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_possible(&answer, session.root()) {
        return Err(Rejection::NotSpellableFromRoot {
            root: session.root().to_string(),
        });
    }

    if !is_real(&answer, checker) {
        return Err(Rejection::NotARealWord);
    }

    if !is_not_root(&answer, session.root()) {
        return Err(Rejection::SameAsRoot);
    }

    Ok(Some(answer))
}
