//! Game rules and session state
//!
//! The validator holds the acceptance rules as pure functions; the session
//! owns the root word, the accepted words and the draft, and applies the
//! validator's verdicts.

mod rejection;
mod session;
pub mod validator;

pub use rejection::Rejection;
pub use session::{Session, SessionError, SubmitOutcome};
