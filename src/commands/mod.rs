//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;

pub use check::{CheckResult, CheckStep, run_check};
pub use simple::{run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions};
