//! The [`Outcome`] type and its combinator algebra.
//!
//! An outcome is either a [`Success`](Outcome::Success) holding a value or a
//! [`Failure`](Outcome::Failure) holding an error. Operations fall into a few groups:
//!
//! - Predicates: `is_ok`, `is_err`, `is_ok_and`, `is_err_and`
//! - Extraction into `Option`: `ok`, `err`
//! - Inspection: `inspect`, `inspect_err`
//! - Fallback: `unwrap_or`, `unwrap_or_else`, `unwrap_or_default`
//! - Combinators: `and`, `or` (eager) and `and_then`, `or_else` (lazy)
//! - Checked extraction: `try_unwrap`, `try_expect` and their panicking forms
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! let total = parse("20")
//!     .and_then(|x| parse("22").and_then(|y| Outcome::success(x + y)))
//!     .unwrap_or(0);
//! assert_eq!(total, 42);
//! ```
pub mod core;
pub mod trace;
pub mod unwrap;

pub use self::core::*;
