//! A two-variant `Success` / `Failure` container with a closed combinator algebra.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn factorial_to_string(x: i64) -> Outcome<String, String> {
//!     if x < 0 {
//!         return Outcome::failure("Number is too small!".to_string());
//!     }
//!     Outcome::success((1..=x).product::<i64>().to_string())
//! }
//!
//! assert_eq!(Outcome::success(5).and_then(factorial_to_string), Outcome::success("120".to_string()));
//! assert!(Outcome::success(-3).and_then(factorial_to_string).is_err());
//! ```
//!
//! ## Recovering from failure
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let port = Outcome::<u16, &str>::failure("PORT not set")
//!     .inspect_err(|e| eprintln!("falling back: {e}"))
//!     .or_else(|_| Outcome::<u16, &str>::success(8080))
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//! ```
//!
//! ## Checked unwrapping
//!
//! ```
//! use outcome_rail::{Outcome, UnwrapMismatch};
//!
//! let err = Outcome::<i32, &str>::success(1).try_unwrap_err().unwrap_err();
//! assert_eq!(err.kind(), UnwrapMismatch::ExpectedFailure);
//! assert_eq!(err.to_string(), "Failed to unwrap Err: 1");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Control-flow macros
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits lifting foreign types into Outcome
pub mod traits;
/// UnwrapError and supporting allocation aliases
pub mod types;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{UnwrapError, UnwrapMismatch};
