//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let v: Outcome<i32, &str> = Ok(1).into_outcome();
//! assert_eq!(v.unwrap(), 1);
//! ```

pub use crate::try_outcome;

pub use crate::outcome::Outcome;
pub use crate::types::{UnwrapError, UnwrapMismatch};

pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
