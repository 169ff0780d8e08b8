//! Extension traits that lift foreign types into [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//! use outcome_rail::Outcome;
//!
//! let lifted = "7".parse::<u8>().into_outcome();
//! assert!(lifted.is_ok());
//!
//! assert_eq!(None::<u8>.ok_or_failure("absent"), Outcome::failure("absent"));
//! ```

pub mod into_outcome;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
