//! Supporting types for [`Outcome`](crate::Outcome).
//!
//! The only error this crate produces on its own is [`UnwrapError`], raised when a
//! caller asks for the payload of the variant an outcome does not hold.
pub mod alloc_type;
pub mod unwrap_error;

pub use unwrap_error::{UnwrapError, UnwrapMismatch};
