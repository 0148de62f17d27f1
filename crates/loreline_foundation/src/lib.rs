//! Error taxonomy, field types, and random values for Loreline.
//!
//! This crate provides:
//! - [`ParseError`] - The enumerated error codes a parsed line can produce
//! - [`RegError`] - Errors from registering a malformed directive format
//! - [`FieldType`] - Type descriptors for directive fields
//! - [`Random`] - Dice-like random values (`base + NdS + M(bonus)`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod random;
pub mod roll;
pub mod types;

pub use error::{ParseError, ParseResult, RegError};
pub use random::{Aspect, MAX_DEPTH, Random};
pub use roll::{damroll, m_bonus, rand_normal};
pub use types::FieldType;
