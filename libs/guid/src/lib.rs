//! # money-guid
//!
//! GUID (UUID-shaped) value type for the moneybench tools.
//!
//! ## Design Principles
//!
//! - A `Guid` is an immutable canonical string: five hyphenated hex groups
//!   of lengths 8-4-4-4-12, case-insensitive, case preserved verbatim
//! - Strict parsing (`Guid::parse`) surfaces malformed input as an error;
//!   the lenient constructor (`Guid::parse_lenient`) falls back to the
//!   all-zero sentinel, matching the behavior load-script callers expect
//! - Generation is assembled from pseudo-random hex fragments, so output is
//!   valid by construction; the random source is injectable for tests
//!
//! ## Format
//!
//! Examples:
//! - `3fa85f64-5717-4562-b3fc-2c963f66afa6`
//! - `55b2bcd0-2d09-498d-ae62-907a82484753`
//! - `00000000-0000-0000-0000-000000000000` (the empty sentinel)
//!
//! Generated values are not cryptographically secure: they come from a
//! non-cryptographic pseudo-random source and must not be used where
//! unpredictability is a security requirement.

mod error;
mod guid;

pub use error::GuidError;
pub use guid::{Guid, GuidSource};
