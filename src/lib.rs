//! # Stratum Errors
//!
//! Two-tier error classification: libraries define fine-grained,
//! domain-specific error kinds; callers compare against coarse, portable
//! generic conditions without knowing the library's types.
//!
//! ## Design Philosophy
//!
//! 1. **Errors are values, not control flow** - the [`ErrorCode`] wrapper
//!    *is* the reporting mechanism; nothing in this crate throws
//! 2. **Classification is delegated** - the wrapper holds only a numeric
//!    code and a category reference; names, messages, and equivalence live
//!    on the category singleton
//! 3. **Identity is part of the protocol** - two values share a domain iff
//!    they reference the identical category instance
//! 4. **Lookups never fail** - unknown codes degrade to `"unknown"` and
//!    an absent mapping instead of corrupting output or panicking
//! 5. **Registration is static** - a domain opts in at compile time by
//!    implementing [`ErrorCodeKind`]; there is no runtime registry
//!
//! ## The Two Tiers
//!
//! A *domain error kind* is a closed enum of numeric values owned by one
//! library ([`ConversionError`] is the shipped reference domain). A
//! *generic condition* ([`Generic`]) is a coarse classification shared
//! across unrelated domains. Each domain's [`ErrorCategory`] defines the
//! equivalence mapping between the two, so this holds even though the
//! caller never imports the domain enum:
//!
//! ```rust
//! use stratum_errors::{ConversionError, ErrorCode, Generic};
//!
//! let ec: ErrorCode = ConversionError::IllegalChar.into();
//!
//! assert!(ec == Generic::InvalidArgument);
//! assert!(ec != Generic::ResultOutOfRange);
//! assert_eq!(ec.message(), "got non-digit char when converting to a number");
//! assert_eq!(ec.to_string(), "conversion:2");
//! ```
//!
//! ## Reporting From Fallible Code
//!
//! Domains return their own kinds; the implicit conversion produces the
//! generic wrapper at the boundary:
//!
//! ```rust
//! use stratum_errors::{ConversionError, Generic, Result};
//!
//! fn parse_digits(input: &str) -> Result<u64> {
//!     if input.is_empty() {
//!         return Err(ConversionError::EmptyString.into());
//!     }
//!     let mut value: u64 = 0;
//!     for c in input.chars() {
//!         let digit = c.to_digit(10).ok_or(ConversionError::IllegalChar)?;
//!         value = value
//!             .checked_mul(10)
//!             .and_then(|v| v.checked_add(u64::from(digit)))
//!             .ok_or(ConversionError::TooLong)?;
//!     }
//!     Ok(value)
//! }
//!
//! let err = parse_digits("9999999999999999999999").unwrap_err();
//! assert!(err == Generic::ResultOutOfRange);
//!
//! let err = parse_digits("12a").unwrap_err();
//! assert!(err == Generic::InvalidArgument);
//! assert_eq!(parse_digits("1204").unwrap(), 1204);
//! ```
//!
//! ## Concurrency
//!
//! Category singletons initialize lazily, exactly once, even when multiple
//! threads race to first-access them; everything is read-only afterwards.
//! Every operation is synchronous and non-blocking.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod category;
pub mod code;
pub mod condition;
pub mod conversion;
pub mod report;

pub use category::{same_category, ErrorCategory};
pub use code::{ErrorCode, ErrorCodeKind};
pub use condition::{generic_category, Condition, ConditionKind, Generic};
pub use conversion::{conversion_category, ConversionError};
pub use report::Report;

/// Type alias for Results carrying an [`ErrorCode`].
pub type Result<T> = result::Result<T, ErrorCode>;
