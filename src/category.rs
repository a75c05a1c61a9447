//! Error category protocol - the descriptor that gives a domain's numeric
//! codes a name, messages, and a mapping onto generic conditions.
//!
//! # Architecture
//!
//! A category is a process-wide singleton: one `'static` instance per domain
//! kind type, created lazily on first access and immutable afterwards.
//! **Identity** of that instance is part of the comparison protocol - two
//! error values belong to the same domain iff they reference the same
//! category instance, not merely categories with equal names.
//!
//! # Failure Semantics
//!
//! None of the category operations can fail. Unknown codes degrade to a
//! generic `"unknown"` message and an absent equivalence mapping; the
//! classification layer itself never becomes a source of errors.
//!
//! # Dispatch Model
//!
//! Implementations are expected to resolve messages and equivalences through
//! lookup tables built once at category construction (see
//! [`crate::conversion`]). The trait itself only fixes the contract.

use std::borrow::Cow;
use std::ptr;

use crate::code::ErrorCode;
use crate::condition::Condition;

/// Descriptor for one domain of numeric error codes.
///
/// Implementors provide a stable name, a human-readable message per code,
/// and the equivalence mapping onto coarse generic conditions. All methods
/// are pure given the immutable singleton state and must never panic.
///
/// # Singleton Contract
///
/// Exactly one instance per implementing type exists for the lifetime of
/// the process, reachable as `&'static dyn ErrorCategory`. Construct it
/// through a thread-safe lazy static so racing first accesses observe a
/// single initialization (see [`crate::conversion::conversion_category`]).
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use stratum_errors::{Condition, ErrorCategory, Generic};
/// use stratum_errors::condition::ConditionKind;
///
/// struct ChecksumCategory;
///
/// impl ErrorCategory for ChecksumCategory {
///     fn name(&self) -> &'static str {
///         "checksum"
///     }
///
///     fn message(&self, code: u16) -> Cow<'static, str> {
///         Cow::Borrowed(match code {
///             0 => "success",
///             1 => "length mismatch",
///             _ => "unknown",
///         })
///     }
///
///     fn default_condition(&self, code: u16) -> Option<Condition> {
///         match code {
///             1 => Some(Generic::InvalidArgument.make_condition()),
///             _ => None,
///         }
///     }
/// }
///
/// let category = ChecksumCategory;
/// assert_eq!(category.message(1), "length mismatch");
/// assert_eq!(category.message(99), "unknown");
/// ```
pub trait ErrorCategory: Send + Sync + 'static {
    /// Stable identifying name of this category.
    ///
    /// Used in the diagnostic display form `<name>:<code>`. Never fails,
    /// never allocates.
    fn name(&self) -> &'static str;

    /// Human-readable description for a numeric code of this domain.
    ///
    /// Codes outside the domain's closed set must yield `"unknown"` rather
    /// than panicking - callers may hold codes from older or newer builds.
    fn message(&self, code: u16) -> Cow<'static, str>;

    /// Map a numeric code onto the generic condition it should be treated
    /// as equivalent to for cross-domain comparison.
    ///
    /// `None` means the code has no coarse classification and falls back to
    /// identity: it is only equivalent to itself within its own category.
    /// The success code (0 by convention) and unknown codes map to `None`.
    fn default_condition(&self, code: u16) -> Option<Condition> {
        let _ = code;
        None
    }

    /// Forward equivalence check: does `code` of this category match the
    /// given condition?
    ///
    /// The default resolves through [`default_condition`] and compares the
    /// mapped condition. Identity within the same category is handled by
    /// the comparison entry points on [`ErrorCode`] and does not need to be
    /// re-implemented here.
    ///
    /// [`default_condition`]: ErrorCategory::default_condition
    fn code_equivalent(&self, code: u16, condition: &Condition) -> bool {
        self.default_condition(code)
            .is_some_and(|mapped| mapped == *condition)
    }

    /// Reverse equivalence check: does this category, asked as the owner of
    /// `condition_code`, recognize the foreign error value `code`?
    ///
    /// This is the optional symmetric direction of the protocol. The
    /// default recognizes nothing; categories that want bidirectional
    /// equivalence may override it. No shipped category does.
    fn condition_equivalent(&self, code: &ErrorCode, condition_code: u16) -> bool {
        let _ = (code, condition_code);
        false
    }
}

/// Compare two category references for instance identity.
///
/// Equality of the singleton *instance* - not name equality - is what makes
/// two values members of the same domain. Comparison is by address, ignoring
/// vtable metadata, so the same instance viewed through different trait
/// object coercions still compares equal.
#[inline]
#[must_use]
pub fn same_category(a: &dyn ErrorCategory, b: &dyn ErrorCategory) -> bool {
    ptr::addr_eq(a as *const dyn ErrorCategory, b as *const dyn ErrorCategory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::generic_category;
    use crate::conversion::conversion_category;

    #[test]
    fn same_instance_is_same_category() {
        assert!(same_category(conversion_category(), conversion_category()));
        assert!(same_category(generic_category(), generic_category()));
    }

    #[test]
    fn distinct_instances_are_distinct_categories() {
        assert!(!same_category(conversion_category(), generic_category()));
    }

    #[test]
    fn default_condition_defaults_to_none() {
        struct Bare;
        impl ErrorCategory for Bare {
            fn name(&self) -> &'static str {
                "bare"
            }
            fn message(&self, _code: u16) -> Cow<'static, str> {
                Cow::Borrowed("unknown")
            }
        }

        assert!(Bare.default_condition(1).is_none());
        assert!(!Bare.code_equivalent(1, &crate::Generic::InvalidArgument.into()));
    }
}
