//! Generic conditions - the coarse, portable classification tier.
//!
//! A generic condition is not owned by any one domain. Many unrelated
//! categories may map their own fine-grained codes onto the same condition,
//! which is what lets a caller write `ec == Generic::InvalidArgument`
//! without knowing which library produced `ec`.
//!
//! # Numbering
//!
//! [`Generic`] values reuse the portable POSIX errno constants so the coarse
//! tier stays recognizable across toolchains (`EINVAL` = 22, `ERANGE` = 34).
//! Value 0 is reserved for the success/no-error semantic; code that asks
//! "did an error occur" relies on this.
//!
//! # The Condition Value Type
//!
//! [`Condition`] is the (numeric code, category reference) pair for the
//! coarse tier, symmetric to [`crate::ErrorCode`] for the fine tier. Two
//! conditions are equal iff they reference the identical category instance
//! and carry the same code.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use smallvec::{smallvec, SmallVec};

use crate::category::{same_category, ErrorCategory};

// ============================================================================
// Generic Condition Kinds
// ============================================================================

/// Portable, cross-domain failure classifications.
///
/// This is the closed set of coarse conditions the crate ships. Domain
/// categories map their own codes onto these via
/// [`ErrorCategory::default_condition`]; callers compare against them
/// without knowing the originating domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Generic {
    /// No error occurred. Reserved value 0.
    Success = 0,
    /// An argument was malformed or otherwise unacceptable.
    InvalidArgument = 22,
    /// A result could not be represented in the requested type or storage.
    ResultOutOfRange = 34,
}

impl Generic {
    /// Underlying numeric value.
    #[inline]
    pub const fn value(self) -> u16 {
        self as u16
    }
}

// ============================================================================
// Generic Category Singleton
// ============================================================================

/// Category instance for the generic condition tier.
///
/// Message dispatch is table-driven: the closed set of (code, text) pairs is
/// built once when the singleton initializes and scanned linearly afterwards.
/// Generic codes carry no further coarsening, so `default_condition` stays
/// at the trait default (`None`, identity fallback).
struct GenericCategory {
    messages: SmallVec<[(u16, &'static str); 4]>,
}

impl GenericCategory {
    fn build() -> Self {
        Self {
            messages: smallvec![
                (Generic::Success.value(), "success"),
                (Generic::InvalidArgument.value(), "invalid argument"),
                (Generic::ResultOutOfRange.value(), "result out of range"),
            ],
        }
    }
}

impl ErrorCategory for GenericCategory {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn message(&self, code: u16) -> Cow<'static, str> {
        self.messages
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Cow::Borrowed("unknown"), |&(_, text)| Cow::Borrowed(text))
    }
}

static GENERIC_CATEGORY: Lazy<GenericCategory> = Lazy::new(GenericCategory::build);

/// The process-wide category singleton for [`Generic`] conditions.
///
/// Lazily initialized exactly once, even under concurrent first access;
/// every call returns a reference to the identical instance.
#[inline]
pub fn generic_category() -> &'static dyn ErrorCategory {
    &*GENERIC_CATEGORY
}

// ============================================================================
// Condition Value Type
// ============================================================================

/// A single coarse classification value: (numeric code, category reference).
///
/// Carries a non-owning reference to the immutable, process-lifetime
/// category singleton; the type is `Copy` and free to pass by value.
#[derive(Clone, Copy)]
pub struct Condition {
    code: u16,
    category: &'static dyn ErrorCategory,
}

impl Condition {
    /// Pair a numeric code with its owning category.
    #[inline]
    pub fn new(code: u16, category: &'static dyn ErrorCategory) -> Self {
        Self { code, category }
    }

    /// Numeric code within the owning category.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// The owning category singleton.
    #[inline]
    pub const fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    /// Human-readable description, delegated to the category.
    #[inline]
    pub fn message(&self) -> Cow<'static, str> {
        self.category.message(self.code)
    }
}

impl PartialEq for Condition {
    /// Same category instance and same numeric code.
    fn eq(&self, other: &Self) -> bool {
        same_category(self.category, other.category) && self.code == other.code
    }
}

impl Eq for Condition {}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.category as *const dyn ErrorCategory as *const ()).hash(state);
        self.code.hash(state);
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("category", &self.category.name())
            .field("code", &self.code)
            .finish()
    }
}

impl fmt::Display for Condition {
    /// Diagnostic form `<category-name>:<numeric-code>`, same stable shape
    /// as [`crate::ErrorCode`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.code)
    }
}

// ============================================================================
// Condition Registration
// ============================================================================

/// Compile-time declaration that a type is condition-like.
///
/// Implementing this trait registers an enum with the implicit construction
/// path: the blanket `From` impl turns a bare kind value into a
/// [`Condition`] carrying the kind's category singleton. The conversion is
/// total over the closed kind set and never fails.
pub trait ConditionKind: Copy + 'static {
    /// Construction hook: pair this value with its category singleton.
    fn make_condition(self) -> Condition;
}

impl ConditionKind for Generic {
    #[inline]
    fn make_condition(self) -> Condition {
        Condition::new(self.value(), generic_category())
    }
}

impl<K: ConditionKind> From<K> for Condition {
    #[inline]
    fn from(kind: K) -> Self {
        kind.make_condition()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_messages_are_fixed() {
        let cat = generic_category();
        assert_eq!(cat.message(Generic::Success.value()), "success");
        assert_eq!(cat.message(Generic::InvalidArgument.value()), "invalid argument");
        assert_eq!(cat.message(Generic::ResultOutOfRange.value()), "result out of range");
    }

    #[test]
    fn unknown_generic_code_degrades() {
        assert_eq!(generic_category().message(9999), "unknown");
        assert!(generic_category().default_condition(9999).is_none());
    }

    #[test]
    fn condition_equality_requires_identity_and_code() {
        let a: Condition = Generic::InvalidArgument.into();
        let b = Condition::new(Generic::InvalidArgument.value(), generic_category());
        let c: Condition = Generic::ResultOutOfRange.into();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn condition_display_is_name_colon_code() {
        let cond: Condition = Generic::ResultOutOfRange.into();
        assert_eq!(cond.to_string(), "generic:34");
    }

    #[test]
    fn generic_singleton_is_stable_across_calls() {
        let first = generic_category();
        let second = generic_category();
        assert!(same_category(first, second));
    }
}
