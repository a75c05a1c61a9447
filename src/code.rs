//! The generic error value wrapper and the kind registration contract.
//!
//! [`ErrorCode`] is the (numeric code, category reference) pair that carries
//! a single reported failure. It is deliberately dumb: every question about
//! the value - its message, its coarse classification, its equivalence to a
//! condition - is delegated to the category singleton it references.
//!
//! # Comparison Protocol
//!
//! - `ErrorCode == ErrorCode`: same category *instance* and same code.
//! - `ErrorCode` vs [`Condition`]: equivalence, resolved in order through
//!   the error's category (forward mapping), the condition's category
//!   (optional reverse mapping), then identity within one category.
//!
//! # Display vs Message
//!
//! `Display` produces the diagnostic form `<category-name>:<numeric-code>`
//! with `:` as the stable separator. Prose lives in [`ErrorCode::message`];
//! the two are intentionally distinct surfaces.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::category::{same_category, ErrorCategory};
use crate::condition::{Condition, ConditionKind};

// ============================================================================
// Error Code Wrapper
// ============================================================================

/// A single reported failure: numeric code plus owning category reference.
///
/// The wrapper holds a non-owning reference to the immutable,
/// process-lifetime category singleton, so it is `Copy` and cheap to pass
/// around or embed in other error types.
///
/// # Example
///
/// ```rust
/// use stratum_errors::{ConversionError, ErrorCode, Generic};
///
/// let ec: ErrorCode = ConversionError::IllegalChar.into();
///
/// assert_eq!(ec.to_string(), "conversion:2");
/// assert_eq!(ec.message(), "got non-digit char when converting to a number");
/// assert!(ec == Generic::InvalidArgument);
/// assert!(ec != Generic::ResultOutOfRange);
/// ```
#[must_use = "error codes should be handled or reported"]
#[derive(Clone, Copy)]
pub struct ErrorCode {
    code: u16,
    category: &'static dyn ErrorCategory,
}

impl ErrorCode {
    /// Pair a numeric code with its owning category.
    ///
    /// Domains normally do not call this directly; their
    /// [`ErrorCodeKind::make_error_code`] hook does, and the blanket `From`
    /// impl calls the hook.
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

    /// Whether this value reports an actual failure.
    ///
    /// Value 0 is reserved for the success/no-error semantic in every
    /// domain; this is the one numeric invariant the protocol imposes.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.code != 0
    }

    /// Human-readable description, delegated to the category.
    ///
    /// Never fails: codes the category does not recognize yield
    /// `"unknown"`.
    #[inline]
    pub fn message(&self) -> Cow<'static, str> {
        self.category.message(self.code)
    }

    /// The generic condition this value is treated as equivalent to, if its
    /// category defines one.
    #[inline]
    pub fn default_condition(&self) -> Option<Condition> {
        self.category.default_condition(self.code)
    }

    /// Cross-domain equivalence against a coarse condition.
    ///
    /// True iff the error's category maps this code onto `condition`, or
    /// the condition's category recognizes this error through its optional
    /// reverse mapping, or the two sides are the same code in the same
    /// category (identity fallback for unmapped codes).
    #[must_use]
    pub fn equivalent_to(&self, condition: Condition) -> bool {
        self.category.code_equivalent(self.code, &condition)
            || condition
                .category()
                .condition_equivalent(self, condition.code())
            || (same_category(self.category, condition.category())
                && self.code == condition.code())
    }
}

impl PartialEq for ErrorCode {
    /// Same category instance and same numeric code.
    fn eq(&self, other: &Self) -> bool {
        same_category(self.category, other.category) && self.code == other.code
    }
}

impl Eq for ErrorCode {}

impl PartialEq<Condition> for ErrorCode {
    fn eq(&self, other: &Condition) -> bool {
        self.equivalent_to(*other)
    }
}

impl<K: ConditionKind> PartialEq<K> for ErrorCode {
    fn eq(&self, other: &K) -> bool {
        self.equivalent_to(other.make_condition())
    }
}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.category as *const dyn ErrorCategory as *const ()).hash(state);
        self.code.hash(state);
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("category", &self.category.name())
            .field("code", &self.code)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    /// Diagnostic form `<category-name>:<numeric-code>`.
    ///
    /// The `:` separator is stable and part of the public contract. This is
    /// the tracking/logging surface; prose belongs to
    /// [`message`](ErrorCode::message).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.code)
    }
}

impl Error for ErrorCode {}

// ============================================================================
// Kind Registration
// ============================================================================

/// Compile-time declaration that a domain enum is error-code-like.
///
/// Implementing this trait is the registration step of the protocol: it
/// enables the implicit construction path from a bare kind value to an
/// [`ErrorCode`] via the blanket `From` impl. The conversion is total over
/// the closed kind set and must always succeed.
///
/// # Contract
///
/// [`make_error_code`](ErrorCodeKind::make_error_code) pairs the kind's
/// underlying numeric value with the domain's category singleton. It is the
/// one hook every domain must provide; everything else (messages,
/// equivalence) lives on the category.
pub trait ErrorCodeKind: Copy + 'static {
    /// Construction hook: pair this value with its category singleton.
    fn make_error_code(self) -> ErrorCode;
}

impl<K: ErrorCodeKind> From<K> for ErrorCode {
    #[inline]
    fn from(kind: K) -> Self {
        kind.make_error_code()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{generic_category, Generic};
    use crate::conversion::{conversion_category, ConversionError};

    #[test]
    fn equality_requires_identity_and_code() {
        let a: ErrorCode = ConversionError::EmptyString.into();
        let b = ErrorCode::new(1, conversion_category());
        let c = ErrorCode::new(1, generic_category());

        assert_eq!(a, b);
        assert_ne!(a, c); // same code, different category instance
    }

    #[test]
    fn display_is_name_colon_code() {
        let ec: ErrorCode = ConversionError::IllegalChar.into();
        let rendered = ec.to_string();

        assert_eq!(rendered, "conversion:2");
        assert!(rendered.contains(conversion_category().name()));
        assert!(rendered.contains('2'));
    }

    #[test]
    fn display_and_message_are_distinct_surfaces() {
        let ec: ErrorCode = ConversionError::TooLong.into();
        assert_ne!(ec.to_string(), ec.message());
    }

    #[test]
    fn success_value_is_not_a_failure() {
        let ok: ErrorCode = ConversionError::Success.into();
        let err: ErrorCode = ConversionError::TooLong.into();

        assert!(!ok.is_failure());
        assert!(err.is_failure());
    }

    #[test]
    fn identity_fallback_for_unmapped_codes() {
        // Success carries no generic mapping, so it is equivalent only to
        // itself within its own category.
        let ok: ErrorCode = ConversionError::Success.into();
        let own = Condition::new(0, conversion_category());

        assert!(ok.equivalent_to(own));
        assert!(ok != Generic::Success);
    }

    #[test]
    fn error_trait_object_round_trip() {
        let ec: ErrorCode = ConversionError::EmptyString.into();
        let boxed: Box<dyn Error> = Box::new(ec);
        assert_eq!(boxed.to_string(), "conversion:1");
    }
}
