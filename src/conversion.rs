//! Reference domain: string-to-number conversion failures.
//!
//! This module is the worked example of the protocol. It defines a closed,
//! library-specific kind enum, registers it as error-code-like, and plugs a
//! lazily-built category singleton into the equivalence machinery:
//!
//! - `EmptyString` and `IllegalChar` coarsen to [`Generic::InvalidArgument`]
//! - `TooLong` coarsens to [`Generic::ResultOutOfRange`]
//! - `Success` and unrecognized codes carry no coarse mapping
//!
//! # Value Layout
//!
//! The numeric values are 0, 1, 2, 4. The gap is deliberate and permitted:
//! kind values need not be contiguous, and the set is *not* a bitmask -
//! combinability must not be assumed even where values superficially allow
//! it.
//!
//! # Singleton Discipline
//!
//! The category instance is created on first access through a thread-safe
//! lazy static and lives for the rest of the process. Racing first accesses
//! observe exactly one initialization; afterwards the instance is read-only
//! and comparisons rely on its address identity.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use smallvec::{smallvec, SmallVec};

use crate::category::ErrorCategory;
use crate::code::{ErrorCode, ErrorCodeKind};
use crate::condition::{Condition, ConditionKind, Generic};

// ============================================================================
// Domain Kind
// ============================================================================

/// The specific ways a string-to-number conversion can fail.
///
/// A closed set of named integer values. Value 0 is the reserved
/// success/no-error value; the remaining values classify failures. Supports
/// only equality and conversion to its numeric representation - all richer
/// behavior lives on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ConversionError {
    /// The conversion succeeded. Reserved value 0.
    Success = 0,
    /// The input string was empty.
    EmptyString = 1,
    /// The input contained a character that is not a digit.
    IllegalChar = 2,
    /// The parsed number would not fit the target representation.
    /// Deliberately noncontiguous with its neighbors.
    TooLong = 4,
}

impl ConversionError {
    /// Underlying numeric value.
    #[inline]
    pub const fn value(self) -> u16 {
        self as u16
    }
}

impl ErrorCodeKind for ConversionError {
    /// Registration hook: every `ConversionError` value converts implicitly
    /// into an [`ErrorCode`] carrying this domain's category singleton.
    #[inline]
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self.value(), conversion_category())
    }
}

// ============================================================================
// Category Singleton
// ============================================================================

/// Category for [`ConversionError`] codes.
///
/// Both dispatch surfaces are mapping tables built once at construction
/// time: the closed set of cases is explicit in one place instead of being
/// spread over branch chains, and the noncontiguous value 4 needs no dense
/// array. Lookups are linear scans over four entries.
struct ConversionCategory {
    messages: SmallVec<[(u16, &'static str); 4]>,
    conditions: SmallVec<[(u16, Generic); 4]>,
}

impl ConversionCategory {
    fn build() -> Self {
        #[cfg(test)]
        init_observer::record_init();

        Self {
            messages: smallvec![
                (ConversionError::Success.value(), "success"),
                (ConversionError::EmptyString.value(), "empty string"),
                (
                    ConversionError::IllegalChar.value(),
                    "got non-digit char when converting to a number",
                ),
                (
                    ConversionError::TooLong.value(),
                    "the number would not fit into memory",
                ),
            ],
            conditions: smallvec![
                (ConversionError::EmptyString.value(), Generic::InvalidArgument),
                (ConversionError::IllegalChar.value(), Generic::InvalidArgument),
                (ConversionError::TooLong.value(), Generic::ResultOutOfRange),
            ],
        }
    }
}

impl ErrorCategory for ConversionCategory {
    fn name(&self) -> &'static str {
        "conversion"
    }

    fn message(&self, code: u16) -> Cow<'static, str> {
        self.messages
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Cow::Borrowed("unknown"), |&(_, text)| Cow::Borrowed(text))
    }

    fn default_condition(&self, code: u16) -> Option<Condition> {
        self.conditions
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, generic)| generic.make_condition())
    }
}

static CONVERSION_CATEGORY: Lazy<ConversionCategory> = Lazy::new(ConversionCategory::build);

/// The process-wide category singleton for [`ConversionError`] codes.
///
/// Lazily initialized exactly once regardless of how many threads race to
/// first-access it; every call returns a reference to the identical
/// instance, which is what makes instance-identity comparison sound.
#[inline]
pub fn conversion_category() -> &'static dyn ErrorCategory {
    &*CONVERSION_CATEGORY
}

// ============================================================================
// Test-Only Initialization Counter
// ============================================================================


// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::same_category;
    use std::thread;

    #[test]
    fn messages_are_the_documented_fixed_strings() {
        let cat = conversion_category();
        assert_eq!(cat.message(0), "success");
        assert_eq!(cat.message(1), "empty string");
        assert_eq!(cat.message(2), "got non-digit char when converting to a number");
        assert_eq!(cat.message(4), "the number would not fit into memory");
    }

    #[test]
    fn unknown_codes_degrade_instead_of_failing() {
        let cat = conversion_category();
        for code in [3u16, 5, 100, u16::MAX] {
            assert_eq!(cat.message(code), "unknown");
            assert!(cat.default_condition(code).is_none());
        }
    }

    #[test]
    fn equivalence_mapping_policy() {
        let cat = conversion_category();

        assert_eq!(
            cat.default_condition(1),
            Some(Generic::InvalidArgument.make_condition())
        );
        assert_eq!(
            cat.default_condition(2),
            Some(Generic::InvalidArgument.make_condition())
        );
        assert_eq!(
            cat.default_condition(4),
            Some(Generic::ResultOutOfRange.make_condition())
        );
        assert!(cat.default_condition(0).is_none());
    }

    #[test]
    fn cross_domain_comparison_truth_table() {
        let illegal: ErrorCode = ConversionError::IllegalChar.into();
        let too_long: ErrorCode = ConversionError::TooLong.into();

        assert!(illegal.equivalent_to(Generic::InvalidArgument.into()));
        assert!(!illegal.equivalent_to(Generic::ResultOutOfRange.into()));
        assert!(too_long.equivalent_to(Generic::ResultOutOfRange.into()));
        assert!(!too_long.equivalent_to(Generic::InvalidArgument.into()));
    }

    #[test]
    fn wrappers_share_one_category_instance() {
        let a: ErrorCode = ConversionError::EmptyString.into();
        let b: ErrorCode = ConversionError::TooLong.into();
        assert!(same_category(a.category(), b.category()));
        assert!(same_category(a.category(), conversion_category()));
    }

    #[test]
    fn racing_first_accesses_initialize_once() {
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(conversion_category))
            .collect();

        let first = conversion_category();
        for handle in handles {
            let category = handle.join().unwrap();
            assert!(same_category(category, first));
        }

        assert_eq!(init_observer::init_count(), 1);
    }

    #[test]
    fn values_are_noncontiguous_but_not_flags() {
        assert_eq!(ConversionError::TooLong.value(), 4);
        // 1 | 2 == 3 is not a member of the closed set.
        assert_eq!(conversion_category().message(3), "unknown");
    }
}
