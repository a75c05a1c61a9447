//! Structured diagnostic rendering for error codes.
//!
//! [`Report`] is a small adapter that renders everything the classification
//! layer knows about one [`ErrorCode`] - diagnostic form, prose message,
//! and mapped generic condition - as a single stable log line. It exists so
//! log pipelines do not each invent their own concatenation of
//! `to_string()` and `message()`.
//!
//! This is not a logging framework; the crate only produces the line, the
//! caller decides where it goes.
//!
//! # Line Shape
//!
//! ```text
//! [conversion:2] msg='got non-digit char when converting to a number' generic='invalid argument'
//! ```
//!
//! Unmapped codes render the generic field as `'-'`. All fields come from
//! the immutable category singleton, so rendering never fails beyond the
//! underlying writer.

use std::borrow::Cow;
use std::fmt;

use crate::code::ErrorCode;
use crate::condition::Condition;

/// One-line structured view of an [`ErrorCode`] for diagnostics.
///
/// Constructed via [`ErrorCode::report`]. The accessors expose the same
/// facts the rendered line contains, for callers that feed structured
/// sinks instead of plain text.
#[derive(Clone, Copy)]
pub struct Report {
    code: ErrorCode,
}

impl Report {
    pub(crate) const fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    /// Category name of the reported value.
    #[inline]
    pub fn category_name(&self) -> &'static str {
        self.code.category().name()
    }

    /// Numeric code of the reported value.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.code.code()
    }

    /// Prose message for the reported value.
    #[inline]
    pub fn message(&self) -> Cow<'static, str> {
        self.code.message()
    }

    /// Mapped generic condition, if the category defines one.
    #[inline]
    pub fn generic(&self) -> Option<Condition> {
        self.code.default_condition()
    }

    /// Write the diagnostic line to any [`fmt::Write`] sink.
    pub fn write_to<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        write!(writer, "[{}] msg='{}' generic='", self.code, self.message())?;
        match self.generic() {
            Some(condition) => write!(writer, "{}", condition.message())?,
            None => writer.write_char('-')?,
        }
        writer.write_char('\'')
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("category", &self.category_name())
            .field("code", &self.code())
            .finish()
    }
}

impl ErrorCode {
    /// Structured diagnostic view of this value.
    ///
    /// ```rust
    /// use stratum_errors::{ConversionError, ErrorCode};
    ///
    /// let ec: ErrorCode = ConversionError::TooLong.into();
    /// let line = ec.report().to_string();
    ///
    /// assert!(line.starts_with("[conversion:4]"));
    /// assert!(line.contains("result out of range"));
    /// ```
    #[inline]
    pub const fn report(&self) -> Report {
        Report::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Generic;
    use crate::conversion::ConversionError;

    #[test]
    fn mapped_code_renders_generic_message() {
        let line = ErrorCode::from(ConversionError::IllegalChar).report().to_string();
        assert_eq!(
            line,
            "[conversion:2] msg='got non-digit char when converting to a number' \
             generic='invalid argument'"
        );
    }

    #[test]
    fn unmapped_code_renders_placeholder() {
        let line = ErrorCode::from(ConversionError::Success).report().to_string();
        assert_eq!(line, "[conversion:0] msg='success' generic='-'");
    }

    #[test]
    fn accessors_match_rendered_fields() {
        let report = ErrorCode::from(ConversionError::TooLong).report();

        assert_eq!(report.category_name(), "conversion");
        assert_eq!(report.code(), 4);
        assert_eq!(report.message(), "the number would not fit into memory");
        assert_eq!(report.generic(), Some(Generic::ResultOutOfRange.into()));
    }

    #[test]
    fn write_to_accepts_any_fmt_writer() {
        let mut buffer = String::new();
        ErrorCode::from(ConversionError::EmptyString)
            .report()
            .write_to(&mut buffer)
            .unwrap();
        assert!(buffer.contains("msg='empty string'"));
    }
}
