//! # Error Types
//!
//! Domain-specific error types for santorini-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  santorini-core errors (this file)                                      │
//! │  ├── DateError        - Check-in/check-out range rejections             │
//! │  ├── InvalidQuantity  - Room-count field rejections (slot reset to 0)   │
//! │  ├── CheckoutError    - Payload build failures                          │
//! │  └── ValidationError  - Contact/payment field failures                  │
//! │                                                                         │
//! │  santorini-store errors (separate crate)                                │
//! │  └── StoreError       - Slot I/O and malformed persisted payloads       │
//! │                                                                         │
//! │  Shell errors (in app)                                                  │
//! │  └── ApiError         - What the UI sees (serialized, with a code)      │
//! │                                                                         │
//! │  Flow: DateError → CheckoutError → ApiError → field cleared + message   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every rejection is recoverable - the guest fixes a field and retries
//! 3. Errors are enum variants, never String
//! 4. Each variant names the field the caller should clear or highlight

use std::fmt;

use thiserror::Error;

use crate::types::RoomType;
use crate::{MAX_ROOMS_PER_TYPE, MIN_ROOMS_PER_TYPE};

// =============================================================================
// Date Errors
// =============================================================================

/// Which date input a [`DateError`] refers to.
///
/// The shell uses this to decide which field to clear and highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    CheckIn,
    CheckOut,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::CheckIn => write!(f, "check-in"),
            DateField::CheckOut => write!(f, "check-out"),
        }
    }
}

/// Rejections produced while validating a check-in/check-out pair.
///
/// Validation never coerces a bad range into a usable one; the caller is told
/// exactly what was wrong and which field caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The field was empty or not a parsable ISO calendar date.
    #[error("{field} date is required")]
    Missing { field: DateField },

    /// Check-in is before today.
    #[error("check-in date cannot be in the past")]
    CheckInInPast,

    /// Check-out is before today.
    #[error("check-out date cannot be in the past")]
    CheckOutInPast,

    /// Check-out is on or before check-in; a stay is at least one night.
    #[error("check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
}

impl DateError {
    /// The input field the caller should clear for this rejection.
    pub fn field(&self) -> DateField {
        match self {
            DateError::Missing { field } => *field,
            DateError::CheckInInPast => DateField::CheckIn,
            DateError::CheckOutInPast => DateField::CheckOut,
            DateError::CheckOutNotAfterCheckIn => DateField::CheckOut,
        }
    }
}

// =============================================================================
// Quantity Errors
// =============================================================================

/// Signal that a room-count field was rejected and its slot reset to zero.
///
/// ## When This Occurs
/// - Non-integer input ("2.5", "two")
/// - Counts outside the accepted bounds (negative, or more than nine)
///
/// The slot value is already zero by the time the caller sees this; the signal
/// exists purely so the UI can surface feedback for the offending counter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{room} count must be a whole number between {MIN_ROOMS_PER_TYPE} and {MAX_ROOMS_PER_TYPE}")]
pub struct InvalidQuantity {
    /// The room type whose counter was rejected.
    pub room: RoomType,
    /// The raw input as typed, kept for logging and feedback.
    pub raw: String,
}

// =============================================================================
// Checkout Errors
// =============================================================================

/// Failures when packaging a booking for handoff to the payment page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// One or both date fields are empty; nothing to validate yet.
    #[error("select check-in and check-out dates")]
    MissingDates,

    /// The date pair was present but failed range validation.
    #[error(transparent)]
    InvalidRange(#[from] DateError),

    /// Every room count is zero; there is nothing to book.
    #[error("select at least one room")]
    NoRoomsSelected,
}

// =============================================================================
// Field Validation Errors
// =============================================================================

/// Contact/payment field validation errors.
///
/// One taxonomy serves both the booking contact details and the payment card
/// form; the two call sites share the validators in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value or digit count is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed email, expiry not MM/YY).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The value is well-formed but fails its checksum (card numbers).
    #[error("{field} is not a valid card number")]
    FailedChecksum { field: String },

    /// The card expiry lies in the past.
    #[error("{field} is in the past")]
    Expired { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_messages() {
        let err = DateError::Missing {
            field: DateField::CheckOut,
        };
        assert_eq!(err.to_string(), "check-out date is required");

        assert_eq!(
            DateError::CheckOutNotAfterCheckIn.to_string(),
            "check-out must be after check-in"
        );
    }

    #[test]
    fn test_date_error_names_the_field_to_clear() {
        assert_eq!(DateError::CheckInInPast.field(), DateField::CheckIn);
        assert_eq!(DateError::CheckOutInPast.field(), DateField::CheckOut);
        assert_eq!(
            DateError::CheckOutNotAfterCheckIn.field(),
            DateField::CheckOut
        );
    }

    #[test]
    fn test_invalid_quantity_message() {
        let err = InvalidQuantity {
            room: RoomType::Standard,
            raw: "2.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Standard Room count must be a whole number between 0 and 9"
        );
    }

    #[test]
    fn test_date_error_converts_to_checkout_error() {
        let err: CheckoutError = DateError::CheckInInPast.into();
        assert!(matches!(
            err,
            CheckoutError::InvalidRange(DateError::CheckInInPast)
        ));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::FailedChecksum {
            field: "card number".to_string(),
        };
        assert_eq!(err.to_string(), "card number is not a valid card number");
    }
}
