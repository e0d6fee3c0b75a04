//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Kiosk                                │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Checkout rejected? ── CheckoutError::NoRoomsSelected ──┐               │
//! │         │                                               │               │
//! │         ▼                                               ▼               │
//! │  Slot unreadable?  ─── StoreError::Io ───────────── ApiError ──► UI     │
//! │                                                                         │
//! │  The UI shows `message` and branches on `code`; per-field problems      │
//! │  travel as FieldFeedback alongside the view, not as errors.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use santorini_core::error::{CheckoutError, DateError};
use santorini_store::StoreError;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// { "code": "NO_ACTIVE_CHECKOUT", "message": "there is no booking to pay for" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed; fix the highlighted fields and retry.
    ValidationError,

    /// Confirm pressed on a booking that cannot be packaged yet.
    CheckoutError,

    /// The payment page found nothing to pay for; redirect to booking.
    NoActiveCheckout,

    /// The checkout slot could not be read or written.
    StoreError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a "nothing to pay for" error.
    pub fn no_active_checkout() -> Self {
        ApiError::new(
            ErrorCode::NoActiveCheckout,
            "there is no booking to pay for",
        )
    }
}

/// Per-field feedback shown next to an input.
///
/// Travels with the view, not inside `ApiError`: a form with two bad fields
/// is still a renderable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFeedback {
    /// Stable field id ("checkin", "standard", "cardNumber", ...).
    pub field: String,

    /// Message to display next to the field.
    pub message: String,
}

impl FieldFeedback {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldFeedback {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Converts checkout build failures to API errors.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        let code = match err {
            CheckoutError::InvalidRange(DateError::Missing { .. })
            | CheckoutError::MissingDates => ErrorCode::CheckoutError,
            CheckoutError::InvalidRange(_) => ErrorCode::ValidationError,
            CheckoutError::NoRoomsSelected => ErrorCode::CheckoutError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts slot failures to API errors.
///
/// `MalformedPayload` never reaches here on the read path - readers treat it
/// as an absent record; this conversion covers the write/clear paths.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::new(ErrorCode::StoreError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
