//! # santorini-core: Pure Booking Logic for Santorini Blue
//!
//! This crate is the **heart** of the Santorini Blue booking flow. It contains
//! the whole price/summary computation and validation pipeline as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Santorini Blue Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Booking/Payment Shell                       │   │
//! │  │   date fields ──► room counters ──► summary ──► payment form    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw field strings                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ santorini-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │   │  dates  │ │ quantity │ │ pricing │ │ summary │ │checkout │ │   │
//! │  │   │StayRange│ │QuantitySet│ │ totals │ │ project │ │ payload │ │   │
//! │  │   └─────────┘ └──────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO PERSISTENCE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              santorini-store (Checkout Slot)                    │   │
//! │  │        one JSON record handed to the payment page               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Room types and the fixed price table
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`dates`] - Check-in/check-out validation and night counting
//! - [`quantity`] - Room-count parsing with the reset-to-zero policy
//! - [`pricing`] - Nightly subtotal and grand total computation
//! - [`summary`] - Display-ready booking summary projection
//! - [`checkout`] - The payload handed to the payment page
//! - [`validation`] - Unified contact/payment field validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every recompute is deterministic - same input = same output
//! 2. **No Clock**: "today" is always an argument, never read from the system
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use santorini_core::dates::StayRange;
//! use santorini_core::quantity::QuantitySet;
//! use santorini_core::summary::BookingSummary;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let range = StayRange::validate("2025-01-10", "2025-01-12", today).unwrap();
//!
//! let (rooms, issues) = QuantitySet::from_raw("1", "0", "0");
//! assert!(issues.is_empty());
//!
//! let summary = BookingSummary::project(&rooms, range.nights());
//! // 1 Standard Room × $200 × 2 nights
//! assert_eq!(summary.total.cents(), 40_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod dates;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quantity;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use santorini_core::Money` instead of
// `use santorini_core::money::Money`

pub use checkout::{CheckoutPayload, RoomLine};
pub use dates::StayRange;
pub use error::{CheckoutError, DateError, DateField, InvalidQuantity, ValidationError};
pub use money::Money;
pub use quantity::QuantitySet;
pub use summary::{BookingSummary, LineItem};
pub use types::RoomType;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest accepted room count per room type.
///
/// Zero is a valid request ("none of this type"); an empty counter field also
/// means zero rather than an error.
pub const MIN_ROOMS_PER_TYPE: i64 = 0;

/// Largest accepted room count per room type.
///
/// ## Business Reason
/// Matches the counter controls on the booking form. Anything outside the
/// bounds is rejected outright and the slot resets to zero - never clamped to
/// the nearest bound.
pub const MAX_ROOMS_PER_TYPE: i64 = 9;
