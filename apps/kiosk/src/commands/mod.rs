//! # Shell Commands Module
//!
//! All commands the presentation layer invokes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── booking.rs  ◄─── Field edits, recompute, begin checkout
//! └── payment.rs  ◄─── Payment summary, form validation, submit
//! ```
//!
//! ## How Commands Work
//! Every command takes the state it needs plus the raw inputs, and returns
//! either a serializable view or a typed `ApiError`. "Today" always arrives
//! as an argument - the presentation layer samples the clock, commands and
//! the core never do:
//!
//! ```rust,ignore
//! // Only needs the booking form
//! set_booking_field(&booking, BookingField::CheckIn, "2025-01-10", today)
//!
//! // Needs the form and the slot
//! begin_checkout(&booking, &slot, today)
//!
//! // Only needs the slot
//! load_payment_summary(&slot)
//! ```

pub mod booking;
pub mod payment;
