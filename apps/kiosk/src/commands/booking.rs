//! # Booking Commands
//!
//! Shell commands for the booking page.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐     ┌───────────┐  │
//! │  │  Empty   │────►│  Dates + │────►│  Summary OK  │────►│ Checkout  │  │
//! │  │  Form    │     │  Rooms   │     │  (recompute) │     │  Record   │  │
//! │  └──────────┘     └──────────┘     └──────────────┘     └───────────┘  │
//! │                        │                  │                             │
//! │                set_booking_field    begin_checkout                      │
//! │                (recompute on                                            │
//! │                 every edit)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use santorini_core::CheckoutPayload;
use santorini_store::{CheckoutRecord, CheckoutSlot};

use crate::error::ApiError;
use crate::state::{BookingField, BookingState, BookingView};

/// Recomputes and returns the current booking view.
pub fn get_booking(booking: &BookingState, today: NaiveDate) -> BookingView {
    debug!("get_booking command");
    booking.with_form_mut(|form| form.recompute(today))
}

/// Stores one raw field value and recomputes.
///
/// This is the per-keystroke path: every edit re-derives quantities, dates,
/// and the summary from scratch. The returned view reflects any field the
/// recompute cleared or reset.
pub fn set_booking_field(
    booking: &BookingState,
    field: BookingField,
    value: &str,
    today: NaiveDate,
) -> BookingView {
    debug!(field = field.id(), value, "set_booking_field command");

    booking.with_form_mut(|form| {
        form.set(field, value);
        form.recompute(today)
    })
}

/// Packages the current form into a checkout record and persists it.
///
/// ## Behavior
/// - Fails if dates are missing/invalid or no rooms are selected
/// - On success the slot holds exactly this record (wholesale overwrite)
/// - The record reference is what the payment page echoes back
pub fn begin_checkout(
    booking: &BookingState,
    slot: &CheckoutSlot,
    today: NaiveDate,
) -> Result<CheckoutRecord, ApiError> {
    debug!("begin_checkout command");

    let record = booking.with_form(|form| {
        // Quantities follow the reset-to-zero policy: anything invalid is
        // already zero here and was reported by the last recompute.
        let (rooms, _) = form.quantities();
        let payload = CheckoutPayload::from_raw(
            form.get(BookingField::CheckIn),
            form.get(BookingField::CheckOut),
            &rooms,
            today,
        )?;
        Ok::<CheckoutRecord, ApiError>(CheckoutRecord::new(payload))
    })?;

    slot.save(&record)?;

    info!(
        reference = %record.reference,
        nights = record.payload.nights,
        rooms = record.payload.total_rooms,
        total = %record.payload.total,
        "checkout started"
    );

    Ok(record)
}

// =============================================================================
// Unit Tests
// =============================================================================
