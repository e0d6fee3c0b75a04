//! # Booking Form State
//!
//! Holds the raw booking-form field values and recomputes the summary on
//! every edit.
//!
//! ## Recompute Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Form Operations                              │
//! │                                                                         │
//! │  Guest Action             Command                 Form State Change     │
//! │  ────────────             ───────                 ─────────────────     │
//! │                                                                         │
//! │  Edits a date ──────────► set_booking_field() ──► field = raw value     │
//! │  Edits a counter ───────► set_booking_field() ──► field = raw value     │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                           recompute(today)                              │
//! │                                  │                                      │
//! │                  ┌───────────────┼────────────────┐                     │
//! │                  ▼               ▼                ▼                     │
//! │           bad quantity?    bad date range?    all good                  │
//! │           slot reset "0"   offending field    nights = range.nights()   │
//! │           + feedback       cleared + feedback                           │
//! │                  └───────────────┼────────────────┘                     │
//! │                                  ▼                                      │
//! │                    BookingView { summary, feedback }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form is the ONLY place raw field strings live; the core sees them just
//! long enough to validate and never stores them.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use santorini_core::error::{DateField, InvalidQuantity};
use santorini_core::{BookingSummary, QuantitySet, RoomType, StayRange};

use crate::error::FieldFeedback;

// =============================================================================
// Field Identifiers
// =============================================================================

/// The five booking-form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    CheckIn,
    CheckOut,
    Standard,
    Superior,
    Family,
}

impl BookingField {
    /// Stable field id used in feedback and rendering.
    pub const fn id(&self) -> &'static str {
        match self {
            BookingField::CheckIn => "checkin",
            BookingField::CheckOut => "checkout",
            BookingField::Standard => "standard",
            BookingField::Superior => "superior",
            BookingField::Family => "family",
        }
    }
}

fn date_field_id(field: DateField) -> &'static str {
    match field {
        DateField::CheckIn => BookingField::CheckIn.id(),
        DateField::CheckOut => BookingField::CheckOut.id(),
    }
}

fn room_field_id(room: RoomType) -> &'static str {
    match room {
        RoomType::Standard => BookingField::Standard.id(),
        RoomType::Superior => BookingField::Superior.id(),
        RoomType::Family => BookingField::Family.id(),
    }
}

// =============================================================================
// Booking View
// =============================================================================

/// What the booking page renders after a recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    /// Display-ready summary (line items, total, selection flag).
    pub summary: BookingSummary,

    /// Per-field messages for inputs that were cleared or reset.
    pub feedback: Vec<FieldFeedback>,
}

// =============================================================================
// Booking Form
// =============================================================================

/// The raw booking-form state, exactly as the inputs contain it.
///
/// ## Invariants
/// - Date fields hold whatever a native date input produced (`yyyy-mm-dd`
///   or empty); counter fields hold decimal strings
/// - After a recompute, rejected counters read "0" and rejected date fields
///   are empty - the form never holds a value the summary ignored
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    check_in: String,
    check_out: String,
    standard: String,
    superior: String,
    family: String,
}

impl BookingForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        BookingForm::default()
    }

    /// Stores a raw field value. Validation happens at the next recompute.
    pub fn set(&mut self, field: BookingField, value: &str) {
        let slot = match field {
            BookingField::CheckIn => &mut self.check_in,
            BookingField::CheckOut => &mut self.check_out,
            BookingField::Standard => &mut self.standard,
            BookingField::Superior => &mut self.superior,
            BookingField::Family => &mut self.family,
        };
        *slot = value.trim().to_string();
    }

    /// Reads a raw field value.
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::CheckIn => &self.check_in,
            BookingField::CheckOut => &self.check_out,
            BookingField::Standard => &self.standard,
            BookingField::Superior => &self.superior,
            BookingField::Family => &self.family,
        }
    }

    /// Re-derives everything from the current field values.
    ///
    /// Total function: any combination of field contents produces a
    /// renderable view. Field-level problems surface as feedback while the
    /// rest of the form keeps working - a bad counter does not hide the
    /// summary for the valid ones.
    pub fn recompute(&mut self, today: NaiveDate) -> BookingView {
        let mut feedback = Vec::new();

        // Quantities first: rejected slots reset to "0" with a signal each.
        let (rooms, issues) = QuantitySet::from_raw(&self.standard, &self.superior, &self.family);
        for issue in &issues {
            self.reset_room_field(issue);
            feedback.push(FieldFeedback::new(
                room_field_id(issue.room),
                issue.to_string(),
            ));
        }

        // Dates next: an untouched pair is simply "no nights yet", while a
        // rejected pair clears the offending field.
        let nights = if self.check_in.is_empty() && self.check_out.is_empty() {
            0
        } else {
            match StayRange::validate(&self.check_in, &self.check_out, today) {
                Ok(range) => range.nights(),
                Err(err) => {
                    let field = date_field_id(err.field());
                    self.clear_date_field(err.field());
                    feedback.push(FieldFeedback::new(field, err.to_string()));
                    0
                }
            }
        };

        let summary = BookingSummary::project(&rooms, nights);
        debug!(
            nights,
            total = %summary.total,
            rooms = summary.line_items.len(),
            issues = feedback.len(),
            "booking recomputed"
        );

        BookingView { summary, feedback }
    }

    /// The current quantities without touching the form (read-only callers).
    pub fn quantities(&self) -> (QuantitySet, Vec<InvalidQuantity>) {
        QuantitySet::from_raw(&self.standard, &self.superior, &self.family)
    }

    fn reset_room_field(&mut self, issue: &InvalidQuantity) {
        let slot = match issue.room {
            RoomType::Standard => &mut self.standard,
            RoomType::Superior => &mut self.superior,
            RoomType::Family => &mut self.family,
        };
        *slot = "0".to_string();
    }

    fn clear_date_field(&mut self, field: DateField) {
        match field {
            DateField::CheckIn => self.check_in.clear(),
            DateField::CheckOut => self.check_out.clear(),
        }
    }
}

// =============================================================================
// Shared State Wrapper
// =============================================================================

/// Shared booking-form state.
///
/// ## Thread Safety
/// The flow itself is one logical thread of control (each edit runs to
/// completion before the next), but commands reach the form through shared
/// references, so the form sits behind a `Mutex` for exclusive access.
#[derive(Debug)]
pub struct BookingState {
    form: Arc<Mutex<BookingForm>>,
}

impl BookingState {
    /// Creates state holding an empty form.
    pub fn new() -> Self {
        BookingState {
            form: Arc::new(Mutex::new(BookingForm::new())),
        }
    }

    /// Executes a function with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingForm) -> R,
    {
        let form = self.form.lock().expect("Booking form mutex poisoned");
        f(&form)
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingForm) -> R,
    {
        let mut form = self.form.lock().expect("Booking form mutex poisoned");
        f(&mut form)
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.set(BookingField::CheckIn, "2025-01-10");
        form.set(BookingField::CheckOut, "2025-01-12");
        form.set(BookingField::Standard, "1");
        form
    }

    #[test]
    fn test_recompute_happy_path() {
        let mut form = filled_form();
        let view = form.recompute(today());

        assert!(view.feedback.is_empty());
        assert_eq!(view.summary.nights, 2);
        assert_eq!(view.summary.line_items.len(), 1);
        assert_eq!(format!("{}", view.summary.total), "$400.00");
    }

    #[test]
    fn test_untouched_dates_are_not_an_error() {
        let mut form = BookingForm::new();
        form.set(BookingField::Superior, "2");

        let view = form.recompute(today());
        assert!(view.feedback.is_empty());
        assert_eq!(view.summary.nights, 0);
        assert!(view.summary.has_any_selection);
        assert!(view.summary.total.is_zero());
    }

    #[test]
    fn test_bad_date_clears_the_offending_field() {
        let mut form = filled_form();
        form.set(BookingField::CheckOut, "2025-01-10"); // equal to check-in

        let view = form.recompute(today());
        assert_eq!(view.summary.nights, 0);
        assert_eq!(view.feedback.len(), 1);
        assert_eq!(view.feedback[0].field, "checkout");
        // The field was cleared so the guest re-picks it.
        assert_eq!(form.get(BookingField::CheckOut), "");
        // Check-in survives.
        assert_eq!(form.get(BookingField::CheckIn), "2025-01-10");
    }

    #[test]
    fn test_bad_quantity_resets_to_zero_and_reports() {
        let mut form = filled_form();
        form.set(BookingField::Family, "12");

        let view = form.recompute(today());
        assert_eq!(form.get(BookingField::Family), "0");
        assert_eq!(view.feedback.len(), 1);
        assert_eq!(view.feedback[0].field, "family");
        // The valid standard-room line still prices normally.
        assert_eq!(view.summary.line_items.len(), 1);
        assert_eq!(view.summary.total.cents(), 40_000);
    }

    #[test]
    fn test_recompute_is_stable_once_settled() {
        let mut form = filled_form();
        let first = form.recompute(today());
        let second = form.recompute(today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_wrapper_round_trip() {
        let state = BookingState::new();
        state.with_form_mut(|form| form.set(BookingField::Standard, "2"));
        let (rooms, _) = state.with_form(|form| form.quantities());
        assert_eq!(rooms.total_rooms(), 2);
    }
}
