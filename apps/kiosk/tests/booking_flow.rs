//! End-to-end booking flow: fill the form, confirm, hand off through the
//! slot, pay, and verify the slot is consumed.
//!
//! This is the whole guest journey the two pages implement, driven through
//! the same commands the shell uses.

use chrono::NaiveDate;
use uuid::Uuid;

use santorini_kiosk::commands::{booking, payment};
use santorini_kiosk::error::ErrorCode;
use santorini_kiosk::state::{BookingField, BookingState, PaymentField, PaymentState};
use santorini_store::CheckoutSlot;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn temp_slot() -> CheckoutSlot {
    let path = std::env::temp_dir()
        .join("santorini-kiosk-flow-tests")
        .join(format!("{}.json", Uuid::new_v4()));
    CheckoutSlot::at(path)
}

fn valid_payment() -> PaymentState {
    let state = PaymentState::new();
    state.with_form_mut(|form| {
        form.set(PaymentField::Cardholder, "Ariadne Calligari");
        form.set(PaymentField::CardNumber, "4242 4242 4242 4242");
        form.set(PaymentField::Expiry, "12/27");
        form.set(PaymentField::Cvv, "123");
        form.set(PaymentField::Email, "ariadne@example.com");
        form.set(PaymentField::Phone, "+30 22860 71234");
    });
    state
}

#[test]
fn booking_to_paid_receipt() {
    let slot = temp_slot();
    let state = BookingState::new();

    // The guest fills the booking form field by field; every edit recomputes.
    booking::set_booking_field(&state, BookingField::CheckIn, "2025-01-10", today());
    booking::set_booking_field(&state, BookingField::CheckOut, "2025-01-12", today());
    booking::set_booking_field(&state, BookingField::Standard, "1", today());
    let view = booking::set_booking_field(&state, BookingField::Superior, "2", today());

    assert!(view.feedback.is_empty());
    assert_eq!(view.summary.nights, 2);
    // (1 × $200 + 2 × $300) × 2 nights
    assert_eq!(view.summary.total.cents(), 160_000);

    // Confirm: the record lands in the slot.
    let record = booking::begin_checkout(&state, &slot, today()).unwrap();
    assert_eq!(record.payload.total.cents(), 160_000);

    // The payment page reloads the record from disk and recomputes each line
    // from quantity × unitPrice × nights - arriving at the same total.
    let summary = payment::load_payment_summary(&slot).unwrap().unwrap();
    assert_eq!(summary.reference, record.reference);
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].label, "1 Standard Room");
    assert_eq!(summary.lines[1].label, "2 Superior Rooms");
    assert_eq!(summary.total, record.payload.total);

    // Pay: receipt matches, slot consumed.
    let receipt = payment::submit_payment(&valid_payment(), &slot, today()).unwrap();
    assert_eq!(receipt.amount.cents(), 160_000);
    assert_eq!(receipt.card_last4, "4242");

    assert!(payment::load_payment_summary(&slot).unwrap().is_none());
}

#[test]
fn confirming_again_overwrites_the_handoff() {
    let slot = temp_slot();
    let state = BookingState::new();

    booking::set_booking_field(&state, BookingField::CheckIn, "2025-01-10", today());
    booking::set_booking_field(&state, BookingField::CheckOut, "2025-01-12", today());
    booking::set_booking_field(&state, BookingField::Standard, "1", today());
    let first = booking::begin_checkout(&state, &slot, today()).unwrap();

    // The guest goes back and changes the selection before paying.
    booking::set_booking_field(&state, BookingField::Family, "1", today());
    let second = booking::begin_checkout(&state, &slot, today()).unwrap();
    assert_ne!(first.reference, second.reference);

    // Last write wins: the payment page sees only the second booking.
    let summary = payment::load_payment_summary(&slot).unwrap().unwrap();
    assert_eq!(summary.reference, second.reference);
    assert_eq!(summary.total, second.payload.total);

    slot.clear().unwrap();
}

#[test]
fn rejected_fields_never_reach_the_slot() {
    let slot = temp_slot();
    let state = BookingState::new();

    booking::set_booking_field(&state, BookingField::CheckIn, "2025-01-10", today());
    // Check-out equal to check-in: rejected and cleared by the recompute.
    let view = booking::set_booking_field(&state, BookingField::CheckOut, "2025-01-10", today());
    assert_eq!(view.feedback.len(), 1);
    booking::set_booking_field(&state, BookingField::Standard, "1", today());

    // Confirm fails because the cleared field left the dates incomplete.
    let err = booking::begin_checkout(&state, &slot, today()).unwrap_err();
    assert_eq!(err.code, ErrorCode::CheckoutError);
    assert!(payment::load_payment_summary(&slot).unwrap().is_none());
}
