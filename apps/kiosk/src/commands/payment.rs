//! # Payment Commands
//!
//! Shell commands for the payment page.
//!
//! ## Payment Page Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Page Flow                                    │
//! │                                                                         │
//! │  load_payment_summary(slot)                                             │
//! │       │                                                                 │
//! │       ├── None (absent / malformed / stale) ──► redirect to booking     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render lines (quantity × unitPrice × nights, RECOMPUTED here)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_payment_form ──► feedback? ──► highlight fields, stay put     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_payment ──► clear slot (exactly once) ──► receipt               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-line totals are deliberately recomputed from quantity, unit price,
//! and nights: the persisted payload is a data contract, not a cache.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use santorini_core::summary::pluralize;
use santorini_core::Money;
use santorini_store::{CheckoutSlot, StoreError};

use crate::error::{ApiError, FieldFeedback};
use crate::state::PaymentState;

// =============================================================================
// View Models
// =============================================================================

/// One room line on the payment summary, with its recomputed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    /// Pluralized label ("2 Superior Rooms").
    pub label: String,

    /// Selected count.
    pub quantity: i64,

    /// Nightly rate for one room.
    pub unit_price: Money,

    /// quantity × unit price × nights, recomputed by this page.
    pub line_total: Money,
}

/// The payment page's view of the active checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    /// Handoff reference from the checkout record.
    pub reference: String,

    /// ISO check-in date.
    pub checkin: String,

    /// ISO check-out date.
    pub checkout: String,

    /// Billable nights.
    pub nights: i64,

    /// Pluralized night count ("2 nights").
    pub nights_label: String,

    /// Room lines with recomputed totals.
    pub lines: Vec<PaymentLine>,

    /// Sum of the recomputed line totals.
    pub total: Money,
}

/// What the guest sees after a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Handoff reference, echoed for support enquiries.
    pub reference: String,

    /// Amount charged.
    pub amount: Money,

    /// Last four digits of the card.
    pub card_last4: String,

    /// Confirmation timestamp (RFC 3339).
    pub paid_at: String,
}

// =============================================================================
// Commands
// =============================================================================

/// Loads the active checkout and projects the payment summary.
///
/// ## Returns
/// - `Ok(Some(summary))` - an active checkout is waiting for payment
/// - `Ok(None)` - nothing to pay for (absent, malformed, or stale record);
///   the caller redirects to the booking page without alarming the guest
pub fn load_payment_summary(slot: &CheckoutSlot) -> Result<Option<PaymentSummary>, ApiError> {
    debug!("load_payment_summary command");

    let record = match slot.load() {
        Ok(Some(record)) => record,
        Ok(None) => return Ok(None),
        Err(StoreError::MalformedPayload(_)) => {
            // Already logged by the store; to the guest this is simply an
            // empty slot.
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if !record.payload.is_active() {
        warn!(reference = %record.reference, "checkout record has nothing bookable, treating as absent");
        return Ok(None);
    }

    let payload = &record.payload;
    let lines: Vec<PaymentLine> = payload
        .rooms
        .iter()
        .map(|room| PaymentLine {
            label: pluralize(room.quantity, &room.name),
            quantity: room.quantity,
            unit_price: room.unit_price,
            line_total: room.unit_price * room.quantity * payload.nights,
        })
        .collect();
    let total: Money = lines.iter().map(|line| line.line_total).sum();

    Ok(Some(PaymentSummary {
        reference: record.reference,
        checkin: payload.checkin.to_string(),
        checkout: payload.checkout.to_string(),
        nights: payload.nights,
        nights_label: pluralize(payload.nights, "night"),
        lines,
        total,
    }))
}

/// Validates the payment form, returning feedback per failing field.
pub fn validate_payment_form(payment: &PaymentState, today: NaiveDate) -> Vec<FieldFeedback> {
    debug!("validate_payment_form command");
    payment.with_form(|form| form.validate(today))
}

/// Confirms payment for the active checkout.
///
/// ## Behavior
/// - Every payment field must validate; otherwise nothing is charged
/// - The slot must hold an active checkout
/// - On success the slot is cleared - this is the single clear per handoff
pub fn submit_payment(
    payment: &PaymentState,
    slot: &CheckoutSlot,
    today: NaiveDate,
) -> Result<PaymentReceipt, ApiError> {
    debug!("submit_payment command");

    let feedback = payment.with_form(|form| form.validate(today));
    if !feedback.is_empty() {
        return Err(ApiError::validation(format!(
            "{} payment field(s) need attention",
            feedback.len()
        )));
    }

    let summary = load_payment_summary(slot)?.ok_or_else(ApiError::no_active_checkout)?;
    let card_last4 = payment.with_form(|form| form.card_last4());

    slot.clear()?;

    info!(
        reference = %summary.reference,
        amount = %summary.total,
        "payment confirmed, checkout slot cleared"
    );

    Ok(PaymentReceipt {
        reference: summary.reference,
        amount: summary.total,
        card_last4,
        paid_at: Utc::now().to_rfc3339(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
