//! # Payment Form State
//!
//! Holds the raw payment-form field values and validates them through the
//! unified validators in `santorini-core`.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Payment form fields            Core validator                          │
//! │  ───────────────────            ──────────────                          │
//! │  cardholder name         ──►    validate_guest_name                     │
//! │  card number             ──►    validate_card_number (Luhn)             │
//! │  expiry                  ──►    validate_expiry (MM/YY vs today)        │
//! │  cvv                     ──►    validate_cvv                            │
//! │  email                   ──►    validate_email                          │
//! │  phone                   ──►    validate_phone                          │
//! │                                                                         │
//! │  Same validators the booking contact section uses - one definition,     │
//! │  no drift between the two pages.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use santorini_core::validation::{
    validate_card_number, validate_cvv, validate_email, validate_expiry, validate_guest_name,
    validate_phone,
};

use crate::error::FieldFeedback;

// =============================================================================
// Field Identifiers
// =============================================================================

/// The payment-form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    Cardholder,
    CardNumber,
    Expiry,
    Cvv,
    Email,
    Phone,
}

impl PaymentField {
    /// Stable field id used in feedback and rendering.
    pub const fn id(&self) -> &'static str {
        match self {
            PaymentField::Cardholder => "cardholder",
            PaymentField::CardNumber => "cardNumber",
            PaymentField::Expiry => "expiry",
            PaymentField::Cvv => "cvv",
            PaymentField::Email => "email",
            PaymentField::Phone => "phone",
        }
    }
}

// =============================================================================
// Payment Form
// =============================================================================

/// The raw payment-form state, exactly as the inputs contain it.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    cardholder: String,
    card_number: String,
    expiry: String,
    cvv: String,
    email: String,
    phone: String,
}

impl PaymentForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        PaymentForm::default()
    }

    /// Stores a raw field value.
    pub fn set(&mut self, field: PaymentField, value: &str) {
        let slot = match field {
            PaymentField::Cardholder => &mut self.cardholder,
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::Expiry => &mut self.expiry,
            PaymentField::Cvv => &mut self.cvv,
            PaymentField::Email => &mut self.email,
            PaymentField::Phone => &mut self.phone,
        };
        *slot = value.trim().to_string();
    }

    /// Reads a raw field value.
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::Cardholder => &self.cardholder,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::Expiry => &self.expiry,
            PaymentField::Cvv => &self.cvv,
            PaymentField::Email => &self.email,
            PaymentField::Phone => &self.phone,
        }
    }

    /// Validates every field, returning feedback for each failure.
    ///
    /// Non-blocking per field: the guest sees all problems at once rather
    /// than fixing them one submit at a time.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldFeedback> {
        let mut feedback = Vec::new();
        let mut check = |field: PaymentField, result: Result<(), santorini_core::ValidationError>| {
            if let Err(err) = result {
                feedback.push(FieldFeedback::new(field.id(), err.to_string()));
            }
        };

        check(PaymentField::Cardholder, validate_guest_name(&self.cardholder));
        check(
            PaymentField::CardNumber,
            validate_card_number(&self.card_number).map(|_| ()),
        );
        check(PaymentField::Expiry, validate_expiry(&self.expiry, today));
        check(PaymentField::Cvv, validate_cvv(&self.cvv));
        check(PaymentField::Email, validate_email(&self.email));
        check(PaymentField::Phone, validate_phone(&self.phone).map(|_| ()));

        feedback
    }

    /// Last four digits of the validated card number, for the receipt.
    ///
    /// Only meaningful after [`PaymentForm::validate`] passed.
    pub fn card_last4(&self) -> String {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].to_string()
    }
}

// =============================================================================
// Shared State Wrapper
// =============================================================================

/// Shared payment-form state, behind a `Mutex` like the booking form.
#[derive(Debug)]
pub struct PaymentState {
    form: Arc<Mutex<PaymentForm>>,
}

impl PaymentState {
    /// Creates state holding an empty form.
    pub fn new() -> Self {
        PaymentState {
            form: Arc::new(Mutex::new(PaymentForm::new())),
        }
    }

    /// Executes a function with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PaymentForm) -> R,
    {
        let form = self.form.lock().expect("Payment form mutex poisoned");
        f(&form)
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PaymentForm) -> R,
    {
        let mut form = self.form.lock().expect("Payment form mutex poisoned");
        f(&mut form)
    }
}

impl Default for PaymentState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
