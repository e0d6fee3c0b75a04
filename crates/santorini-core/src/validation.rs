//! # Validation Module
//!
//! Unified contact/payment field validators.
//!
//! ## One Module, Every Call Site
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Call Sites                              │
//! │                                                                         │
//! │  Booking page (contact details)      Payment page (card form)           │
//! │  ├── guest name                      ├── cardholder name                │
//! │  ├── email                           ├── card number (Luhn)             │
//! │  └── phone                           ├── expiry (MM/YY)                 │
//! │                                      └── CVV                            │
//! │                                                                         │
//! │  Both pages call THIS module. There is exactly one definition of each   │
//! │  rule; the pages cannot drift apart.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators take raw field values exactly as typed. Where normalization is
//! part of the rule (separator stripping in phone and card numbers), the
//! normalized form is returned so callers persist what was validated.
//!
//! ## Usage
//! ```rust
//! use santorini_core::validation::{validate_card_number, validate_cvv};
//!
//! assert_eq!(
//!     validate_card_number("4242 4242 4242 4242").unwrap(),
//!     "4242424242424242"
//! );
//! assert!(validate_cvv("123").is_ok());
//! ```

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Contact Validators
// =============================================================================

/// Validates a guest name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain must contain a dot with characters on both sides
///
/// This is the form-level sanity check a booking site performs; deliverability
/// is the mail provider's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid("must contain @")),
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one @"));
    }

    let has_inner_dot = domain
        .split_once('.')
        .map(|(head, tail)| !head.is_empty() && !tail.is_empty())
        .unwrap_or(false);
    if !has_inner_dot {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

/// Validates a phone number, returning the bare digits.
///
/// ## Rules
/// - Separators (spaces, dashes, dots, parentheses, leading `+`) are stripped
/// - What remains must be digits only
/// - 7 to 15 digits
pub fn validate_phone(raw: &str) -> ValidationResult<String> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')' | '+'))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits and separators".to_string(),
        });
    }

    if !(7..=15).contains(&digits.len()) {
        return Err(ValidationError::OutOfRange {
            field: "phone digits".to_string(),
            min: 7,
            max: 15,
        });
    }

    Ok(digits)
}

// =============================================================================
// Card Validators
// =============================================================================

/// Validates a card number, returning the bare digits.
///
/// ## Rules
/// - Spaces and dashes are stripped
/// - 13 to 19 digits
/// - Must pass the Luhn checksum
pub fn validate_card_number(raw: &str) -> ValidationResult<String> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "card number".to_string(),
        });
    }

    let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits and spaces".to_string(),
        });
    }

    if !(13..=19).contains(&digits.len()) {
        return Err(ValidationError::OutOfRange {
            field: "card number digits".to_string(),
            min: 13,
            max: 19,
        });
    }

    if !luhn_valid(&digits) {
        return Err(ValidationError::FailedChecksum {
            field: "card number".to_string(),
        });
    }

    Ok(digits)
}

/// Luhn checksum over a digit string.
///
/// Doubles every second digit from the right, folds double-digit results,
/// and accepts sums divisible by ten.
fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;

    for (position, ch) in digits.chars().rev().enumerate() {
        let digit = match ch.to_digit(10) {
            Some(d) => d,
            None => return false,
        };

        let contribution = if position % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };

        sum += contribution;
    }

    sum % 10 == 0
}

/// Validates a card expiry in strict `MM/YY` form against `today`.
///
/// ## Rules
/// - Exactly `MM/YY`: two digits, slash, two digits
/// - Month 01-12
/// - The expiry month itself is still valid; only earlier months are expired
pub fn validate_expiry(raw: &str, today: NaiveDate) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "expiry".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "expiry".to_string(),
        reason: reason.to_string(),
    };

    let (month_part, year_part) = match raw.split_once('/') {
        Some(parts) => parts,
        None => return Err(invalid("expected MM/YY")),
    };

    if month_part.len() != 2
        || year_part.len() != 2
        || !month_part.chars().all(|c| c.is_ascii_digit())
        || !year_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("expected MM/YY"));
    }

    let month: u32 = month_part.parse().map_err(|_| invalid("expected MM/YY"))?;
    if !(1..=12).contains(&month) {
        return Err(invalid("month must be 01-12"));
    }

    // Two-digit years are this century; the form predates 2100 by a margin.
    let year: i32 = 2000 + year_part.parse::<i32>().map_err(|_| invalid("expected MM/YY"))?;

    if (year, month) < (today.year(), today.month()) {
        return Err(ValidationError::Expired {
            field: "expiry".to_string(),
        });
    }

    Ok(())
}

/// Validates a CVV.
///
/// ## Rules
/// - Digits only
/// - Exactly 3 or 4 digits
pub fn validate_cvv(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "cvv".to_string(),
        });
    }

    if !raw.chars().all(|c| c.is_ascii_digit()) || !(3..=4).contains(&raw.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "cvv".to_string(),
            reason: "must be 3 or 4 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_validate_guest_name() {
        assert!(validate_guest_name("Ariadne Calligari").is_ok());
        assert!(validate_guest_name("").is_err());
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("guest@nodot").is_err());
        assert!(validate_email("guest@.com").is_err());
        assert!(validate_email("gu est@example.com").is_err());
    }

    #[test]
    fn test_validate_phone_accepts_separators() {
        assert_eq!(validate_phone("+30 (22860) 71-234").unwrap(), "302286071234");
        assert_eq!(validate_phone("2286071234").unwrap(), "2286071234");
    }

    #[test]
    fn test_validate_phone_rejections() {
        assert!(matches!(
            validate_phone(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_phone("call me"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        // 6 digits is too short, 16 too long.
        assert!(matches!(
            validate_phone("123456"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_phone("1234567890123456"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_card_number_known_good() {
        // Standard test PANs - all Luhn-valid.
        assert_eq!(
            validate_card_number("4242 4242 4242 4242").unwrap(),
            "4242424242424242"
        );
        assert!(validate_card_number("4111111111111111").is_ok());
        assert!(validate_card_number("378282246310005").is_ok()); // 15 digits
    }

    #[test]
    fn test_validate_card_number_rejections() {
        assert!(matches!(
            validate_card_number(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_card_number("4242-4242-abcd-4242"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_card_number("4242"),
            Err(ValidationError::OutOfRange { .. })
        ));
        // One digit off the valid test PAN fails the checksum.
        assert!(matches!(
            validate_card_number("4111111111111112"),
            Err(ValidationError::FailedChecksum { .. })
        ));
    }

    #[test]
    fn test_luhn_checksum_directly() {
        assert!(luhn_valid("4242424242424242"));
        assert!(!luhn_valid("4242424242424241"));
        assert!(luhn_valid("0"));
    }

    #[test]
    fn test_validate_expiry() {
        // Future, current month, and past - against 2025-06-15.
        assert!(validate_expiry("12/27", today()).is_ok());
        assert!(validate_expiry("06/25", today()).is_ok());
        assert!(matches!(
            validate_expiry("05/25", today()),
            Err(ValidationError::Expired { .. })
        ));
        assert!(matches!(
            validate_expiry("12/24", today()),
            Err(ValidationError::Expired { .. })
        ));
    }

    #[test]
    fn test_validate_expiry_strict_format() {
        for raw in ["1/25", "13/25", "00/25", "12-25", "12/2025", "ab/cd", "12/"] {
            assert!(
                matches!(
                    validate_expiry(raw, today()),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "expiry {raw:?} should be rejected as malformed"
            );
        }
        assert!(matches!(
            validate_expiry("", today()),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_cvv() {
        assert!(validate_cvv("123").is_ok());
        assert!(validate_cvv("1234").is_ok());

        assert!(matches!(
            validate_cvv(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_cvv("12").is_err());
        assert!(validate_cvv("12345").is_err());
        assert!(validate_cvv("12a").is_err());
    }
}
