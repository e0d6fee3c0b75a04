//! # Stay Dates
//!
//! Check-in/check-out parsing, validation, and night counting.
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw field values ("2025-01-10", "2025-01-12") + today                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse ISO date ── empty/garbage? ──► DateError::Missing { field }      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check-in < today? ─────────────────► DateError::CheckInInPast          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check-out < today? ────────────────► DateError::CheckOutInPast         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check-out <= check-in? ────────────► DateError::CheckOutNotAfterCheckIn│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StayRange { check_in, check_out }  (nights >= 1 guaranteed)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Today" is an argument, never read from the clock - the same inputs always
//! validate the same way, and tests pin the date they need.

use chrono::NaiveDate;

use crate::error::{DateError, DateField};

/// Seconds in one 24-hour billing night.
const SECONDS_PER_NIGHT: i64 = 86_400;

/// The wire format produced by a native date input control.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Stay Range
// =============================================================================

/// A validated check-in/check-out pair.
///
/// ## Invariants
/// - `check_out` is strictly after `check_in`
/// - neither date precedes the `today` passed to [`StayRange::validate`]
/// - [`StayRange::nights`] is therefore always >= 1
///
/// Constructed fresh on every validation pass and never mutated; an edited
/// field means a new validation, not a patched range. Deliberately NOT
/// deserializable: the only way to obtain one is through [`StayRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Validates a raw check-in/check-out pair against `today`.
    ///
    /// ## Arguments
    /// * `check_in_raw` - value of the check-in date input (ISO `yyyy-mm-dd`)
    /// * `check_out_raw` - value of the check-out date input
    /// * `today` - the calendar date to validate against (midnight-normalized
    ///   by construction, since `NaiveDate` carries no time of day)
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use santorini_core::dates::StayRange;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let range = StayRange::validate("2025-01-10", "2025-01-12", today).unwrap();
    /// assert_eq!(range.nights(), 2);
    /// ```
    pub fn validate(
        check_in_raw: &str,
        check_out_raw: &str,
        today: NaiveDate,
    ) -> Result<StayRange, DateError> {
        let check_in = parse_iso_date(check_in_raw, DateField::CheckIn)?;
        let check_out = parse_iso_date(check_out_raw, DateField::CheckOut)?;

        if check_in < today {
            return Err(DateError::CheckInInPast);
        }

        if check_out < today {
            return Err(DateError::CheckOutInPast);
        }

        if check_out <= check_in {
            return Err(DateError::CheckOutNotAfterCheckIn);
        }

        Ok(StayRange {
            check_in,
            check_out,
        })
    }

    /// The validated check-in date.
    #[inline]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// The validated check-out date.
    #[inline]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of billable nights in the range.
    ///
    /// Positive for every valid range (check-out is strictly later).
    #[inline]
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses a raw field value as an ISO calendar date.
///
/// An empty field and an unparsable one are the same rejection: there is no
/// usable date, so the caller clears the field and asks again.
fn parse_iso_date(raw: &str, field: DateField) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(DateError::Missing { field });
    }

    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .map_err(|_| DateError::Missing { field })
}

/// Counts billable nights between two dates, rounding partial days up.
///
/// Calendar dates differ by whole days, so the round-up never fires for
/// well-formed input; it guarantees the "any partial day is a full night"
/// rule if a sub-day span ever reaches this code.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    let span_seconds = check_out.signed_duration_since(check_in).num_seconds();
    (span_seconds + SECONDS_PER_NIGHT - 1).div_euclid(SECONDS_PER_NIGHT)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_range() {
        let range = StayRange::validate("2025-01-10", "2025-01-12", date(2025, 1, 1)).unwrap();
        assert_eq!(range.check_in(), date(2025, 1, 10));
        assert_eq!(range.check_out(), date(2025, 1, 12));
        assert_eq!(range.nights(), 2);
    }

    #[test]
    fn test_one_night_minimum() {
        let range = StayRange::validate("2025-01-10", "2025-01-11", date(2025, 1, 10)).unwrap();
        assert_eq!(range.nights(), 1);
    }

    #[test]
    fn test_check_in_today_is_allowed() {
        let today = date(2025, 6, 1);
        assert!(StayRange::validate("2025-06-01", "2025-06-03", today).is_ok());
    }

    #[test]
    fn test_empty_fields_are_missing() {
        let today = date(2025, 1, 1);
        assert_eq!(
            StayRange::validate("", "2025-01-12", today),
            Err(DateError::Missing {
                field: DateField::CheckIn
            })
        );
        assert_eq!(
            StayRange::validate("2025-01-10", "   ", today),
            Err(DateError::Missing {
                field: DateField::CheckOut
            })
        );
    }

    #[test]
    fn test_garbage_is_missing_not_a_crash() {
        let today = date(2025, 1, 1);
        for raw in ["not-a-date", "2025-13-40", "10/01/2025", "2025-1-2x"] {
            assert_eq!(
                StayRange::validate(raw, "2025-01-12", today),
                Err(DateError::Missing {
                    field: DateField::CheckIn
                }),
                "raw input {raw:?} should be rejected as missing"
            );
        }
    }

    #[test]
    fn test_past_dates_rejected() {
        let today = date(2025, 6, 15);
        assert_eq!(
            StayRange::validate("2025-06-10", "2025-06-20", today),
            Err(DateError::CheckInInPast)
        );
        assert_eq!(
            StayRange::validate("2025-06-20", "2025-06-12", today),
            Err(DateError::CheckOutInPast)
        );
    }

    #[test]
    fn test_check_out_equal_to_check_in_rejected() {
        // Equal dates fail before any night count is computed.
        let today = date(2025, 1, 1);
        assert_eq!(
            StayRange::validate("2025-01-10", "2025-01-10", today),
            Err(DateError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        let today = date(2025, 1, 1);
        assert_eq!(
            StayRange::validate("2025-01-12", "2025-01-10", today),
            Err(DateError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_nights_between_whole_days() {
        assert_eq!(nights_between(date(2025, 1, 10), date(2025, 1, 12)), 2);
        assert_eq!(nights_between(date(2025, 1, 10), date(2025, 1, 11)), 1);
        // Across a month boundary.
        assert_eq!(nights_between(date(2025, 1, 30), date(2025, 2, 2)), 3);
        // Across a leap day.
        assert_eq!(nights_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_valid_ranges_always_have_positive_nights() {
        let today = date(2025, 3, 1);
        for (ci, co) in [
            ("2025-03-01", "2025-03-02"),
            ("2025-03-05", "2025-04-05"),
            ("2025-12-31", "2026-01-01"),
        ] {
            let range = StayRange::validate(ci, co, today).unwrap();
            assert!(range.nights() >= 1);
        }
    }
}
