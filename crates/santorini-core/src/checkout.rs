//! # Checkout Payload
//!
//! The record handed from the booking flow to the payment flow.
//!
//! ## Handoff Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Booking page                      Payment page                         │
//! │  ────────────                      ────────────                         │
//! │                                                                         │
//! │  confirm ──► CheckoutPayload ──► persisted slot ──► read ──► summary    │
//! │                                                                         │
//! │  The payload carries unit prices, NOT computed subtotals: the payment   │
//! │  page recomputes quantity × unitPrice × nights per line. It is a data   │
//! │  contract between two pages, not a cached computation.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A payload is only ever built from a valid stay range and a non-empty
//! selection; anything else is a typed rejection before the record exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dates::StayRange;
use crate::error::CheckoutError;
use crate::money::Money;
use crate::pricing::compute_total;
use crate::quantity::QuantitySet;

// =============================================================================
// Room Line
// =============================================================================

/// One selected room type in the checkout payload.
///
/// Mirrors the summary's line items (same filter, same order) but carries the
/// unit price instead of a computed subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomLine {
    /// Stable room-type id ("standard", "superior", "family").
    pub id: String,

    /// Display name ("Standard Room").
    pub name: String,

    /// Selected count (always >= 1 in a built payload).
    pub quantity: i64,

    /// Nightly rate for one room of this type.
    pub unit_price: Money,
}

// =============================================================================
// Checkout Payload
// =============================================================================

/// Serialized booking state consumed by the payment page.
///
/// ## Lifecycle
/// Created when the guest confirms a valid booking, written wholesale to the
/// persisted slot, consumed by the payment summary, cleared after successful
/// payment. A reader finding it absent or unusable redirects to booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    /// Check-in date (ISO `yyyy-mm-dd` on the wire).
    #[ts(as = "String")]
    pub checkin: NaiveDate,

    /// Check-out date (ISO `yyyy-mm-dd` on the wire).
    #[ts(as = "String")]
    pub checkout: NaiveDate,

    /// Billable nights, >= 1 in a built payload.
    pub nights: i64,

    /// Selected rooms in catalog order, quantity > 0 only.
    pub rooms: Vec<RoomLine>,

    /// Total rooms across all lines.
    pub total_rooms: i64,

    /// Grand total for the stay.
    pub total: Money,
}

impl CheckoutPayload {
    /// Packages a validated range and selection for handoff.
    ///
    /// Fails with [`CheckoutError::NoRoomsSelected`] when every count is
    /// zero; the range is already valid by construction.
    pub fn build(range: &StayRange, rooms: &QuantitySet) -> Result<CheckoutPayload, CheckoutError> {
        if rooms.is_empty() {
            return Err(CheckoutError::NoRoomsSelected);
        }

        let lines: Vec<RoomLine> = rooms
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(room, count)| RoomLine {
                id: room.id().to_string(),
                name: room.name().to_string(),
                quantity: count,
                unit_price: room.unit_price(),
            })
            .collect();

        Ok(CheckoutPayload {
            checkin: range.check_in(),
            checkout: range.check_out(),
            nights: range.nights(),
            total_rooms: rooms.total_rooms(),
            total: compute_total(rooms, range.nights()),
            rooms: lines,
        })
    }

    /// Builds a payload straight from the raw booking fields.
    ///
    /// This is the confirm-button path: empty date fields are reported as
    /// [`CheckoutError::MissingDates`] before range validation runs, and any
    /// range rejection surfaces its specific sub-reason.
    pub fn from_raw(
        check_in_raw: &str,
        check_out_raw: &str,
        rooms: &QuantitySet,
        today: NaiveDate,
    ) -> Result<CheckoutPayload, CheckoutError> {
        if check_in_raw.trim().is_empty() || check_out_raw.trim().is_empty() {
            return Err(CheckoutError::MissingDates);
        }

        let range = StayRange::validate(check_in_raw, check_out_raw, today)?;
        CheckoutPayload::build(&range, rooms)
    }

    /// Whether this payload describes a checkout worth resuming.
    ///
    /// Readers treat a payload with no rooms or no nights as stale: it is
    /// "no active checkout", not an error worth surfacing to the guest.
    pub fn is_active(&self) -> bool {
        !self.rooms.is_empty() && self.nights >= 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateError;
    use crate::types::RoomType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn rooms(standard: &str, superior: &str, family: &str) -> QuantitySet {
        QuantitySet::from_raw(standard, superior, family).0
    }

    #[test]
    fn test_build_mirrors_selection_in_catalog_order() {
        let payload =
            CheckoutPayload::from_raw("2025-01-10", "2025-01-13", &rooms("0", "2", "1"), today())
                .unwrap();

        assert_eq!(payload.nights, 3);
        assert_eq!(payload.total_rooms, 3);
        assert_eq!(payload.rooms.len(), 2);
        assert_eq!(payload.rooms[0].id, "superior");
        assert_eq!(payload.rooms[0].quantity, 2);
        assert_eq!(payload.rooms[0].unit_price, RoomType::Superior.unit_price());
        assert_eq!(payload.rooms[1].id, "family");
        // (2 × $300 + 1 × $400) × 3
        assert_eq!(payload.total.cents(), 300_000);
        assert!(payload.is_active());
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let err = CheckoutPayload::from_raw(
            "2025-01-10",
            "2025-01-12",
            &QuantitySet::empty(),
            today(),
        )
        .unwrap_err();
        assert_eq!(err, CheckoutError::NoRoomsSelected);
    }

    #[test]
    fn test_missing_dates_reported_before_range_validation() {
        let err =
            CheckoutPayload::from_raw("", "2025-01-12", &rooms("1", "0", "0"), today()).unwrap_err();
        assert_eq!(err, CheckoutError::MissingDates);

        let err =
            CheckoutPayload::from_raw("2025-01-10", "  ", &rooms("1", "0", "0"), today())
                .unwrap_err();
        assert_eq!(err, CheckoutError::MissingDates);
    }

    #[test]
    fn test_range_rejections_surface_their_sub_reason() {
        let err = CheckoutPayload::from_raw(
            "2025-01-12",
            "2025-01-12",
            &rooms("1", "0", "0"),
            today(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InvalidRange(DateError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_wire_format_field_names() {
        let payload =
            CheckoutPayload::from_raw("2025-01-10", "2025-01-12", &rooms("1", "0", "0"), today())
                .unwrap();
        let json = serde_json::to_string(&payload).unwrap();

        // The payment page reads these exact keys.
        assert!(json.contains("\"checkin\":\"2025-01-10\""));
        assert!(json.contains("\"checkout\":\"2025-01-12\""));
        assert!(json.contains("\"totalRooms\":1"));
        assert!(json.contains("\"unitPrice\":20000"));
    }

    #[test]
    fn test_serde_round_trip_preserves_the_contract() {
        let payload =
            CheckoutPayload::from_raw("2025-01-10", "2025-01-13", &rooms("2", "1", "0"), today())
                .unwrap();

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: CheckoutPayload = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, payload);
        assert_eq!(parsed.rooms, payload.rooms);
        assert_eq!(parsed.nights, payload.nights);
        assert_eq!(parsed.total, payload.total);
    }

    #[test]
    fn test_stale_payload_detection() {
        // A record that deserializes fine but carries nothing bookable is
        // "no active checkout" for readers.
        let json = r#"{
            "checkin": "2025-01-10",
            "checkout": "2025-01-12",
            "nights": 2,
            "rooms": [],
            "totalRooms": 0,
            "total": 0
        }"#;
        let parsed: CheckoutPayload = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_active());
    }
}
