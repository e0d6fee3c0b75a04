//! # Booking Summary
//!
//! Projection of the current form state into a display-ready summary.
//!
//! ## What the Summary Panel Shows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  YOUR STAY                                          2 nights            │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │  1 Standard Room                             $200.00 / night            │
//! │  2 Superior Rooms                            $600.00 / night            │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │  TOTAL                                       $1600.00                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The projection is read-only: it derives a fresh value from the quantity set
//! and the night count and mutates neither. Calling it twice with the same
//! inputs yields structurally equal summaries, which is what lets the shell
//! recompute on every keystroke without bookkeeping.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::{compute_total, nightly_subtotal};
use crate::quantity::QuantitySet;
use crate::types::RoomType;

// =============================================================================
// Line Item
// =============================================================================

/// One selected room type in the summary.
///
/// Only room types with a count above zero become line items, in the fixed
/// catalog order - the ordering is part of the display contract, not an
/// accident of iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Which room type this line describes.
    pub room_type: RoomType,

    /// Selected count (always >= 1 in a projected line item).
    pub quantity: i64,

    /// Per-night subtotal for the line (count × nightly rate).
    pub nightly_subtotal: Money,

    /// Display text with correct pluralization ("1 Standard Room",
    /// "3 Family Rooms").
    pub label: String,
}

// =============================================================================
// Booking Summary
// =============================================================================

/// Display-ready view of the booking in progress.
///
/// ## Invariant
/// `total == Σ(line nightly subtotals) × nights`. With `nights == 0` the
/// total is zero while line items still list the selection - a guest can pick
/// rooms before picking dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    /// Billable nights, zero while no valid date range exists.
    pub nights: i64,

    /// Pluralized night count for the header ("1 night", "4 nights").
    pub nights_label: String,

    /// Selected rooms in catalog order, quantity > 0 only.
    pub line_items: Vec<LineItem>,

    /// Grand total for the stay.
    pub total: Money,

    /// True when at least one room is selected.
    ///
    /// Exposed explicitly so the caller never has to guess whether an empty
    /// line-item list means "nothing selected" or something upstream failed;
    /// the summary only reports selection state.
    pub has_any_selection: bool,
}

impl BookingSummary {
    /// Projects the current selection and night count into a summary.
    ///
    /// ## Example
    /// ```rust
    /// use santorini_core::quantity::QuantitySet;
    /// use santorini_core::summary::BookingSummary;
    ///
    /// let (rooms, _) = QuantitySet::from_raw("1", "0", "0");
    /// let summary = BookingSummary::project(&rooms, 2);
    ///
    /// assert_eq!(summary.line_items.len(), 1);
    /// assert_eq!(summary.line_items[0].label, "1 Standard Room");
    /// assert_eq!(summary.total.cents(), 40_000);
    /// ```
    pub fn project(rooms: &QuantitySet, nights: i64) -> BookingSummary {
        let line_items: Vec<LineItem> = rooms
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(room, count)| LineItem {
                room_type: room,
                quantity: count,
                nightly_subtotal: nightly_subtotal(room, count),
                label: pluralize(count, room.name()),
            })
            .collect();

        BookingSummary {
            nights,
            nights_label: pluralize(nights, "night"),
            has_any_selection: !line_items.is_empty(),
            total: compute_total(rooms, nights),
            line_items,
        }
    }
}

// =============================================================================
// Pluralization
// =============================================================================

/// Naive suffix-"s" pluralization: `"1 night"`, `"3 nights"`.
///
/// Every noun in this domain pluralizes regularly, so the suffix rule is the
/// whole rule.
pub fn pluralize(count: i64, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(standard: &str, superior: &str, family: &str) -> QuantitySet {
        QuantitySet::from_raw(standard, superior, family).0
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "night"), "1 night");
        assert_eq!(pluralize(2, "night"), "2 nights");
        assert_eq!(pluralize(0, "night"), "0 nights");
        assert_eq!(pluralize(1, "Standard Room"), "1 Standard Room");
        assert_eq!(pluralize(4, "Standard Room"), "4 Standard Rooms");
    }

    #[test]
    fn test_only_selected_rooms_become_line_items() {
        let summary = BookingSummary::project(&rooms("1", "0", "2"), 2);
        assert_eq!(summary.line_items.len(), 2);
        assert_eq!(summary.line_items[0].room_type, RoomType::Standard);
        assert_eq!(summary.line_items[1].room_type, RoomType::Family);
        assert!(summary.has_any_selection);
    }

    #[test]
    fn test_line_items_keep_catalog_order() {
        // Family-first input still projects Standard, Superior, Family.
        let summary = BookingSummary::project(&rooms("1", "1", "1"), 1);
        let order: Vec<RoomType> = summary
            .line_items
            .iter()
            .map(|item| item.room_type)
            .collect();
        assert_eq!(
            order,
            vec![RoomType::Standard, RoomType::Superior, RoomType::Family]
        );
    }

    #[test]
    fn test_scenario_one_standard_two_nights() {
        let summary = BookingSummary::project(&rooms("1", "0", "0"), 2);
        assert_eq!(summary.nights, 2);
        assert_eq!(summary.nights_label, "2 nights");
        assert_eq!(summary.line_items.len(), 1);
        assert_eq!(summary.line_items[0].quantity, 1);
        assert_eq!(summary.line_items[0].label, "1 Standard Room");
        assert_eq!(format!("{}", summary.total), "$400.00");
    }

    #[test]
    fn test_total_matches_line_items_times_nights() {
        let summary = BookingSummary::project(&rooms("2", "1", "3"), 4);
        let per_night: i64 = summary
            .line_items
            .iter()
            .map(|item| item.nightly_subtotal.cents())
            .sum();
        assert_eq!(summary.total.cents(), per_night * summary.nights);
    }

    #[test]
    fn test_zero_nights_is_a_valid_display_state() {
        let summary = BookingSummary::project(&rooms("2", "0", "0"), 0);
        assert_eq!(summary.nights, 0);
        assert_eq!(summary.nights_label, "0 nights");
        assert!(summary.total.is_zero());
        // The selection still shows even though nothing is priced yet.
        assert_eq!(summary.line_items.len(), 1);
        assert!(summary.has_any_selection);
    }

    #[test]
    fn test_empty_selection_reports_no_selection() {
        let summary = BookingSummary::project(&QuantitySet::empty(), 3);
        assert!(summary.line_items.is_empty());
        assert!(!summary.has_any_selection);
        assert!(summary.total.is_zero());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let set = rooms("1", "2", "0");
        let first = BookingSummary::project(&set, 3);
        let second = BookingSummary::project(&set, 3);
        assert_eq!(first, second);
    }
}
