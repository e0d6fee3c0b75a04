//! # Room Quantities
//!
//! Parsing and validation of the per-room-type counter fields.
//!
//! ## The Reset-To-Zero Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Counter field value          Parsed count      Signal                  │
//! │  ───────────────────          ────────────      ──────                  │
//! │  ""        (untouched)   ──►  0                 none - "none requested" │
//! │  "3"                     ──►  3                 none                    │
//! │  "2.5"     (not integer) ──►  0                 InvalidQuantity         │
//! │  "12"      (over bound)  ──►  0                 InvalidQuantity         │
//! │  "-1"      (under bound) ──►  0                 InvalidQuantity         │
//! │  "two"     (garbage)     ──►  0                 InvalidQuantity         │
//! │                                                                         │
//! │  Rejected input is REPLACED with zero, never clamped to the nearest     │
//! │  bound - a guest who typed 12 did not mean 9.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `QuantitySet` has no persistent identity: it is re-derived from the raw
//! fields on every recompute.

use crate::error::InvalidQuantity;
use crate::types::RoomType;
use crate::{MAX_ROOMS_PER_TYPE, MIN_ROOMS_PER_TYPE};

// =============================================================================
// Quantity Set
// =============================================================================

/// Validated per-room-type counts, each within `[0, 9]`.
///
/// ## Invariant
/// Every count in a constructed set is an integer within bounds; input that
/// fails this is already zero by the time the set exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantitySet {
    standard: i64,
    superior: i64,
    family: i64,
}

impl QuantitySet {
    /// A set with every count at zero.
    pub fn empty() -> Self {
        QuantitySet::default()
    }

    /// Derives a set from the three raw counter fields.
    ///
    /// Total function: every input produces a usable set. Rejected slots are
    /// zero in the returned set and described by one [`InvalidQuantity`]
    /// signal each, so the caller can surface feedback per counter.
    ///
    /// ## Example
    /// ```rust
    /// use santorini_core::quantity::QuantitySet;
    /// use santorini_core::types::RoomType;
    ///
    /// let (set, issues) = QuantitySet::from_raw("2", "", "2.5");
    /// assert_eq!(set.count(RoomType::Standard), 2);
    /// assert_eq!(set.count(RoomType::Superior), 0); // empty = none requested
    /// assert_eq!(set.count(RoomType::Family), 0);   // rejected, reset to 0
    /// assert_eq!(issues.len(), 1);
    /// assert_eq!(issues[0].room, RoomType::Family);
    /// ```
    pub fn from_raw(
        standard_raw: &str,
        superior_raw: &str,
        family_raw: &str,
    ) -> (QuantitySet, Vec<InvalidQuantity>) {
        let mut issues = Vec::new();
        let mut slot = |room: RoomType, raw: &str| match parse_room_count(raw) {
            Some(count) => count,
            None => {
                issues.push(InvalidQuantity {
                    room,
                    raw: raw.to_string(),
                });
                0
            }
        };

        let set = QuantitySet {
            standard: slot(RoomType::Standard, standard_raw),
            superior: slot(RoomType::Superior, superior_raw),
            family: slot(RoomType::Family, family_raw),
        };

        (set, issues)
    }

    /// The count for one room type.
    #[inline]
    pub fn count(&self, room: RoomType) -> i64 {
        match room {
            RoomType::Standard => self.standard,
            RoomType::Superior => self.superior,
            RoomType::Family => self.family,
        }
    }

    /// Total rooms requested across all types.
    pub fn total_rooms(&self) -> i64 {
        RoomType::ALL.iter().map(|room| self.count(*room)).sum()
    }

    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.total_rooms() == 0
    }

    /// Iterates `(room type, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomType, i64)> + '_ {
        RoomType::ALL.into_iter().map(|room| (room, self.count(room)))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses one counter field; `None` means "rejected, reset the slot".
///
/// An empty field is a valid zero - leaving a counter untouched means "none
/// requested", not an error. Integer parsing rejects "2.5" outright; fractional
/// rooms are not rounded into existence.
fn parse_room_count(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Some(0);
    }

    let count: i64 = raw.parse().ok()?;

    if (MIN_ROOMS_PER_TYPE..=MAX_ROOMS_PER_TYPE).contains(&count) {
        Some(count)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
