//! # Pricing
//!
//! Nightly subtotal and grand total computation.
//!
//! ## The Whole Computation
//! ```text
//! total = Σ over room types (count × nightly rate) × nights
//! ```
//!
//! Pure functions over validated inputs: safe to call on every keystroke, and
//! the same inputs always produce the same total. `nights == 0` (no valid date
//! range yet) prices every selection at zero - a valid display state while the
//! guest is still filling in dates, not an error.

use crate::money::Money;
use crate::quantity::QuantitySet;
use crate::types::RoomType;

/// Per-night subtotal for one room type at a given count.
///
/// ## Example
/// ```rust
/// use santorini_core::pricing::nightly_subtotal;
/// use santorini_core::types::RoomType;
///
/// // 2 × $300
/// assert_eq!(nightly_subtotal(RoomType::Superior, 2).cents(), 60_000);
/// ```
#[inline]
pub fn nightly_subtotal(room: RoomType, count: i64) -> Money {
    room.unit_price() * count
}

/// Grand total for a selection over a number of nights.
///
/// Upstream guarantees `nights >= 0`; zero nights yields a zero total
/// regardless of the selection.
///
/// ## Example
/// ```rust
/// use santorini_core::pricing::compute_total;
/// use santorini_core::quantity::QuantitySet;
///
/// let (rooms, _) = QuantitySet::from_raw("2", "1", "0");
/// // (2 × $200 + 1 × $300) × 3 nights
/// assert_eq!(compute_total(&rooms, 3).cents(), 210_000);
/// ```
pub fn compute_total(rooms: &QuantitySet, nights: i64) -> Money {
    let per_night: Money = rooms
        .iter()
        .map(|(room, count)| nightly_subtotal(room, count))
        .sum();

    per_night * nights
}

// =============================================================================
// Unit Tests
// =============================================================================
