//! # Domain Types
//!
//! Room types and the fixed price table for Santorini Blue.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Room Catalog                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Standard     │   │    Superior     │   │     Family      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  $200 / night   │   │  $300 / night   │   │  $400 / night   │       │
//! │  │  sleeps 1       │   │  sleeps 2       │   │  sleeps 5       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  The order above is the canonical display order everywhere:             │
//! │  summary line items, checkout payload rooms, the details view.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The price table is deliberately NOT configurable: rates live in one place
//! and every computation reads them from here.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Room Type
// =============================================================================

/// The three bookable room types, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Superior,
    Family,
}

impl RoomType {
    /// All room types in canonical order (Standard, Superior, Family).
    ///
    /// Iterating this array is the ONLY sanctioned room-type ordering; the
    /// summary and the checkout payload both derive their sequence from it.
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Superior, RoomType::Family];

    /// Stable identifier used in the persisted checkout payload.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Superior => "superior",
            RoomType::Family => "family",
        }
    }

    /// Display name in singular form ("1 Standard Room").
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Superior => "Superior Room",
            RoomType::Family => "Family Room",
        }
    }

    /// Fixed nightly rate for this room type.
    ///
    /// ## The Price Table
    /// Standard $200, Superior $300, Family $400 - in cents, per night.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        match self {
            RoomType::Standard => Money::from_cents(20_000),
            RoomType::Superior => Money::from_cents(30_000),
            RoomType::Family => Money::from_cents(40_000),
        }
    }

    /// Maximum number of guests the room sleeps.
    #[inline]
    pub const fn max_guests(&self) -> u8 {
        match self {
            RoomType::Standard => 1,
            RoomType::Superior => 2,
            RoomType::Family => 5,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
