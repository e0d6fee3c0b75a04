//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A Superior Room is 30000 cents/night, never 300.0 dollars.           │
//! │    Totals are exact products of integers - no drift, ever.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use santorini_core::money::Money;
//!
//! let rate = Money::from_cents(20_000); // $200.00/night
//! let two_nights = rate * 2;            // $400.00
//! assert_eq!(format!("{}", two_nights), "$400.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64**: room totals are tiny, but integer math should never be the
///   thing that constrains the price table
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support - the persisted payload carries cents
///
/// ## Where Money Flows
/// ```text
/// RoomType::unit_price ──► nightly subtotal ──► summary total
///                                       │
///                                       └──► CheckoutPayload.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use santorini_core::money::Money;
    ///
    /// let rate = Money::from_cents(20_000); // Represents $200.00
    /// assert_eq!(rate.cents(), 20_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// The summary panel and receipts render through this; amounts in this domain
/// are never negative, but the sign is handled anyway.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by an integer count (room quantities, nights).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Summing an iterator of Money values (folding line items into a total).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(30_050);
        assert_eq!(money.cents(), 30_050);
        assert_eq!(money.dollars(), 300);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(20_000)), "$200.00");
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(20_000);
        let b = Money::from_cents(30_000);

        assert_eq!((a + b).cents(), 50_000);

        let mut acc = Money::zero();
        acc += a;
        acc += a;
        assert_eq!(acc.cents(), 40_000);

        let result: Money = b * 3;
        assert_eq!(result.cents(), 90_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [20_000, 30_000, 40_000]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 90_000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::from_cents(1).is_zero());
    }
}
