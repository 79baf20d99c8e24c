//! # Discount Module
//!
//! Quantity-tiered discount evaluation for sale lines.
//!
//! ## The Tier Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Quantity Discount Tiers                         │
//! │                                                                 │
//! │   Quantity      Rate      Why                                   │
//! │   ─────────     ─────     ─────────────────────────────────     │
//! │   1 – 3         0%        below the bulk threshold              │
//! │   4 – 9         10%       standard bulk discount                │
//! │   10 – 20       20%       large bulk discount                   │
//! │   > 20          ──        REJECTED: cannot sell more than       │
//! │                           20 identical items on one line        │
//! │                                                                 │
//! │   Bands are mutually exclusive; every valid quantity maps to    │
//! │   exactly one rate.                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::discount::price_line;
//! use tally_core::money::Money;
//!
//! let pricing = price_line(15, Money::from_cents(10_000)).unwrap();
//! assert_eq!(pricing.discount.cents(), 30_000); // 20% of $1500
//! assert_eq!(pricing.total.cents(), 120_000);   // $1200
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SaleError;
use crate::money::Money;
use crate::MAX_IDENTICAL_ITEMS;

// =============================================================================
// Tier Boundaries
// =============================================================================

/// First quantity that earns the standard bulk discount.
pub const STANDARD_BULK_MIN: i64 = 4;

/// First quantity that earns the large bulk discount.
pub const LARGE_BULK_MIN: i64 = 10;

/// Standard bulk discount: 10%.
pub const STANDARD_BULK_BPS: u32 = 1000;

/// Large bulk discount: 20%.
pub const LARGE_BULK_BPS: u32 = 2000;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 2000 bps = 20%. Integer bps keep rate math exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Rate Lookup
// =============================================================================

/// Maps a purchased quantity to its discount rate.
///
/// ## Errors
/// - [`SaleError::QuantityNotPositive`] for zero or negative quantities
/// - [`SaleError::TooManyIdenticalItems`] above [`MAX_IDENTICAL_ITEMS`]
pub fn rate_for_quantity(quantity: i64) -> Result<DiscountRate, SaleError> {
    if quantity <= 0 {
        return Err(SaleError::QuantityNotPositive);
    }
    if quantity > MAX_IDENTICAL_ITEMS {
        return Err(SaleError::TooManyIdenticalItems);
    }

    Ok(match quantity {
        q if q >= LARGE_BULK_MIN => DiscountRate::from_bps(LARGE_BULK_BPS),
        q if q >= STANDARD_BULK_MIN => DiscountRate::from_bps(STANDARD_BULK_BPS),
        _ => DiscountRate::zero(),
    })
}

// =============================================================================
// Line Pricing
// =============================================================================

/// The priced outcome of one sale line: discount taken and amount owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePricing {
    /// Discount amount taken off the gross (`quantity × unit_price × rate`).
    pub discount: Money,
    /// Amount owed for the line (`gross - discount`).
    pub total: Money,
}

/// Prices one sale line under the tier table.
///
/// Pure function: no state is touched, so callers decide where the result
/// lands. Calling it twice with the same inputs yields the same outputs.
///
/// ## Errors
/// - [`SaleError::QuantityNotPositive`] for zero or negative quantities
/// - [`SaleError::TooManyIdenticalItems`] above [`MAX_IDENTICAL_ITEMS`]
/// - [`SaleError::NegativeUnitPrice`] for unit prices below zero
pub fn price_line(quantity: i64, unit_price: Money) -> Result<LinePricing, SaleError> {
    if unit_price.is_negative() {
        return Err(SaleError::NegativeUnitPrice);
    }

    let rate = rate_for_quantity(quantity)?;
    let gross = unit_price.multiply_quantity(quantity);
    let discount = gross.discount_amount(rate);

    Ok(LinePricing {
        discount,
        total: gross - discount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rate_bands() {
        assert_eq!(rate_for_quantity(1).unwrap(), DiscountRate::zero());
        assert_eq!(rate_for_quantity(3).unwrap(), DiscountRate::zero());
        assert_eq!(rate_for_quantity(4).unwrap().bps(), STANDARD_BULK_BPS);
        assert_eq!(rate_for_quantity(9).unwrap().bps(), STANDARD_BULK_BPS);
        assert_eq!(rate_for_quantity(10).unwrap().bps(), LARGE_BULK_BPS);
        assert_eq!(rate_for_quantity(20).unwrap().bps(), LARGE_BULK_BPS);
    }

    #[test]
    fn test_quantity_above_limit_is_rejected() {
        let err = rate_for_quantity(21).unwrap_err();
        assert_eq!(err, SaleError::TooManyIdenticalItems);
        assert_eq!(err.to_string(), "Cannot sell more than 20 identical items.");
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        assert_eq!(
            rate_for_quantity(0).unwrap_err(),
            SaleError::QuantityNotPositive
        );
        assert_eq!(
            rate_for_quantity(-3).unwrap_err(),
            SaleError::QuantityNotPositive
        );
    }

    #[test]
    fn test_negative_unit_price_is_rejected() {
        assert_eq!(
            price_line(5, Money::from_cents(-1)).unwrap_err(),
            SaleError::NegativeUnitPrice
        );
    }

    // Concrete scenarios at $100.00 per unit.

    #[test]
    fn test_three_units_no_discount() {
        let pricing = price_line(3, Money::from_cents(10_000)).unwrap();
        assert_eq!(pricing.discount, Money::zero());
        assert_eq!(pricing.total, Money::from_cents(30_000)); // $300
    }

    #[test]
    fn test_five_units_ten_percent() {
        let pricing = price_line(5, Money::from_cents(10_000)).unwrap();
        assert_eq!(pricing.discount, Money::from_cents(5_000)); // $50
        assert_eq!(pricing.total, Money::from_cents(45_000)); // $450
    }

    #[test]
    fn test_fifteen_units_twenty_percent() {
        let pricing = price_line(15, Money::from_cents(10_000)).unwrap();
        assert_eq!(pricing.discount, Money::from_cents(30_000)); // $300
        assert_eq!(pricing.total, Money::from_cents(120_000)); // $1200
    }

    #[test]
    fn test_twenty_five_units_rejected() {
        let err = price_line(25, Money::from_cents(10_000)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot sell more than 20 identical items.");
    }

    #[test]
    fn test_zero_unit_price_is_allowed() {
        // Giveaway item: free no matter the band.
        let pricing = price_line(12, Money::zero()).unwrap();
        assert_eq!(pricing.discount, Money::zero());
        assert_eq!(pricing.total, Money::zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: below the bulk threshold the customer pays gross.
        #[test]
        fn no_discount_band_pays_gross(
            qty in 1i64..=3,
            unit_cents in 0i64..1_000_000,
        ) {
            let unit = Money::from_cents(unit_cents);
            let pricing = price_line(qty, unit).unwrap();
            prop_assert_eq!(pricing.discount, Money::zero());
            prop_assert_eq!(pricing.total, unit.multiply_quantity(qty));
        }

        /// Property: the standard bulk band takes a rounded 10% off gross.
        #[test]
        fn standard_band_takes_ten_percent(
            qty in 4i64..=9,
            unit_cents in 0i64..1_000_000,
        ) {
            let gross = unit_cents * qty;
            let pricing = price_line(qty, Money::from_cents(unit_cents)).unwrap();
            prop_assert_eq!(pricing.discount.cents(), (gross * 1000 + 5000) / 10000);
            prop_assert_eq!(pricing.total + pricing.discount, Money::from_cents(gross));
        }

        /// Property: the large bulk band takes a rounded 20% off gross.
        #[test]
        fn large_band_takes_twenty_percent(
            qty in 10i64..=20,
            unit_cents in 0i64..1_000_000,
        ) {
            let gross = unit_cents * qty;
            let pricing = price_line(qty, Money::from_cents(unit_cents)).unwrap();
            prop_assert_eq!(pricing.discount.cents(), (gross * 2000 + 5000) / 10000);
            prop_assert_eq!(pricing.total + pricing.discount, Money::from_cents(gross));
        }

        /// Property: every quantity above the limit is rejected with the
        /// exact rule-violation message.
        #[test]
        fn above_limit_always_rejected(qty in 21i64..10_000) {
            let err = price_line(qty, Money::from_cents(100)).unwrap_err();
            prop_assert_eq!(err, SaleError::TooManyIdenticalItems);
        }

        /// Property: pricing is deterministic (pure function).
        #[test]
        fn pricing_is_deterministic(
            qty in 1i64..=20,
            unit_cents in 0i64..1_000_000,
        ) {
            let a = price_line(qty, Money::from_cents(unit_cents)).unwrap();
            let b = price_line(qty, Money::from_cents(unit_cents)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
