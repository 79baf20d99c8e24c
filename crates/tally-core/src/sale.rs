//! # Sale Aggregate
//!
//! The [`Sale`] transaction and its [`SaleItem`] lines.
//!
//! ## Aggregate Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Sale                                   │
//! │  ───────────────────────────────────────────────────────────    │
//! │  sale_number   external identifier, assigned by the caller      │
//! │  customer      display name (must be non-empty)                 │
//! │  branch        selling location (must be non-empty)             │
//! │  sale_date     transaction timestamp                            │
//! │  is_cancelled  one-way flag, starts false                       │
//! │  items ──────► [ SaleItem, SaleItem, ... ]  (must be non-empty) │
//! │                   │                                             │
//! │                   │  product_id, product_name                   │
//! │                   │  quantity, unit_price_cents                 │
//! │                   └─ discount_cents, total_cents (COMPUTED -    │
//! │                      written only by apply_discount)            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A sale exclusively owns its items; lines are never shared between
//! sales. The mutating operations take `&mut self`, so exclusive access
//! is a compile-time property - no locking happens here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discount::price_line;
use crate::error::SaleError;
use crate::money::Money;
use crate::validation::{validate_sale, ValidationReport};

// =============================================================================
// Sale Item
// =============================================================================

/// One product line within a sale.
///
/// Product name and unit price are frozen at the time of sale (snapshot
/// pattern), so later catalog edits never change a recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    /// Product being sold.
    pub product_id: Uuid,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    /// Number of identical units on this line.
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Discount taken off this line, in cents. Computed, never set by hand.
    pub discount_cents: i64,
    /// Amount owed for this line, in cents. Computed, never set by hand.
    pub total_cents: i64,
}

impl SaleItem {
    /// Creates an unpriced line. Discount and total start at zero and are
    /// written by [`SaleItem::apply_discount`].
    pub fn new(product_id: Uuid, product_name: String, quantity: i64, unit_price: Money) -> Self {
        SaleItem {
            product_id,
            product_name,
            quantity,
            unit_price_cents: unit_price.cents(),
            discount_cents: 0,
            total_cents: 0,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the discount taken as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Gross amount before any discount (`quantity × unit_price`).
    #[inline]
    pub fn gross(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Prices this line under the quantity tier table, writing
    /// `discount_cents` and `total_cents`.
    ///
    /// Recomputes from scratch every time - calling it twice with unchanged
    /// inputs yields the same stored values, never an accumulated discount.
    ///
    /// ## Errors
    /// Fails with the line untouched when the quantity is non-positive,
    /// above [`crate::MAX_IDENTICAL_ITEMS`], or the unit price is negative.
    pub fn apply_discount(&mut self) -> Result<(), SaleError> {
        let pricing = price_line(self.quantity, self.unit_price())?;
        self.discount_cents = pricing.discount.cents();
        self.total_cents = pricing.total.cents();
        Ok(())
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction: header fields plus owned line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// External identifier, assigned outside this crate.
    pub sale_number: String,
    /// Customer display name.
    pub customer: String,
    /// Selling location display name.
    pub branch: String,
    /// When the transaction happened.
    pub sale_date: DateTime<Utc>,
    /// The product lines. Order is preserved but carries no meaning.
    pub items: Vec<SaleItem>,
    /// One-way cancellation flag, starts false.
    pub is_cancelled: bool,
}

impl Sale {
    /// Creates an active sale from header fields and lines.
    pub fn new(
        sale_number: String,
        customer: String,
        branch: String,
        sale_date: DateTime<Utc>,
        items: Vec<SaleItem>,
    ) -> Self {
        Sale {
            sale_number,
            customer,
            branch,
            sale_date,
            items,
            is_cancelled: false,
        }
    }

    /// Prices every line under the tier table.
    ///
    /// Stops at the first rule violation; already-priced lines keep their
    /// recomputed values, the failing line and those after it are untouched.
    pub fn apply_discounts(&mut self) -> Result<(), SaleError> {
        for item in &mut self.items {
            item.apply_discount()?;
        }
        Ok(())
    }

    /// Runs the structural checks and reports every failure.
    ///
    /// Never raises - an invalid sale comes back as a report with
    /// `is_valid() == false` and one field-tagged error per violation.
    pub fn validate(&self) -> ValidationReport {
        validate_sale(self)
    }

    /// Sum of the line totals.
    pub fn total_amount(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.total())
    }

    /// Cancels the sale.
    ///
    /// One-way, one-shot transition: Active → Cancelled. Fails with
    /// [`SaleError::SaleAlreadyCancelled`] (state unchanged) on a second
    /// call; nothing transitions a cancelled sale back to active.
    pub fn cancel(&mut self) -> Result<(), SaleError> {
        if self.is_cancelled {
            return Err(SaleError::SaleAlreadyCancelled);
        }
        self.is_cancelled = true;
        Ok(())
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A priced, structurally valid sale with one 10%-band line.
    pub(crate) fn sample_sale() -> Sale {
        let mut item = SaleItem::new(
            Uuid::new_v4(),
            "Sparkling Water 330ml".to_string(),
            5,
            Money::from_cents(10_000),
        );
        item.apply_discount().unwrap();

        Sale::new(
            "SALE-0001".to_string(),
            "Acme Markets".to_string(),
            "Downtown".to_string(),
            Utc::now(),
            vec![item],
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
