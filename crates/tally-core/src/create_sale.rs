//! # Create-Sale Intake
//!
//! The seam between a command intake collaborator (an HTTP handler, a CLI,
//! a message consumer) and the rule engine.
//!
//! ## Intake Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  external request                                               │
//! │       │ deserialize (serde)                                     │
//! │       ▼                                                         │
//! │  CreateSaleCommand                                              │
//! │       │ into_sale()                                             │
//! │       ├── price every line (tier rules)   ──► SaleError on a    │
//! │       │                                       rule violation    │
//! │       ├── validate the whole sale         ──► SaleError with    │
//! │       │                                       the FULL report   │
//! │       ▼                                                         │
//! │  committable Sale ──► handed to the caller's persistence layer  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence itself stays outside this crate: the contract is "give the
//! store a valid, fully priced sale", and `into_sale` produces exactly
//! that or a typed error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SaleError;
use crate::money::Money;
use crate::sale::{Sale, SaleItem};

// =============================================================================
// Command Shapes
// =============================================================================

/// One requested product line, as it arrives from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLineRequest {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// Request to record a new sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSaleCommand {
    pub sale_number: String,
    pub customer: String,
    pub branch: String,
    pub sale_date: DateTime<Utc>,
    pub items: Vec<SaleLineRequest>,
}

impl CreateSaleCommand {
    /// Builds a committable [`Sale`] from the command.
    ///
    /// Applies the discount rules to every line, then validates the whole
    /// sale. On structural failure the returned [`SaleError::Validation`]
    /// carries the complete field-tagged error list, so the caller can
    /// surface every problem at once.
    pub fn into_sale(self) -> Result<Sale, SaleError> {
        let items = self
            .items
            .into_iter()
            .map(|line| {
                SaleItem::new(
                    line.product_id,
                    line.product_name,
                    line.quantity,
                    Money::from_cents(line.unit_price_cents),
                )
            })
            .collect();

        let mut sale = Sale::new(
            self.sale_number,
            self.customer,
            self.branch,
            self.sale_date,
            items,
        );

        sale.apply_discounts()?;

        let report = sale.validate();
        if !report.is_valid() {
            return Err(SaleError::Validation(report));
        }

        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
