//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Error Types                              │
//! │                                                                 │
//! │  SaleError (this file)                                          │
//! │  ├── Rule violations   - an item-level business rule broke      │
//! │  │     TooManyIdenticalItems, QuantityNotPositive,              │
//! │  │     NegativeUnitPrice                                        │
//! │  ├── Invalid state     - an illegal lifecycle transition        │
//! │  │     SaleAlreadyCancelled                                     │
//! │  └── Validation        - structural field failures, carrying    │
//! │        the COMPLETE list of field-tagged errors                 │
//! │                                                                 │
//! │  None of these are retryable: the caller must correct the       │
//! │  input (or check state) and resubmit.                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Message text is part of the contract: callers and their users see
//!    these strings verbatim, so they must stay stable

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationReport;

// =============================================================================
// Sale Error
// =============================================================================

/// Business rule, lifecycle, and validation failures raised by the core.
///
/// Raised at the point of violation and surfaced unchanged to the calling
/// collaborator, which owns user-facing presentation (HTTP status mapping
/// and the like).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    /// A sale line asked for more identical units than the business allows.
    ///
    /// ## When This Occurs
    /// - Quantity above [`crate::MAX_IDENTICAL_ITEMS`] on a single line
    ///
    /// The caller must lower the quantity or split the line; the item's
    /// stored discount and total are left exactly as they were.
    #[error("Cannot sell more than 20 identical items.")]
    TooManyIdenticalItems,

    /// Quantity was zero or negative.
    ///
    /// A sale line records units actually handed over the counter, so a
    /// non-positive count is always caller error rather than a pricing tier.
    #[error("quantity must be a positive number of units")]
    QuantityNotPositive,

    /// Unit price was negative. Zero is allowed (giveaway items).
    #[error("unit price must not be negative")]
    NegativeUnitPrice,

    /// The sale was already cancelled.
    ///
    /// Cancellation is a one-way, one-shot transition; there is no path
    /// back to active and no second cancellation.
    #[error("Sale is already cancelled.")]
    SaleAlreadyCancelled,

    /// One or more structural fields on the sale are invalid.
    ///
    /// Carries the complete report so callers can surface every violated
    /// field at once, not just the first.
    #[error("sale validation failed: {0}")]
    Validation(ValidationReport),
}

impl From<ValidationReport> for SaleError {
    fn from(report: ValidationReport) -> Self {
        SaleError::Validation(report)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-tagged structural failure on a sale.
///
/// Collected into a [`ValidationReport`] by the validator; individual
/// checks never short-circuit each other.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// A required header field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The sale carries no line items.
    #[error("items must contain at least one sale line")]
    NoItems,
}

impl ValidationError {
    /// Tags an empty required field by name.
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    /// The stable tag naming the violated field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } => field,
            ValidationError::NoItems => "items",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SaleError.
pub type SaleResult<T> = Result<T, SaleError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_message_is_stable() {
        assert_eq!(
            SaleError::TooManyIdenticalItems.to_string(),
            "Cannot sell more than 20 identical items."
        );
    }

    #[test]
    fn test_invalid_state_message_is_stable() {
        assert_eq!(
            SaleError::SaleAlreadyCancelled.to_string(),
            "Sale is already cancelled."
        );
    }

    #[test]
    fn test_validation_error_messages_and_tags() {
        let err = ValidationError::required("customer");
        assert_eq!(err.to_string(), "customer is required");
        assert_eq!(err.field(), "customer");

        assert_eq!(ValidationError::NoItems.field(), "items");
    }

    #[test]
    fn test_report_converts_to_sale_error() {
        let report = ValidationReport::from_errors(vec![ValidationError::NoItems]);
        let err: SaleError = report.into();
        assert!(matches!(err, SaleError::Validation(_)));
    }
}
