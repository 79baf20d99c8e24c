//! # Validation Module
//!
//! Structural validation of a [`Sale`] aggregate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Accumulate, Don't Bail                       │
//! │                                                                 │
//! │  validate_sale(&sale)                                           │
//! │       │                                                         │
//! │       ├── customer empty? ──► push "customer is required"       │
//! │       ├── branch empty?   ──► push "branch is required"         │
//! │       ├── items empty?    ──► push "items must contain ..."     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ValidationReport { errors: [...] }                             │
//! │                                                                 │
//! │  ALL checks run unconditionally. A sale missing every field     │
//! │  reports three errors, not one - the caller can show the user   │
//! │  everything wrong in a single round trip.                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validator is structural only: it checks the shape of the sale, not
//! the line-level discount rules (those ran when each line was priced).
//! It never raises - invalid sales come back as a report, not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sale::Sale;

// =============================================================================
// Validation Report
// =============================================================================

/// The outcome of validating a sale: valid iff zero errors were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Builds a report from already-collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationReport { errors }
    }

    /// True iff no check failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected failures, in field order (customer, branch, items).
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Number of failed checks.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True iff the report carries no errors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True iff some failure tags the given field.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

/// Joins every failure message so a wrapped report stays readable in logs.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Sale Validator
// =============================================================================

/// Runs every structural check over the sale and reports all failures.
///
/// ## Rules
/// - `customer` must be non-empty (whitespace does not count)
/// - `branch` must be non-empty
/// - `items` must hold at least one line
///
/// Read-only: safe to call concurrently on the same sale.
pub fn validate_sale(sale: &Sale) -> ValidationReport {
    let mut errors = Vec::new();

    if sale.customer.trim().is_empty() {
        errors.push(ValidationError::required("customer"));
    }

    if sale.branch.trim().is_empty() {
        errors.push(ValidationError::required("branch"));
    }

    if sale.items.is_empty() {
        errors.push(ValidationError::NoItems);
    }

    ValidationReport::from_errors(errors)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::test_support::sample_sale;

    #[test]
    fn test_valid_sale_has_zero_errors() {
        let report = validate_sale(&sample_sale());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_empty_customer_is_tagged() {
        let mut sale = sample_sale();
        sale.customer = String::new();

        let report = validate_sale(&sale);
        assert!(!report.is_valid());
        assert!(report.has_error_for("customer"));
        assert!(!report.has_error_for("branch"));
    }

    #[test]
    fn test_whitespace_customer_is_tagged() {
        let mut sale = sample_sale();
        sale.customer = "   ".to_string();

        assert!(validate_sale(&sale).has_error_for("customer"));
    }

    #[test]
    fn test_empty_branch_is_tagged() {
        let mut sale = sample_sale();
        sale.branch = String::new();

        let report = validate_sale(&sale);
        assert!(!report.is_valid());
        assert!(report.has_error_for("branch"));
    }

    #[test]
    fn test_no_items_is_tagged() {
        let mut sale = sample_sale();
        sale.items.clear();

        let report = validate_sale(&sale);
        assert!(!report.is_valid());
        assert!(report.has_error_for("items"));
    }

    #[test]
    fn test_all_three_violations_collected() {
        let mut sale = sample_sale();
        sale.customer = String::new();
        sale.branch = String::new();
        sale.items.clear();

        let report = validate_sale(&sale);
        assert!(!report.is_valid());
        assert_eq!(report.len(), 3);
        assert!(report.has_error_for("customer"));
        assert!(report.has_error_for("branch"));
        assert!(report.has_error_for("items"));
    }

    #[test]
    fn test_report_display_joins_messages() {
        let mut sale = sample_sale();
        sale.customer = String::new();
        sale.items.clear();

        let report = validate_sale(&sale);
        assert_eq!(
            report.to_string(),
            "customer is required; items must contain at least one sale line"
        );
    }
}
