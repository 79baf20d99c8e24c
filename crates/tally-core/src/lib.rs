//! # tally-core: Pure Business Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It contains the sale pricing
//! and validation rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tally POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Command intake (HTTP handlers)                 │ │
//! │  │   create_sale request ──► CreateSaleCommand ──► response       │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ tally-core (THIS CRATE) ★                      │ │
//! │  │                                                                │ │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────────┐    │ │
//! │  │  │   sale   │ │ discount │ │  money   │ │   validation   │    │ │
//! │  │  │   Sale   │ │  tiers   │ │  Money   │ │  field checks  │    │ │
//! │  │  │ SaleItem │ │  rates   │ │  cents   │ │    reports     │    │ │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └────────────────┘    │ │
//! │  │                                                                │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │        Persistence collaborator (owned by the caller)          │ │
//! │  │   receives a validated Sale, returns the stored record         │ │
//! │  └────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sale`] - The [`Sale`] aggregate and its [`SaleItem`] lines
//! - [`discount`] - Quantity-tiered discount evaluation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Structural sale validation with field-tagged errors
//! - [`specification`] - The active-sale predicate used by reporting
//! - [`create_sale`] - Command intake seam for building a committable Sale
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::discount::price_line;
//! use tally_core::money::Money;
//!
//! // 5 units at $100.00 each falls in the 10% bulk band
//! let pricing = price_line(5, Money::from_cents(10_000)).unwrap();
//!
//! assert_eq!(pricing.discount, Money::from_cents(5_000)); // $50.00 off
//! assert_eq!(pricing.total, Money::from_cents(45_000));   // $450.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod create_sale;
pub mod discount;
pub mod error;
pub mod money;
pub mod sale;
pub mod specification;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Sale` instead of
// `use tally_core::sale::Sale`

pub use create_sale::{CreateSaleCommand, SaleLineRequest};
pub use discount::{price_line, rate_for_quantity, DiscountRate, LinePricing};
pub use error::{SaleError, SaleResult, ValidationError};
pub use money::Money;
pub use sale::{Sale, SaleItem};
pub use specification::is_active;
pub use validation::{validate_sale, ValidationReport};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of identical units allowed on a single sale line.
///
/// ## Business Reason
/// Bulk purchases above this size must be negotiated, not rung up at the
/// register. Exceeding it is a hard rule violation, not a clamp.
pub const MAX_IDENTICAL_ITEMS: i64 = 20;
