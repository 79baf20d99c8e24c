//! # Sale Specifications
//!
//! Named predicates over [`Sale`], used by reporting and query callers to
//! classify sales without mutating them.
//!
//! One predicate does not warrant a trait hierarchy: a plain function
//! composes fine with iterator adapters, and new predicates can join it
//! here as they appear.

use crate::sale::Sale;

/// True iff the sale has not been cancelled.
///
/// Pure and read-only; depends on nothing but the cancellation flag, so it
/// is safe to call concurrently on the same sale.
#[inline]
pub fn is_active(sale: &Sale) -> bool {
    !sale.is_cancelled
}

/// Filters an iterator of sales down to the active ones.
///
/// Convenience for reporting callers:
/// ```rust
/// use tally_core::specification::filter_active;
/// # let sales: Vec<tally_core::Sale> = Vec::new();
/// let active: Vec<_> = filter_active(sales.iter()).collect();
/// ```
pub fn filter_active<'a, I>(sales: I) -> impl Iterator<Item = &'a Sale>
where
    I: Iterator<Item = &'a Sale>,
{
    sales.filter(|sale| is_active(sale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::test_support::sample_sale;

    #[test]
    fn test_active_sale_satisfies_predicate() {
        let sale = sample_sale();
        assert!(is_active(&sale));
        assert_eq!(is_active(&sale), !sale.is_cancelled);
    }

    #[test]
    fn test_cancelled_sale_is_not_active() {
        let mut sale = sample_sale();
        sale.cancel().unwrap();
        assert!(!is_active(&sale));
        assert_eq!(is_active(&sale), !sale.is_cancelled);
    }

    #[test]
    fn test_filter_active_drops_cancelled_sales() {
        let mut cancelled = sample_sale();
        cancelled.cancel().unwrap();
        let sales = vec![sample_sale(), cancelled, sample_sale()];

        let active: Vec<_> = filter_active(sales.iter()).collect();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|s| !s.is_cancelled));
    }
}
