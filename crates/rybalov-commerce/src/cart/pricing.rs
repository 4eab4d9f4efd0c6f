//! Cart totals snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Derived totals for a cart at one point in time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub total_items: u64,
    /// Sum of all line subtotals.
    pub total_price: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Whether the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LineTotal {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use crate::cart::Cart;
    use crate::catalog;
    use crate::ids::ProductId;
    use crate::money::Money;

    #[test]
    fn test_totals_line_breakdown() {
        let mut cart = Cart::new();
        let line = catalog::find(ProductId::new(3)).unwrap();
        cart.add(*line);
        cart.add(*line);

        let totals = cart.totals();
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.lines.len(), 1);
        assert_eq!(totals.lines[0].unit_price, Money::rub(890));
        assert_eq!(totals.lines[0].subtotal, Money::rub(1780));
        assert_eq!(totals.total_price, Money::rub(1780));
    }

    #[test]
    fn test_empty_totals() {
        let totals = Cart::new().totals();
        assert!(totals.is_empty());
        assert_eq!(totals.total_items, 0);
    }
}
