//! Cart and cart line types.
//!
//! Every mutation is total: unknown product ids are no-ops and a quantity
//! driven to zero or below removes the line. A line with quantity 0 never
//! exists.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A shopping cart.
///
/// Lines keep insertion order and product ids are unique within the cart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// A line in the cart: one product with a positive quantity.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }
}

/// A requested cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add(Product),
    /// Delete the line for a product.
    Remove(ProductId),
    /// Shift the quantity of a line by `delta`.
    ChangeQuantity { id: ProductId, delta: i64 },
}

/// What a mutation did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Inserted { id: ProductId },
    /// An existing line now has `quantity` units.
    Updated { id: ProductId, quantity: u32 },
    /// The line was deleted.
    Removed { id: ProductId },
    /// Nothing matched; the cart is untouched.
    Unchanged,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    pub fn add(&mut self, product: Product) -> CartChange {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::trace!(product_id = %product.id, quantity = line.quantity, "cart line incremented");
            return CartChange::Updated {
                id: product.id,
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
        tracing::trace!(product_id = %product.id, "cart line inserted");
        CartChange::Inserted { id: product.id }
    }

    /// Remove the line for `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: ProductId) -> CartChange {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        if self.lines.len() < len_before {
            tracing::trace!(product_id = %id, "cart line removed");
            CartChange::Removed { id }
        } else {
            CartChange::Unchanged
        }
    }

    /// Shift the quantity of the line for `id` by `delta`.
    ///
    /// A resulting quantity of zero or below deletes the line. Absent ids
    /// are a no-op.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> CartChange {
        let Some(index) = self.lines.iter().position(|l| l.product.id == id) else {
            return CartChange::Unchanged;
        };

        let new_quantity = i64::from(self.lines[index].quantity).saturating_add(delta);
        if new_quantity <= 0 {
            self.lines.remove(index);
            tracing::trace!(product_id = %id, delta, "cart line dropped to zero");
            return CartChange::Removed { id };
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        self.lines[index].quantity = quantity;
        tracing::trace!(product_id = %id, delta, quantity, "cart line quantity changed");
        CartChange::Updated { id, quantity }
    }

    /// Apply a mutation in place.
    pub fn apply(&mut self, action: CartAction) -> CartChange {
        match action {
            CartAction::Add(product) => self.add(product),
            CartAction::Remove(id) => self.remove(id),
            CartAction::ChangeQuantity { id, delta } => self.change_quantity(id, delta),
        }
    }

    /// Apply a mutation and return the resulting cart.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.apply(action);
        self
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map_or(0, |l| l.quantity)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total_price(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::subtotal))
    }

    /// Snapshot of the derived totals, computed fresh from the lines.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.total_items(),
            total_price: self.total_price(),
            lines: self
                .lines
                .iter()
                .map(|l| LineTotal {
                    product_id: l.product.id,
                    unit_price: l.product.price,
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn rod() -> Product {
        Product::new(1, "Спиннинг Shimano Catana", 4500, "Удилища")
    }

    fn reel() -> Product {
        Product::new(2, "Катушка Daiwa Ninja", 3200, "Катушки")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::rub(0));
    }

    #[test]
    fn test_add_to_empty_cart() {
        for product in catalog::products() {
            let cart = Cart::new().reduce(CartAction::Add(*product));
            assert_eq!(cart.lines().len(), 1);
            assert_eq!(cart.lines()[0].quantity, 1);
            assert_eq!(cart.lines()[0].product.id, product.id);
        }
    }

    #[test]
    fn test_add_same_item_twice() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(rod()), CartChange::Inserted { id: rod().id });
        assert_eq!(
            cart.add(rod()),
            CartChange::Updated {
                id: rod().id,
                quantity: 2
            }
        );

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(rod().id), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::rub(9000));
    }

    #[test]
    fn test_add_twice_matches_increment() {
        let twice = Cart::new()
            .reduce(CartAction::Add(rod()))
            .reduce(CartAction::Add(rod()));
        let incremented = Cart::new()
            .reduce(CartAction::Add(rod()))
            .reduce(CartAction::ChangeQuantity {
                id: rod().id,
                delta: 1,
            });
        assert_eq!(twice, incremented);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(reel());
        cart.add(rod());
        cart.add(reel());
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(reel());

        assert_eq!(
            cart.change_quantity(reel().id, -1),
            CartChange::Removed { id: reel().id }
        );
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::rub(0));
    }

    #[test]
    fn test_change_quantity_never_negative() {
        for overshoot in [0, 1, 50] {
            let mut cart = Cart::new();
            cart.add(rod());
            cart.add(rod());
            cart.add(rod());
            let q = i64::from(cart.quantity_of(rod().id));

            cart.change_quantity(rod().id, -(q + overshoot));
            assert!(cart.line(rod().id).is_none());
            assert_eq!(cart.total_items(), 0);
        }
    }

    #[test]
    fn test_change_quantity_positive() {
        let mut cart = Cart::new();
        cart.add(rod());
        assert_eq!(
            cart.change_quantity(rod().id, 4),
            CartChange::Updated {
                id: rod().id,
                quantity: 5
            }
        );
        assert_eq!(cart.total_price(), Money::rub(22500));
    }

    #[test]
    fn test_change_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(rod());
        let before = cart.clone();
        assert_eq!(cart.change_quantity(ProductId::new(99), -1), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(rod());
        cart.add(reel());

        assert_eq!(cart.remove(rod().id), CartChange::Removed { id: rod().id });
        let after_first = cart.clone();
        assert_eq!(cart.remove(rod().id), CartChange::Unchanged);
        assert_eq!(cart, after_first);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_total_items_zero_iff_empty() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_items() == 0, cart.is_empty());
        cart.add(reel());
        assert_eq!(cart.total_items() == 0, cart.is_empty());
        cart.remove(reel().id);
        assert_eq!(cart.total_items() == 0, cart.is_empty());
    }

    #[test]
    fn test_totals_recomputed_after_each_mutation() {
        let mut cart = Cart::new();
        let actions = [
            CartAction::Add(rod()),
            CartAction::Add(reel()),
            CartAction::ChangeQuantity {
                id: reel().id,
                delta: 2,
            },
            CartAction::Remove(rod().id),
            CartAction::ChangeQuantity {
                id: reel().id,
                delta: -1,
            },
        ];

        for action in actions {
            cart.apply(action);
            let expected: i64 = cart
                .lines()
                .iter()
                .map(|l| l.product.price.amount * i64::from(l.quantity))
                .sum();
            assert_eq!(cart.total_price().amount, expected);
            assert_eq!(cart.totals().total_price.amount, expected);
        }
        assert_eq!(cart.total_price(), Money::rub(6400));
    }

    #[test]
    fn test_total_price_matches_line_sum_for_whole_catalog() {
        let mut cart = Cart::default();
        for (i, product) in catalog::products().iter().enumerate() {
            cart.add(*product);
            cart.change_quantity(product.id, i as i64);

            let expected: i64 = cart
                .lines()
                .iter()
                .map(|l| l.product.price.amount * i64::from(l.quantity))
                .sum();
            assert_eq!(cart.total_price().amount, expected);
        }
        assert_eq!(cart.total_items(), 21);
        assert_eq!(cart.total_price(), Money::rub(4500 + 6400 + 2670 + 1800 + 1600 + 1680));
    }
}
