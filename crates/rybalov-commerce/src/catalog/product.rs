//! Product type and the compiled-in catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A product in the catalog.
///
/// Catalog entries are compile-time constants, so text fields borrow
/// `'static` strings and the whole value is `Copy`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: &'static str,
    /// Unit price.
    pub price: Money,
    /// Category label shown as a badge.
    pub category: &'static str,
    /// Image reference; empty when the card shows the placeholder icon.
    pub image: &'static str,
}

impl Product {
    /// Create a catalog product priced in rubles with no image.
    pub const fn new(id: u32, name: &'static str, price: i64, category: &'static str) -> Self {
        Self {
            id: ProductId::new(id),
            name,
            price: Money::rub(price),
            category,
            image: "",
        }
    }

    /// Whether the product has an image reference.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

static CATALOG: [Product; 6] = [
    Product::new(1, "Спиннинг Shimano Catana", 4500, "Удилища"),
    Product::new(2, "Катушка Daiwa Ninja", 3200, "Катушки"),
    Product::new(3, "Леска Power Pro 0.15", 890, "Лески"),
    Product::new(4, "Приманка Mepps Aglia", 450, "Приманки"),
    Product::new(5, "Поплавки набор 10шт", 320, "Оснастка"),
    Product::new(6, "Крючки Owner 50шт", 280, "Оснастка"),
];

/// All catalog products in display order.
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by id.
pub fn find(id: ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn test_catalog_prices_positive() {
        assert!(products().iter().all(|p| p.price.amount > 0));
    }

    #[test]
    fn test_find() {
        let reel = find(ProductId::new(2)).unwrap();
        assert_eq!(reel.name, "Катушка Daiwa Ninja");
        assert_eq!(reel.price, Money::rub(3200));
        assert!(!reel.has_image());
        assert!(find(ProductId::new(42)).is_none());
    }
}
