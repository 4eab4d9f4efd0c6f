//! Domain types and logic for the RybaLov storefront.
//!
//! - **Catalog**: the fixed product list
//! - **Cart**: cart lines, total mutations, derived totals
//! - **Learn**: tutorials and the video/article filter
//!
//! # Example
//!
//! ```
//! use rybalov_commerce::prelude::*;
//!
//! let rod = *catalog::find(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(rod);
//! cart.add(rod);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), Money::rub(9000));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod learn;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::Product;

    // Cart
    pub use crate::cart::{Cart, CartAction, CartChange, CartLine, CartTotals, LineTotal};

    // Learn
    pub use crate::learn::{tutorials, Difficulty, Tutorial, TutorialFilter, TutorialKind};
}
