//! Shopping cart module.
//!
//! Contains the cart aggregate, its lines and the derived totals.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartAction, CartChange, CartLine};
pub use pricing::{CartTotals, LineTotal};
