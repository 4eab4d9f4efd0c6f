//! Product catalog module.
//!
//! The catalog is a fixed, read-only sequence initialized at compile time.

mod product;

pub use product::{find, products, Product};
