//! Product catalog module.
//!
//! Contains the product type, category labels and the compiled-in seed
//! catalog.

mod category;
mod product;
mod seed;

pub use category::{CategoryFilter, ALL_CATEGORIES_LABEL};
pub use product::Product;
pub use seed::Catalog;
