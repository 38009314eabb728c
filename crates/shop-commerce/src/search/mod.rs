//! Search module.
//!
//! Category filtering over the catalog.

mod filter;

pub use filter::filter_by_category;
