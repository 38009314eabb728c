//! Category filter over a product list.

use crate::catalog::{CategoryFilter, Product};

/// Products whose category passes `filter`, preserving relative order.
///
/// [`CategoryFilter::All`] returns every product. A category no product
/// carries yields an empty list.
pub fn filter_by_category<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}
