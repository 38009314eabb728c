//! Category labels and the catalog category filter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Product;

/// Label of the synthetic "all categories" entry.
pub const ALL_CATEGORIES_LABEL: &str = "Все";

/// The active category selection in the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Every product, regardless of category.
    #[default]
    All,
    /// Only products whose category equals this label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a display label.
    ///
    /// The "all" label maps to [`CategoryFilter::All`]; anything else is
    /// taken as a category name, known or not.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Create a filter for a single category.
    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Check whether this is the "all" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// Collect the closed set of filters for a product list: the "all"
    /// sentinel followed by each distinct category in first-appearance order.
    pub fn collect<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        for product in products {
            if !filters.iter().any(|f| f.label() == product.category) {
                filters.push(CategoryFilter::only(product.category.as_str()));
            }
        }
        filters
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: u32, category: &str) -> Product {
        Product::new(id, "p", Money::new(100, Currency::RUB), category, "img")
    }

    #[test]
    fn test_from_label() {
        assert_eq!(CategoryFilter::from_label("Все"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Одежда"),
            CategoryFilter::Only("Одежда".to_string())
        );
    }

    #[test]
    fn test_label_roundtrip() {
        for label in ["Все", "Одежда", "Аксессуары", "Обувь"] {
            assert_eq!(CategoryFilter::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_matches_is_exact() {
        let filter = CategoryFilter::only("Одежда");
        assert!(filter.matches(&product(1, "Одежда")));
        assert!(!filter.matches(&product(2, "одежда")));
        assert!(CategoryFilter::All.matches(&product(3, "anything")));
    }

    #[test]
    fn test_collect_first_appearance_order() {
        let products = [
            product(1, "B"),
            product(2, "A"),
            product(3, "B"),
            product(4, "C"),
        ];
        let labels: Vec<_> = CategoryFilter::collect(&products)
            .iter()
            .map(|f| f.label().to_string())
            .collect();
        assert_eq!(labels, vec!["Все", "B", "A", "C"]);
    }

    #[test]
    fn test_collect_empty() {
        let none: [Product; 0] = [];
        assert_eq!(CategoryFilter::collect(&none), vec![CategoryFilter::All]);
    }
}
