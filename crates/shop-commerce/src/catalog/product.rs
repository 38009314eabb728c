//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Products are immutable once the catalog is built; the cart stores
/// copies of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category label (e.g., "Одежда").
    pub category: String,
    /// Image URI, resolved by the presentation layer.
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let p = Product::new(
            7u32,
            "Шарф",
            Money::new(1500, Currency::RUB),
            "Аксессуары",
            "https://example.com/scarf.jpg",
        );
        assert_eq!(p.id, ProductId::new(7));
        assert_eq!(p.category, "Аксессуары");
        assert_eq!(p.price_display(), "1\u{a0}500\u{a0}\u{20bd}");
    }
}
