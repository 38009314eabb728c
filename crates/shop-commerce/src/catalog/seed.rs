//! The compiled-in catalog.

use serde::{Deserialize, Serialize};

use super::{CategoryFilter, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::search::filter_by_category;

const CDN: &str = "https://cdn.poehali.dev/projects/9a95673a-e649-4022-86d5-8cc00db4db3f/files";

/// (id, name, price, category, image file)
const SEED: [(u32, &str, i64, &str, &str); 6] = [
    (1, "Классическая футболка", 2500, "Одежда", "db255660-93ed-49f0-b367-3db15930d798.jpg"),
    (2, "Черные джинсы", 4500, "Одежда", "3f179525-2e13-45c5-b50d-29300683988b.jpg"),
    (3, "Кожаная сумка", 8500, "Аксессуары", "89347c68-bd08-4318-8f88-2a6a3229a57d.jpg"),
    (4, "Минималист рубашка", 3500, "Одежда", "db255660-93ed-49f0-b367-3db15930d798.jpg"),
    (5, "Повседневные брюки", 4000, "Одежда", "3f179525-2e13-45c5-b50d-29300683988b.jpg"),
    (6, "Кошелек", 2000, "Аксессуары", "89347c68-bd08-4318-8f88-2a6a3229a57d.jpg"),
];

/// Read-only product list with its derived category set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// The seed catalog priced in roubles.
    pub fn seed() -> Self {
        Self::seed_in(Currency::RUB)
    }

    /// The seed catalog priced in the given currency.
    pub fn seed_in(currency: Currency) -> Self {
        let products = SEED
            .iter()
            .map(|&(id, name, price, category, image)| {
                Product::new(
                    id,
                    name,
                    Money::new(price, currency),
                    category,
                    format!("{CDN}/{image}"),
                )
            })
            .collect();
        Self { products, currency }
    }

    /// Build a catalog from an explicit product list.
    pub fn from_products(products: Vec<Product>, currency: Currency) -> Self {
        Self { products, currency }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The currency every price is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The "all" sentinel plus every distinct category.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::collect(&self.products)
    }

    /// The first `count` products, shown on the home page.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    /// Products passing the category filter, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        filter_by_category(&self.products, filter)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
