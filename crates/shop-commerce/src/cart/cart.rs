//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Items keep insertion order, each product appears at most once, and every
/// stored quantity is at least 1. None of the operations fail: unknown
/// product ids are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart totalled in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing item is incremented in place; a new product is appended
    /// with quantity 1. An empty cart takes on the product's currency.
    pub fn add(&mut self, product: &Product) {
        if self.items.is_empty() {
            self.currency = product.price.currency;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Remove a product from the cart.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// A quantity of 0 or less removes the item. Products not in the cart
    /// are left alone. Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Increase a product's quantity by one (the "+" button).
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, q.saturating_add(1)),
            None => false,
        }
    }

    /// Decrease a product's quantity by one, removing it at zero (the "-" button).
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, q - 1),
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all items.
    pub fn total_price(&self) -> Money {
        Money::sum(self.items.iter().map(CartItem::line_total), self.currency)
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn total_item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the item for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Get the quantity of a product, if present.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency totals are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

/// A product paired with a purchase quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Snapshot of the product.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartItem {
    /// Product identifier.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            Money::new(price, Currency::RUB),
            "Одежда",
            "img",
        )
    }

    fn snapshot(cart: &Cart) -> Vec<(u32, i64)> {
        cart.items().iter().map(|i| (i.id().get(), i.quantity)).collect()
    }

    #[test]
    fn test_empty_cart_adopts_product_currency() {
        let catalog = crate::catalog::Catalog::seed_in(Currency::EUR);
        let jacket = catalog.products()[0].clone();
        let mut cart = Cart::default();
        assert_eq!(cart.currency(), Currency::RUB);

        cart.add(&jacket);
        cart.add(&jacket);
        let total = cart.total_price();
        assert_eq!(total.currency, Currency::EUR);
        assert_eq!(total.amount, jacket.price.amount * 2);
        assert_eq!(cart.currency(), Currency::EUR);
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price().amount, 0);
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_price().amount, 2500);
    }

    #[test]
    fn test_add_existing_increments_in_place() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        cart.add(&product(2, 4500));
        cart.add(&product(1, 2500));

        assert_eq!(snapshot(&cart), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        cart.add(&product(2, 4500));

        assert!(cart.remove(ProductId::new(1)));
        assert_eq!(snapshot(&cart), vec![(2, 1)]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));

        assert!(cart.set_quantity(ProductId::new(1), 5));
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(5));
        assert_eq!(cart.total_price().amount, 12_500);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        cart.add(&product(2, 4500));

        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(snapshot(&cart), vec![(2, 1)]);

        cart.set_quantity(ProductId::new(2), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        let before = cart.clone();

        assert!(!cart.set_quantity(ProductId::new(9), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_decrement() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));

        cart.increment(ProductId::new(1));
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));

        cart.decrement(ProductId::new(1));
        cart.decrement(ProductId::new(1));
        assert!(cart.is_empty());

        assert!(!cart.increment(ProductId::new(1)));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        cart.add(&product(1, 2500));
        cart.add(&product(2, 4500));

        assert_eq!(cart.total_price().amount, 9500);
        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().line_total().amount, 5000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2500));
        cart.clear();
        assert!(cart.is_empty());
    }
}
