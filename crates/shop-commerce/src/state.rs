//! Store state and the actions that mutate it.
//!
//! `StoreState` is the only mutable value in a storefront session. The
//! presentation layer owns one instance and routes every user gesture
//! through [`StoreState::apply`].

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{CategoryFilter, Product};
use crate::ids::ProductId;
use crate::money::Currency;
use crate::navigation::Page;

/// A user gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum StoreAction {
    /// Show a page.
    Navigate(Page),
    /// Change the catalog category filter.
    SelectCategory(CategoryFilter),
    /// Add one unit of a product to the cart.
    AddToCart(Product),
    /// Drop a product from the cart.
    RemoveFromCart(ProductId),
    /// Set a product's quantity; 0 or less removes it.
    SetQuantity(ProductId, i64),
    /// Show the cart overlay.
    OpenCart,
    /// Hide the cart overlay.
    CloseCart,
    /// Leave the cart overlay for the checkout page.
    Checkout,
}

impl StoreAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::Navigate(_) => "navigate",
            StoreAction::SelectCategory(_) => "select_category",
            StoreAction::AddToCart(_) => "add_to_cart",
            StoreAction::RemoveFromCart(_) => "remove_from_cart",
            StoreAction::SetQuantity(..) => "set_quantity",
            StoreAction::OpenCart => "open_cart",
            StoreAction::CloseCart => "close_cart",
            StoreAction::Checkout => "checkout",
        }
    }
}

/// Top-level view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreState {
    /// Page being shown.
    pub page: Page,
    /// Catalog category filter.
    pub category: CategoryFilter,
    /// Cart contents.
    pub cart: Cart,
    /// Whether the cart overlay is open.
    pub cart_open: bool,
}

impl StoreState {
    /// Fresh state: home page, all categories, empty cart, overlay closed.
    pub fn new(currency: Currency) -> Self {
        Self {
            page: Page::Home,
            category: CategoryFilter::All,
            cart: Cart::new(currency),
            cart_open: false,
        }
    }

    /// Apply an action. Every action is total; unknown product ids are
    /// ignored.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::Navigate(page) => self.page = page,
            StoreAction::SelectCategory(filter) => self.category = filter,
            StoreAction::AddToCart(product) => self.cart.add(&product),
            StoreAction::RemoveFromCart(id) => {
                self.cart.remove(id);
            }
            StoreAction::SetQuantity(id, quantity) => {
                self.cart.set_quantity(id, quantity);
            }
            StoreAction::OpenCart => self.cart_open = true,
            StoreAction::CloseCart => self.cart_open = false,
            StoreAction::Checkout => {
                self.cart_open = false;
                self.page = Page::Checkout;
            }
        }
    }

    /// Apply a sequence of actions in order.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = StoreAction>) {
        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32) -> Product {
        Catalog::seed().get(ProductId::new(id)).cloned().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = StoreState::default();
        assert_eq!(state.page, Page::Home);
        assert!(state.category.is_all());
        assert!(state.cart.is_empty());
        assert!(!state.cart_open);
    }

    #[test]
    fn test_any_page_reachable_from_any_page() {
        for from in Page::ALL {
            for to in Page::ALL {
                let mut state = StoreState::default();
                state.apply(StoreAction::Navigate(from));
                state.apply(StoreAction::Navigate(to));
                assert_eq!(state.page, to);
            }
        }
    }

    #[test]
    fn test_navigation_idempotent() {
        for page in Page::ALL {
            let mut once = StoreState::default();
            once.apply(StoreAction::Navigate(page));

            let mut twice = once.clone();
            twice.apply(StoreAction::Navigate(page));

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_checkout_with_empty_cart() {
        let mut state = StoreState::default();
        state.apply(StoreAction::OpenCart);
        state.apply(StoreAction::Checkout);
        assert_eq!(state.page, Page::Checkout);
        assert!(!state.cart_open);
    }

    #[test]
    fn test_overlay_is_orthogonal_to_page() {
        let mut state = StoreState::default();
        state.apply(StoreAction::Navigate(Page::Delivery));
        state.apply(StoreAction::OpenCart);
        assert_eq!(state.page, Page::Delivery);
        assert!(state.cart_open);

        state.apply(StoreAction::CloseCart);
        assert_eq!(state.page, Page::Delivery);
        assert!(!state.cart_open);
    }

    #[test]
    fn test_cart_actions() {
        let mut state = StoreState::default();
        state.apply_all([
            StoreAction::AddToCart(product(1)),
            StoreAction::AddToCart(product(3)),
            StoreAction::SetQuantity(ProductId::new(3), 4),
            StoreAction::RemoveFromCart(ProductId::new(1)),
            StoreAction::RemoveFromCart(ProductId::new(77)),
        ]);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.quantity_of(ProductId::new(3)), Some(4));
    }

    #[test]
    fn test_select_category_keeps_cart() {
        let mut state = StoreState::default();
        state.apply(StoreAction::AddToCart(product(2)));
        state.apply(StoreAction::SelectCategory(CategoryFilter::only("Аксессуары")));
        assert_eq!(state.category.label(), "Аксессуары");
        assert_eq!(state.cart.total_item_count(), 1);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(StoreAction::OpenCart.name(), "open_cart");
        assert_eq!(StoreAction::SetQuantity(ProductId::new(1), 2).name(), "set_quantity");
    }
}
