//! Storefront domain types and logic.
//!
//! This crate holds everything a storefront presentation layer needs and
//! nothing it renders:
//!
//! - **Catalog**: the compiled-in products and their category labels
//! - **Search**: category filtering over the catalog
//! - **Cart**: insertion-ordered cart with add / remove / set-quantity
//! - **Navigation**: the page enum and menus
//! - **State**: the single `StoreState` mutated through `StoreAction`s
//! - **View**: `StoreView`, a render-ready projection of the state
//! - **Checkout**: the unvalidated contact form and the order summary
//!
//! # Example
//!
//! ```
//! use shop_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let mut state = StoreState::default();
//!
//! let tee = catalog.get(ProductId::new(1)).cloned().unwrap();
//! let bag = catalog.get(ProductId::new(3)).cloned().unwrap();
//! state.apply(StoreAction::AddToCart(tee.clone()));
//! state.apply(StoreAction::AddToCart(bag));
//! state.apply(StoreAction::AddToCart(tee));
//!
//! assert_eq!(state.cart.total_price().amount, 13_500);
//! assert_eq!(state.cart.total_item_count(), 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod navigation;
pub mod search;
pub mod state;
pub mod view;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, Product, ALL_CATEGORIES_LABEL};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Search
    pub use crate::search::filter_by_category;

    // Navigation and state
    pub use crate::navigation::{Page, FOOTER_MENU, HEADER_MENU};
    pub use crate::state::{StoreAction, StoreState};
    pub use crate::view::{CartLine, CategoryChip, MenuEntry, StoreView};

    // Checkout
    pub use crate::checkout::{CheckoutField, CheckoutForm, OrderSummary, SummaryLine};
}
