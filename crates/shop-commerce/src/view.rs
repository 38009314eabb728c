//! Render-ready projection of the store state.

use serde::Serialize;

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::navigation::{Page, FOOTER_MENU, HEADER_MENU};
use crate::state::StoreState;

/// A menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// A category button in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub filter: CategoryFilter,
    pub label: String,
    pub selected: bool,
}

/// A row in the cart overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreView {
    pub page: Page,
    pub cart_open: bool,
    pub header_menu: Vec<MenuEntry>,
    pub footer_menu: Vec<MenuEntry>,
    pub categories: Vec<CategoryChip>,
    /// Catalog products after the category filter.
    pub products: Vec<Product>,
    /// Products featured on the home page.
    pub featured: Vec<Product>,
    pub cart_lines: Vec<CartLine>,
    pub cart_total: Money,
    /// Badge count, hidden while the cart is empty.
    pub badge: Option<i64>,
}

impl StoreView {
    /// Project `state` against `catalog`.
    pub fn build(state: &StoreState, catalog: &Catalog, featured_count: usize) -> Self {
        let menu = |pages: &[Page], label: fn(&Page) -> &'static str| {
            pages
                .iter()
                .map(|page| MenuEntry {
                    page: *page,
                    label: label(page),
                    active: *page == state.page,
                })
                .collect::<Vec<_>>()
        };

        let categories = catalog
            .categories()
            .into_iter()
            .map(|filter| CategoryChip {
                label: filter.label().to_string(),
                selected: filter == state.category,
                filter,
            })
            .collect();

        let cart_lines = state
            .cart
            .items()
            .iter()
            .map(|item| CartLine {
                product_id: item.id(),
                name: item.product.name.clone(),
                image: item.product.image.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            page: state.page,
            cart_open: state.cart_open,
            header_menu: menu(&HEADER_MENU, Page::display_name),
            footer_menu: menu(&FOOTER_MENU, Page::footer_label),
            categories,
            products: catalog.filter(&state.category).into_iter().cloned().collect(),
            featured: catalog.featured(featured_count).to_vec(),
            cart_lines,
            cart_total: state.cart.total_price(),
            badge: (!state.cart.is_empty()).then(|| state.cart.total_item_count()),
        }
    }

    /// Check if the cart overlay has nothing to show.
    pub fn cart_is_empty(&self) -> bool {
        self.cart_lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreAction;

    #[test]
    fn test_initial_view() {
        let catalog = Catalog::seed();
        let view = StoreView::build(&StoreState::default(), &catalog, 3);

        assert_eq!(view.page, Page::Home);
        assert_eq!(view.products.len(), 6);
        assert_eq!(view.featured.len(), 3);
        assert!(view.cart_is_empty());
        assert_eq!(view.badge, None);
        assert_eq!(view.cart_total.amount, 0);

        let active: Vec<_> = view.header_menu.iter().filter(|m| m.active).map(|m| m.page).collect();
        assert_eq!(active, vec![Page::Home]);
        assert!(view.footer_menu.iter().all(|m| !m.active));
    }

    #[test]
    fn test_category_chips() {
        let catalog = Catalog::seed();
        let mut state = StoreState::default();
        state.apply(StoreAction::SelectCategory(CategoryFilter::only("Аксессуары")));
        let view = StoreView::build(&state, &catalog, 3);

        let selected: Vec<_> = view
            .categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Аксессуары"]);
        assert_eq!(view.products.len(), 2);
    }

    #[test]
    fn test_cart_lines_and_badge() {
        let catalog = Catalog::seed();
        let mut state = StoreState::default();
        let tee = catalog.get(ProductId::new(1)).cloned().unwrap();
        state.apply(StoreAction::AddToCart(tee.clone()));
        state.apply(StoreAction::AddToCart(tee));
        let view = StoreView::build(&state, &catalog, 3);

        assert_eq!(view.badge, Some(2));
        assert_eq!(view.cart_lines.len(), 1);
        assert_eq!(view.cart_lines[0].line_total.amount, 5000);
        assert_eq!(view.cart_total.amount, 5000);
    }

    #[test]
    fn test_checkout_has_no_menu_highlight() {
        let catalog = Catalog::seed();
        let mut state = StoreState::default();
        state.apply(StoreAction::Checkout);
        let view = StoreView::build(&state, &catalog, 3);
        assert!(view.header_menu.iter().all(|m| !m.active));
    }
}
