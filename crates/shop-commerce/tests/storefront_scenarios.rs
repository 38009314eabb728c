//! End-to-end walks through a storefront session.

use shop_commerce::prelude::*;

fn product(catalog: &Catalog, id: u32) -> Product {
    catalog.get(ProductId::new(id)).cloned().expect("seed product")
}

fn cart_snapshot(state: &StoreState) -> Vec<(u32, i64)> {
    state
        .cart
        .items()
        .iter()
        .map(|i| (i.id().get(), i.quantity))
        .collect()
}

#[test]
fn add_add_readd_scenario() {
    let catalog = Catalog::seed();
    let mut state = StoreState::new(catalog.currency());

    state.apply(StoreAction::AddToCart(product(&catalog, 1)));
    state.apply(StoreAction::AddToCart(product(&catalog, 3)));
    state.apply(StoreAction::AddToCart(product(&catalog, 1)));

    assert_eq!(cart_snapshot(&state), vec![(1, 2), (3, 1)]);
    assert_eq!(state.cart.total_price().amount, 2 * 2500 + 8500);
    assert_eq!(state.cart.total_item_count(), 3);
}

#[test]
fn linear_total_example() {
    let catalog = Catalog::seed();
    let mut state = StoreState::new(catalog.currency());

    state.apply(StoreAction::AddToCart(product(&catalog, 1)));
    state.apply(StoreAction::AddToCart(product(&catalog, 2)));
    state.apply(StoreAction::SetQuantity(ProductId::new(1), 2));

    assert_eq!(state.cart.total_price().amount, 9500);
}

#[test]
fn browse_filter_and_checkout() {
    let catalog = Catalog::seed();
    let mut state = StoreState::new(catalog.currency());

    state.apply(StoreAction::Navigate(Page::Catalog));
    state.apply(StoreAction::SelectCategory(CategoryFilter::from_label("Аксессуары")));

    let view = StoreView::build(&state, &catalog, 3);
    let shown: Vec<_> = view.products.iter().map(|p| p.id.get()).collect();
    assert_eq!(shown, vec![3, 6]);

    for p in view.products.clone() {
        state.apply(StoreAction::AddToCart(p));
    }
    state.apply(StoreAction::OpenCart);

    let view = StoreView::build(&state, &catalog, 3);
    assert!(view.cart_open);
    assert_eq!(view.badge, Some(2));
    assert_eq!(view.cart_total.amount, 8500 + 2000);

    state.apply(StoreAction::Checkout);
    let summary = OrderSummary::from_cart(&state.cart);
    assert_eq!(state.page, Page::Checkout);
    assert!(!state.cart_open);
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.total.display(), "10\u{a0}500\u{a0}\u{20bd}");
}

#[test]
fn decrementing_to_zero_drops_the_line() {
    let catalog = Catalog::seed();
    let mut state = StoreState::new(catalog.currency());
    state.apply(StoreAction::AddToCart(product(&catalog, 5)));

    let q = state.cart.quantity_of(ProductId::new(5)).unwrap_or_default();
    state.apply(StoreAction::SetQuantity(ProductId::new(5), q - 1));

    assert!(state.cart.is_empty());
    assert_eq!(StoreView::build(&state, &catalog, 3).badge, None);
}

#[test]
fn actions_serialize_for_logging() {
    let action = StoreAction::SetQuantity(ProductId::new(3), 2);
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["action"], "set_quantity");

    let nav = serde_json::to_value(StoreAction::Navigate(Page::Delivery)).unwrap();
    assert_eq!(nav["value"], "delivery");
}
