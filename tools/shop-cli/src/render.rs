//! Plain-text rendering of store pages.

use shop_commerce::prelude::*;
use shop_core::StoreApp;

/// Header line: brand, menu with the active page marked, cart badge.
pub fn header(app: &StoreApp, view: &StoreView) -> String {
    let menu: Vec<String> = view
        .header_menu
        .iter()
        .map(|entry| {
            if entry.active {
                format!("[{}]", entry.label)
            } else {
                entry.label.to_string()
            }
        })
        .collect();

    let cart = match view.badge {
        Some(count) => format!("{} ({})", app.content().cart.title, count),
        None => app.content().cart.title.clone(),
    };

    format!("{} | {} | {}", app.config().store.name, menu.join("  "), cart)
}

/// One product as a line of text.
pub fn product_line(product: &Product) -> String {
    format!(
        "#{} {} ({}) {}",
        product.id,
        product.name,
        product.category,
        product.price_display()
    )
}

/// The body of the current page.
pub fn page(app: &StoreApp, state: &StoreState) -> String {
    let view = app.view(state);
    let content = app.content();
    let mut lines = vec![view.page.display_name().to_uppercase(), String::new()];

    match view.page {
        Page::Home => {
            lines.push(content.hero.headline.join(" "));
            lines.push(content.hero.tagline.clone());
            lines.push(format!("> {}", content.hero.cta_label));
            lines.push(String::new());
            lines.push(content.hero.featured_heading.clone());
            lines.extend(view.featured.iter().map(|p| format!("  {}", product_line(p))));
        }
        Page::Catalog => {
            let chips: Vec<String> = view
                .categories
                .iter()
                .map(|chip| {
                    if chip.selected {
                        format!("[{}]", chip.label)
                    } else {
                        chip.label.clone()
                    }
                })
                .collect();
            lines.push(chips.join("  "));
            lines.push(String::new());
            lines.extend(view.products.iter().map(|p| format!("  {}", product_line(p))));
        }
        Page::Checkout => {
            let summary = OrderSummary::from_cart(&state.cart);
            lines.push(content.checkout.order_heading.clone());
            if summary.is_empty() {
                lines.push(format!("  {}", content.cart.empty));
            }
            lines.extend(
                summary
                    .lines
                    .iter()
                    .map(|line| format!("  {}  {}", line.label, line.total.display())),
            );
            lines.push(format!("{} {}", content.cart.total_label, summary.total.display()));
            lines.push(String::new());
            lines.push(content.checkout.contact_heading.clone());
            lines.extend(CheckoutField::ALL.iter().map(|field| {
                format!("  {}: {}", field.label(), content.checkout.placeholder(*field))
            }));
            lines.push(format!("> {}", content.checkout.confirm_label));
        }
        Page::Delivery => {
            for section in &content.delivery {
                lines.push(section.title.clone());
                lines.extend(section.lines.iter().map(|line| format!("  - {}", line)));
            }
        }
        Page::Contacts => {
            for card in &content.contacts {
                lines.push(format!("{}: {}", card.title, card.primary));
                lines.push(format!("  {}", card.secondary));
            }
        }
    }

    lines.join("\n")
}

/// The cart overlay.
pub fn cart(app: &StoreApp, state: &StoreState) -> String {
    let view = app.view(state);
    let texts = &app.content().cart;
    let mut lines = vec![texts.title.to_uppercase()];

    if view.cart_is_empty() {
        lines.push(format!("  {}", texts.empty));
        return lines.join("\n");
    }

    lines.extend(view.cart_lines.iter().map(|line| {
        format!(
            "  {} \u{00d7} {} = {}",
            line.name,
            line.quantity,
            line.line_total.display()
        )
    }));
    lines.push(format!("{} {}", texts.total_label, view.cart_total.display()));
    lines.join("\n")
}
