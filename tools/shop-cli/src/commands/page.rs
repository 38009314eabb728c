//! Print a single store page.

use anyhow::{Context as _, Result};
use serde_json::json;
use shop_commerce::prelude::*;

use super::PageArgs;
use crate::context::Context;
use crate::render;

/// Run the page command.
pub fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let page: Page = args
        .slug
        .parse()
        .with_context(|| format!("Expected one of: {}", slugs()))?;

    let app = ctx.app();
    let mut state = app.initial_state();
    state.apply(StoreAction::Navigate(page));

    if ctx.output.is_json() {
        let content = app.content();
        let view = app.view(&state);
        let body = match page {
            Page::Home => json!({ "hero": content.hero, "featured": view.featured }),
            Page::Catalog => json!({ "categories": view.categories, "products": view.products }),
            Page::Checkout => json!({
                "summary": OrderSummary::from_cart(&state.cart),
                "form": content.checkout,
            }),
            Page::Delivery => json!({ "sections": content.delivery }),
            Page::Contacts => json!({ "cards": content.contacts }),
        };
        ctx.output.json(&json!({
            "page": page.as_str(),
            "title": page.display_name(),
            "content": body,
        }));
        return Ok(());
    }

    ctx.output.text(&render::header(&app, &app.view(&state)));
    ctx.output.text("");
    ctx.output.text(&render::page(&app, &state));
    Ok(())
}

fn slugs() -> String {
    Page::ALL
        .iter()
        .map(Page::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
