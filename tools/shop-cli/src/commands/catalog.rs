//! Product listing.

use anyhow::Result;
use serde::Serialize;
use shop_commerce::prelude::*;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::column_widths;

#[derive(Serialize)]
struct ProductRow<'a> {
    id: u32,
    name: &'a str,
    category: &'a str,
    price: i64,
    currency: &'static str,
    price_display: String,
    image: &'a str,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let app = ctx.app();
    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::from_label)
        .unwrap_or_default();

    let products = app.catalog().filter(&filter);
    ctx.output
        .debug(&format!("{} product(s) in {}", products.len(), filter.label()));

    if ctx.output.is_json() {
        let rows: Vec<ProductRow<'_>> = products
            .iter()
            .map(|p| ProductRow {
                id: p.id.get(),
                name: &p.name,
                category: &p.category,
                price: p.price.amount,
                currency: p.price.currency.code(),
                price_display: p.price_display(),
                image: &p.image,
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output
            .warn(&format!("No products in category '{}'", filter.label()));
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", Page::Catalog.display_name(), filter.label()));

    let header = ["ID", "Name", "Category", "Price"];
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                p.price_display(),
            ]
        })
        .collect();
    let widths = column_widths(&header, &rows);

    ctx.output.table_row(&header, &widths);
    for row in &rows {
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    Ok(())
}
