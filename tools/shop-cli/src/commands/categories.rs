//! Category listing.

use anyhow::Result;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct CategoryRow {
    label: String,
    products: usize,
}

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let app = ctx.app();
    let catalog = app.catalog();

    let rows: Vec<CategoryRow> = catalog
        .categories()
        .into_iter()
        .map(|filter| CategoryRow {
            products: catalog.filter(&filter).len(),
            label: filter.label().to_string(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    for row in &rows {
        ctx.output
            .list_item(&format!("{} ({})", row.label, row.products));
    }

    Ok(())
}
