//! Catalog browsing command.

use anyhow::{Context as _, Result};
use cart_core::catalog::{PriceRange, ProductGrid, SortOption};
use cart_core::price::format_price;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 4] = [14, 30, 12, 12];

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut grid = ProductGrid::new(catalog.products);

    if let Some(query) = args.search.as_deref() {
        grid.search(query);
    } else if args.category.is_some() || args.price.is_some() {
        let range = args
            .price
            .as_deref()
            .map(|text| {
                text.parse::<PriceRange>()
                    .with_context(|| format!("Invalid price range '{}'", text))
            })
            .transpose()?;
        grid.filter(args.category.as_deref(), range.as_ref());
    }

    let sort = args.sort.as_deref().map(SortOption::parse).unwrap_or_default();
    grid.sort(sort);

    let visible: Vec<_> = grid.visible().collect();
    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {}, {})",
        visible.len(),
        grid.len(),
        sort.display_name()
    ));
    if visible.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &WIDTHS);
    for card in visible {
        let id = truncate(card.id.as_str(), WIDTHS[0]);
        let title = truncate(&card.title, WIDTHS[1]);
        let category = truncate(&card.category, WIDTHS[2]);
        let price = format_price(card.price, ctx.currency_symbol());
        ctx.output
            .table_row(&[id.as_str(), title.as_str(), category.as_str(), price.as_str()], &WIDTHS);
    }

    Ok(())
}
