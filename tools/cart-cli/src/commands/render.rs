//! Render the cart widget as HTML.

use anyhow::{Context as _, Result};
use cart_view::HtmlCartView;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store_with(HtmlCartView::new(ctx.currency_symbol()))?;
    if args.open {
        store.view_mut().open_panel();
    }
    let html = store.view().render_panel();

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote cart panel to {}", path.display()));
        }
        None => println!("{}", html),
    }

    Ok(())
}
