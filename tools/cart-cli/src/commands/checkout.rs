//! Checkout command.

use anyhow::Result;
use cart_core::checkout::CheckoutOutcome;

use crate::context::Context;

/// Run the checkout command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    match store.checkout()? {
        CheckoutOutcome::EmptyCart => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "completed": false,
                    "message": CheckoutOutcome::EMPTY_MESSAGE,
                }));
            } else {
                ctx.output.warn(CheckoutOutcome::EMPTY_MESSAGE);
            }
        }
        CheckoutOutcome::Completed(summary) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "completed": true,
                    "summary": summary,
                }));
            } else {
                ctx.output.header("Checkout");
                for line in summary.message(ctx.currency_symbol()).lines() {
                    ctx.output.line(line);
                }
            }
        }
    }

    Ok(())
}
