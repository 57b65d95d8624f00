//! Show the starting catalog.

use anyhow::Result;
use till_register::Surface;
use till_view::{html, render_product_list};

use super::CatalogArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let register_config = ctx.config.register_config();
    let catalog = register_config.build_catalog();
    let view = render_product_list(catalog.products());

    if args.html {
        ctx.output.raw(&html::product_list(&view));
        return Ok(());
    }

    ctx.output.debug(&format!(
        "seed={} currency={} price_edit={}",
        register_config.seed.as_str(),
        register_config.currency.code(),
        register_config.price_edit.as_str()
    ));
    TerminalSurface::new(ctx.output.clone()).display_product_rows(&view);
    Ok(())
}
