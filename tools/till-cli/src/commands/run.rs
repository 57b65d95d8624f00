//! Interactive register session.

use std::fs;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context as _, Result};
use till_register::{Register, Surface};
use till_view::html;

use super::RunArgs;
use crate::context::Context;
use crate::input::{parse_line, Command, HELP};
use crate::output::Output;
use crate::terminal::TerminalSurface;

/// Run the register until `quit` or end of input.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config: {}", path.display()));
    }

    let mut register = Register::new(&ctx.config.register_config(), ctx.logger());
    let mut surface = TerminalSurface::new(ctx.output.clone());

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let file = fs::File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    register.start(&mut surface)?;
    if args.script.is_none() {
        ctx.output.info("Type 'help' for commands");
    }
    ctx.output.prompt("till>");

    drive(reader, &mut register, &mut surface, &ctx.output)?;

    register
        .logger()
        .info_builder("register closed")
        .field_u64("bills_issued", register.bills_issued())
        .emit();
    ctx.output
        .success(&format!("Session closed, {} bill(s) issued", register.bills_issued()));

    Ok(())
}

/// Feed every input line to the register until `quit` or end of input.
///
/// A command that fails is reported and the session carries on; only a
/// failure to read input ends it.
fn drive(
    reader: impl BufRead,
    register: &mut Register,
    surface: &mut dyn Surface,
    output: &Output,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = execute(command, register, surface, output) {
                    output.error(&format!("{:#}", e));
                }
            }
            Err(msg) => output.warn(&msg),
        }

        output.prompt("till>");
    }
    Ok(())
}

fn execute(
    command: Command,
    register: &mut Register,
    surface: &mut dyn Surface,
    output: &Output,
) -> Result<()> {
    match command {
        Command::Event(event) => register.handle(event, surface)?,
        Command::Show => redraw(register, surface)?,
        Command::Html => output.raw(&html::page(&register.page()?)),
        Command::Help => {
            if !output.is_json() {
                output.raw(HELP);
            }
        }
        Command::Quit => {}
    }
    Ok(())
}

fn redraw(register: &Register, surface: &mut dyn Surface) -> Result<()> {
    let page = register.page()?;
    surface.display_product_rows(&page.products);
    surface.display_bill_rows(&page.bill);
    if let Some(summary) = &page.summary {
        surface.display_summary(summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use till_commerce::catalog::{Catalog, Product};
    use till_commerce::{Currency, Money, ProductId};
    use till_observability::{SessionId, StructuredLogger};
    use till_register::{RecordedCall, RecordingSurface};

    fn register() -> Register {
        // Product 1 is priced in a foreign currency, so billing it fails
        // inside the register rather than as a cashier notice.
        let catalog = Catalog::with_products(
            Currency::USD,
            vec![
                Product::new(ProductId::new(1), "Rice", Money::new(6000, Currency::INR), "1kg"),
                Product::new(ProductId::new(2), "Tea", Money::new(300, Currency::USD), "250g"),
            ],
        );
        Register::with_catalog(catalog, StructuredLogger::in_memory(SessionId::from_string("run")))
    }

    #[test]
    fn test_failed_command_does_not_end_session() {
        let mut register = register();
        let mut surface = RecordingSurface::new();
        let output = Output::new(false, true);
        let script = Cursor::new("add 1\nadd 2\nshow\nquit\nadd 2\n");

        drive(script, &mut register, &mut surface, &output).unwrap();

        let lines = register.list_bill_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, ProductId::new(2));
        assert_eq!(lines[0].quantity, 1);
        assert!(surface
            .calls()
            .iter()
            .any(|c| matches!(c, RecordedCall::ProductRows(_))));
    }

    #[test]
    fn test_bad_input_is_skipped() {
        let mut register = register();
        let mut surface = RecordingSurface::new();
        let output = Output::new(false, true);
        let script = Cursor::new("refund 2\nadd two\nadd 2\n");

        drive(script, &mut register, &mut surface, &output).unwrap();
        assert_eq!(register.list_bill_lines().len(), 1);
    }
}
