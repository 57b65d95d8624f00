//! Parsing of interactive register commands.

use till_commerce::catalog::ProductField;
use till_commerce::ProductId;
use till_register::UiEvent;

/// One line typed at the register prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A cashier action forwarded to the register.
    Event(UiEvent),
    /// Redraw the product list and bill.
    Show,
    /// Print the whole page as HTML.
    Html,
    Help,
    Quit,
}

pub const HELP: &str = r#"Commands:
  new <name> <price> <label>   add a product to the catalog (quote names with spaces)
  add <id>                     add one unit of a product to the bill
  remove <id>                  remove a product's line from the bill
  price <id> <value>           edit a product's price
  label <id> <value>           edit a product's weight/unit label
  generate                     show the bill summary
  close                        close the summary and start a new bill
  show                         redraw products and bill
  html                         print the page as HTML
  help                         show this help
  quit                         leave the register"#;

/// Split a line into words, honouring single and double quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse one prompt line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "new" => {
            if args.len() > 3 {
                return Err("new takes <name> <price> <label>; quote names with spaces".to_string());
            }
            let arg = |i: usize| args.get(i).cloned().unwrap_or_default();
            Command::Event(UiEvent::SubmitNewProduct {
                name: arg(0),
                price_text: arg(1),
                weight_label: arg(2),
            })
        }
        "add" => Command::Event(UiEvent::ClickAddToBill(product_id(args)?)),
        "remove" | "rm" => Command::Event(UiEvent::ClickRemoveFromBill(product_id(args)?)),
        "price" | "weight" | "label" => {
            let field: ProductField = verb.parse()?;
            Command::Event(UiEvent::EditProductField {
                product_id: product_id(args)?,
                field,
                raw_value: args[1..].join(" "),
            })
        }
        "generate" | "total" => Command::Event(UiEvent::ClickGenerateBill),
        "close" => Command::Event(UiEvent::ClickCloseSummary),
        "show" | "products" => Command::Show,
        "html" => Command::Html,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };

    Ok(Some(command))
}

fn product_id(args: &[String]) -> Result<ProductId, String> {
    let raw = args.first().ok_or("expected a product id")?;
    raw.parse()
        .map_err(|_| format!("expected a product id, got '{}'", raw))
}
