//! Inventory report rendering and file output.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;

use stockroom_store::{Inventory, InventoryOps};

/// Currency rendering used by reports.
pub fn format_currency(amount: f64) -> String {
    format!("\u{20b9}{amount:.2}")
}

/// Build the plain-text inventory report.
pub fn generate(store: &Inventory) -> String {
    let records = store.list_all();
    let summary = store.summarize();

    let mut out = String::new();
    out.push_str("INVENTORY REPORT\n");
    out.push_str("================\n");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "Products: {}", summary.count);
    let _ = writeln!(out, "Total quantity: {}", summary.total_quantity);
    let _ = writeln!(
        out,
        "Total inventory value: {}",
        format_currency(summary.total_value)
    );
    out.push_str("\nProducts detail:\n");
    for p in &records {
        let _ = writeln!(
            out,
            "ID:{} Name:{} Qty:{} Price:{:.2} Value:{:.2}",
            p.id(),
            p.name(),
            p.quantity(),
            p.price(),
            p.total_value()
        );
    }
    out
}

/// Write a report to the given path.
pub fn save(path: &Path, report: &str) -> io::Result<()> {
    fs::write(path, report)
}
