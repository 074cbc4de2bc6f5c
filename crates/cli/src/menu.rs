//! Interactive menu loop over the inventory store.
//!
//! Thin glue: every branch calls one or two store operations and renders the
//! result. Store failures surface as printed messages, never panics; end of
//! input winds the loop down.

use std::io::{self, BufRead, Write};
use std::path::Path;

use stockroom_core::ProductId;
use stockroom_store::{Inventory, InventoryOps, Product};

use crate::console::Console;
use crate::report;

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        print_header(console)?;
        print_menu(console)?;
        let Some(choice) = console.prompt_i64("Enter choice: ")? else {
            break;
        };
        match choice {
            1 => add_product(store, console)?,
            2 => remove_product(store, console)?,
            3 => show_all(store, console)?,
            4 => {
                store.sort_by_name();
                console.say("Sorted by name.")?;
            }
            5 => {
                store.sort_by_price();
                console.say("Sorted by price.")?;
            }
            6 => update_quantity(store, console)?,
            7 => export_csv(store, console)?,
            8 => import_csv(store, console)?,
            9 => summary_and_report(store, console)?,
            10 => filter_by_price(store, console)?,
            11 => iterator_demo(store, console)?,
            12 => clear_all(store, console)?,
            0 => {
                console.say("Exiting application. Goodbye.")?;
                break;
            }
            _ => console.say("Invalid option. Try again.")?,
        }
        console.say("")?;
    }
    Ok(())
}

fn print_header<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("========================================")?;
    console.say("   STOCKROOM PRODUCT INVENTORY")?;
    console.say("========================================")
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("1.  Add product")?;
    console.say("2.  Remove product by ID")?;
    console.say("3.  Show all products")?;
    console.say("4.  Sort by name")?;
    console.say("5.  Sort by price")?;
    console.say("6.  Update product quantity")?;
    console.say("7.  Export inventory to CSV")?;
    console.say("8.  Import inventory from CSV")?;
    console.say("9.  Summary & report")?;
    console.say("10. Filter by price range")?;
    console.say("11. Iterator demo (partial)")?;
    console.say("12. Clear all products")?;
    console.say("0.  Exit")
}

fn add_product<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Add Product --")?;
    let Some(name) = console.prompt_line("Name: ")? else {
        return Ok(());
    };
    let Some(price) = console.prompt_f64("Price: ")? else {
        return Ok(());
    };
    let Some(quantity) = console.prompt_i64("Quantity: ")? else {
        return Ok(());
    };
    let Some(special) = console.prompt_line("Is this an electronic item? (y/n): ")? else {
        return Ok(());
    };

    if special.eq_ignore_ascii_case("y") {
        let Some(warranty) = console.prompt_line("Warranty (e.g. 1 year): ")? else {
            return Ok(());
        };
        store.add(Product::electronic(
            ProductId::AUTO,
            name,
            price,
            quantity,
            Some(warranty),
        ));
    } else {
        store.add(Product::new(ProductId::AUTO, name, price, quantity));
    }
    console.say("Product added.")
}

fn remove_product<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Remove Product --")?;
    let Some(id) = console.prompt_i64("Enter product ID to remove: ")? else {
        return Ok(());
    };
    if store.remove_by_id(ProductId::new(id)) {
        console.say("Product removed.")
    } else {
        console.say("Product not found.")
    }
}

fn show_all<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let records = store.list_all();
    if records.is_empty() {
        return console.say("No products available.");
    }

    let any_electronic = records.iter().any(Product::is_electronic);
    if any_electronic {
        console.say(&format!(
            "{:>4} | {:<30} | {:>6} | {:>10} | {:>10} | {:<12}",
            "ID", "Name", "Qty", "Price", "Value", "Warranty"
        ))?;
        console.say(&"-".repeat(95))?;
    } else {
        console.say(&format!(
            "{:>4} | {:<30} | {:>6} | {:>10} | {:>10}",
            "ID", "Name", "Qty", "Price", "Value"
        ))?;
        console.say(&"-".repeat(74))?;
    }
    for p in &records {
        console.say(&p.display_row())?;
    }
    Ok(())
}

fn update_quantity<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Update Quantity --")?;
    let Some(id) = console.prompt_i64("Enter product ID: ")? else {
        return Ok(());
    };
    let id = ProductId::new(id);
    if store.find_by_id(id).is_none() {
        return console.say("Product not found.");
    }
    let Some(quantity) = console.prompt_i64("Enter new quantity: ")? else {
        return Ok(());
    };
    store.update_quantity(id, quantity);
    console.say("Quantity updated.")
}

fn export_csv<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Export Inventory to CSV --")?;
    let Some(path) = console.prompt_line("Enter file path (e.g. inventory.csv): ")? else {
        return Ok(());
    };
    match store.save_to_file(Path::new(&path)) {
        Ok(()) => console.say(&format!("Exported to {path}")),
        Err(err) => console.say(&format!("Error while saving file: {err}")),
    }
}

fn import_csv<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Import Inventory from CSV --")?;
    let Some(path) = console.prompt_line("Enter file path (e.g. inventory.csv): ")? else {
        return Ok(());
    };
    match store.load_from_file(Path::new(&path)) {
        Ok(()) => console.say(&format!("Imported from {path}")),
        Err(err) => console.say(&format!("Error while loading file: {err}")),
    }
}

fn summary_and_report<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let summary = store.summarize();
    console.say("-- Inventory Summary --")?;
    console.say(&summary.to_string())?;

    let rendered = report::generate(store);
    console.say("")?;
    console.say(&rendered)?;

    let Some(save) = console.prompt_line("Save report to file? (y/n): ")? else {
        return Ok(());
    };
    if save.eq_ignore_ascii_case("y") {
        let Some(path) = console.prompt_line("Report file path (e.g. report.txt): ")? else {
            return Ok(());
        };
        match report::save(Path::new(&path), &rendered) {
            Ok(()) => console.say(&format!("Report saved to {path}"))?,
            Err(err) => console.say(&format!("Failed to save report: {err}"))?,
        }
    }
    Ok(())
}

fn filter_by_price<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Filter by Price Range --")?;
    let Some(min) = console.prompt_f64("Min price: ")? else {
        return Ok(());
    };
    let Some(max) = console.prompt_f64("Max price: ")? else {
        return Ok(());
    };
    let filtered = store.filter_by_price_range(min, max);
    if filtered.is_empty() {
        return console.say("No products in given price range.");
    }
    console.say("Products in range:")?;
    for p in &filtered {
        console.say(&p.display_row())?;
    }
    Ok(())
}

const ITERATOR_DEMO_LIMIT: usize = 10;

fn iterator_demo<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("-- Iterator Demo (Partial from index) --")?;
    let Some(start) = console.prompt_i64("Start index (0-based): ")? else {
        return Ok(());
    };

    let mut count = 0;
    for product in store.iterator_from(start) {
        console.say(&format!("[{}] {}", start + count as i64, product.display_row()))?;
        count += 1;
        if count >= ITERATOR_DEMO_LIMIT {
            console.say("... showing first 10 items from start")?;
            break;
        }
    }
    Ok(())
}

fn clear_all<R: BufRead, W: Write>(
    store: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(answer) =
        console.prompt_line("Are you sure you want to clear all products? (type YES to confirm): ")?
    else {
        return Ok(());
    };
    if answer == "YES" {
        store.clear_all();
        console.say("All products cleared.")
    } else {
        console.say("Clear cancelled.")
    }
}
