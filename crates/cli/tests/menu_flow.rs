//! Black-box menu sessions: scripted input against a real store, asserting
//! on the rendered output and observable store state.

use std::io::Cursor;
use std::path::PathBuf;

use stockroom_cli::{console::Console, menu};
use stockroom_core::ProductId;
use stockroom_store::{Inventory, InventoryOps};

fn run_session(store: &Inventory, script: &str) -> String {
    let mut out = Vec::new();
    {
        let mut console = Console::new(Cursor::new(script.to_owned()), &mut out);
        menu::run(store, &mut console).expect("menu session failed");
    }
    String::from_utf8(out).expect("non-utf8 menu output")
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stockroom-cli-{}-{tag}.csv", std::process::id()))
}

#[test]
fn add_then_show_lists_the_product() {
    let store = Inventory::new();
    let output = run_session(&store, "1\nWidget\n9.99\n3\nn\n3\n0\n");

    assert!(output.contains("Product added."));
    assert!(output.contains("Widget"));
    assert!(output.contains("Exiting application. Goodbye."));

    let records = store.list_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), ProductId::new(1));
}

#[test]
fn add_electronic_prompts_for_warranty() {
    let store = Inventory::new();
    let output = run_session(&store, "1\nRouter\n99.0\n1\ny\n2 years\n3\n0\n");

    assert!(output.contains("Warranty"));
    assert!(output.contains("2 years"));
    assert_eq!(store.list_all()[0].warranty(), Some("2 years"));
}

#[test]
fn remove_missing_product_reports_not_found() {
    let store = Inventory::new();
    let output = run_session(&store, "2\n42\n0\n");
    assert!(output.contains("Product not found."));
}

#[test]
fn show_all_on_empty_store() {
    let store = Inventory::new();
    let output = run_session(&store, "3\n0\n");
    assert!(output.contains("No products available."));
}

#[test]
fn invalid_choice_and_invalid_number_reprompt() {
    let store = Inventory::new();
    let output = run_session(&store, "99\nnot-a-number\n0\n");
    assert!(output.contains("Invalid option. Try again."));
    assert!(output.contains("Please enter a valid integer."));
}

#[test]
fn update_quantity_round_trip() {
    let store = Inventory::new();
    store.add(stockroom_store::Product::new(
        ProductId::AUTO,
        "Bolt",
        2.5,
        4,
    ));

    let output = run_session(&store, "6\n1\n9\n0\n");
    assert!(output.contains("Quantity updated."));
    assert_eq!(store.find_by_id(ProductId::new(1)).unwrap().quantity(), 9);
}

#[test]
fn clear_all_requires_literal_yes() {
    let store = Inventory::new();
    store.add(stockroom_store::Product::new(
        ProductId::AUTO,
        "Bolt",
        2.5,
        4,
    ));

    let cancelled = run_session(&store, "12\nno\n0\n");
    assert!(cancelled.contains("Clear cancelled."));
    assert_eq!(store.list_all().len(), 1);

    let cleared = run_session(&store, "12\nYES\n0\n");
    assert!(cleared.contains("All products cleared."));
    assert!(store.list_all().is_empty());
}

#[test]
fn export_then_import_round_trips_through_a_file() {
    let path = temp_path("roundtrip");
    let path_str = path.display().to_string();

    let store = Inventory::new();
    store.add(stockroom_store::Product::new(
        ProductId::AUTO,
        "Bolt",
        2.5,
        4,
    ));

    let script = format!("7\n{path_str}\n12\nYES\n8\n{path_str}\n3\n0\n");
    let output = run_session(&store, &script);

    assert!(output.contains(&format!("Exported to {path_str}")));
    assert!(output.contains(&format!("Imported from {path_str}")));
    assert!(output.contains("Bolt"));
    assert_eq!(store.list_all().len(), 1);

    let _ = std::fs::remove_file(path);
}

#[test]
fn import_failure_is_a_message_not_a_crash() {
    let store = Inventory::new();
    let output = run_session(&store, "8\n/nonexistent/stockroom.csv\n0\n");
    assert!(output.contains("Error while loading file:"));
}

#[test]
fn summary_without_saving_report() {
    let store = Inventory::new();
    store.add(stockroom_store::Product::new(
        ProductId::AUTO,
        "Bolt",
        2.0,
        3,
    ));

    let output = run_session(&store, "9\nn\n0\n");
    assert!(output.contains("-- Inventory Summary --"));
    assert!(output.contains("Count: 1, TotalQty: 3, TotalValue: 6.00"));
    assert!(output.contains("INVENTORY REPORT"));
}

#[test]
fn filter_by_price_renders_matches_in_order() {
    let store = Inventory::new();
    for price in [5.0, 10.0, 15.0, 20.0, 25.0] {
        store.add(stockroom_store::Product::new(
            ProductId::AUTO,
            format!("p{price}"),
            price,
            1,
        ));
    }

    let output = run_session(&store, "10\n10\n20\n0\n");
    assert!(output.contains("Products in range:"));
    assert!(output.contains("p10"));
    assert!(output.contains("p15"));
    assert!(output.contains("p20"));
    assert!(!output.contains("p25"));
}

#[test]
fn iterator_demo_caps_at_ten_rows() {
    let store = Inventory::new();
    for i in 0..15 {
        store.add(stockroom_store::Product::new(
            ProductId::AUTO,
            format!("item-{i:02}"),
            1.0,
            1,
        ));
    }

    let output = run_session(&store, "11\n2\n0\n");
    assert!(output.contains("[2] "));
    assert!(output.contains("item-02"));
    assert!(output.contains("item-11"));
    assert!(!output.contains("item-12"));
    assert!(output.contains("... showing first 10 items from start"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let store = Inventory::new();
    let output = run_session(&store, "");
    assert!(output.contains("STOCKROOM PRODUCT INVENTORY"));
}
