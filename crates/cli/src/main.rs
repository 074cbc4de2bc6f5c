use std::io;

use anyhow::Result;

use stockroom_cli::{console::Console, menu};
use stockroom_store::Inventory;

fn main() -> Result<()> {
    stockroom_observability::init();
    tracing::info!("stockroom starting");

    let store = Inventory::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    menu::run(&store, &mut console)?;

    tracing::info!("stockroom exiting");
    Ok(())
}
