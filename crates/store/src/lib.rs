//! `stockroom-store` — the inventory store core.
//!
//! An in-memory, mutex-guarded product collection with a monotonic
//! identifier allocator, in-place ordering, derived queries (summary,
//! price-range filter, partial iteration) and CSV file persistence.

pub mod csv;
pub mod inventory;
pub mod product;

pub use csv::PersistError;
pub use inventory::{Inventory, InventoryOps, InventorySummary, PartialIter};
pub use product::{NO_WARRANTY, Product, ProductKind};
