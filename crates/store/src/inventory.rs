//! The inventory store: a mutex-guarded record collection plus identifier
//! allocator.
//!
//! One coarse lock guards the whole state and every operation is a
//! whole-operation critical section. Snapshots (`list_all`,
//! `filter_by_price_range`) are cloned out under the lock and safe to use
//! after release. The partial iterator is the one deliberate exception: it
//! re-acquires the lock per step and observes live mutations.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use stockroom_core::ProductId;

use crate::csv::{self, PersistError};
use crate::product::Product;

/// Store abstraction: the operation surface the presentation layer codes
/// against. Implemented by [`Inventory`].
pub trait InventoryOps: Send + Sync {
    /// Append a record, assigning or validating its identifier, and return
    /// the identifier it was stored under. Total; never fails.
    fn add(&self, product: Product) -> ProductId;

    /// Remove the first record with the given id. Returns whether a match
    /// was found. The allocator is unaffected; removed ids are never reused.
    fn remove_by_id(&self, id: ProductId) -> bool;

    /// Clone of the first record with the given id, or `None`.
    fn find_by_id(&self, id: ProductId) -> Option<Product>;

    /// Snapshot copy of all records in current store order.
    fn list_all(&self) -> Vec<Product>;

    /// Sort in place by name: ascending, case-insensitive, stable.
    fn sort_by_name(&self);

    /// Sort in place by price, ascending. NaN ordering is unspecified.
    fn sort_by_price(&self);

    /// Write the store as CSV. The lock is held for the whole write.
    fn save_to_file(&self, path: &Path) -> Result<(), PersistError>;

    /// Replace the store contents from a CSV file. Existing records are
    /// discarded before the read, so an I/O failure leaves the store empty.
    /// Malformed rows are skipped; loaded ids raise the allocator floor.
    fn load_from_file(&self, path: &Path) -> Result<(), PersistError>;
}

const INITIAL_NEXT_ID: i64 = 1;

#[derive(Debug)]
struct InventoryState {
    products: Vec<Product>,
    next_id: i64,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: INITIAL_NEXT_ID,
        }
    }
}

/// In-memory inventory store.
#[derive(Debug, Default)]
pub struct Inventory {
    state: Mutex<InventoryState>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator: honor a positive, non-colliding requested id and advance
    /// the floor past it; otherwise assign the floor and increment it. The
    /// floor never moves backwards.
    fn allocate(state: &mut InventoryState, requested: ProductId) -> ProductId {
        let requested = requested.get();
        let collides = state.products.iter().any(|p| p.id().get() == requested);
        if requested <= 0 || collides {
            let assigned = state.next_id;
            state.next_id += 1;
            ProductId::new(assigned)
        } else {
            state.next_id = state.next_id.max(requested + 1);
            ProductId::new(requested)
        }
    }

    /// Empty the collection and reset the allocator floor to its initial
    /// value.
    pub fn clear_all(&self) {
        let mut state = self.state.lock().unwrap();
        state.products.clear();
        state.next_id = INITIAL_NEXT_ID;
    }

    /// O(n) totals over the current contents, recomputed on every call.
    pub fn summarize(&self) -> InventorySummary {
        let state = self.state.lock().unwrap();
        let mut total_quantity = 0;
        let mut total_value = 0.0;
        for p in &state.products {
            total_quantity += p.quantity();
            total_value += p.total_value();
        }
        InventorySummary {
            count: state.products.len(),
            total_quantity,
            total_value,
        }
    }

    /// Records with `min <= price <= max`, in store order, as a snapshot
    /// copy. Bounds are inclusive and unvalidated; an inverted range simply
    /// matches nothing.
    pub fn filter_by_price_range(&self, min: f64, max: f64) -> Vec<Product> {
        let state = self.state.lock().unwrap();
        state
            .products
            .iter()
            .filter(|p| p.price() >= min && p.price() <= max)
            .cloned()
            .collect()
    }

    /// One-pass cursor over the store's current order, starting at the
    /// clamped `max(0, start)` position. See [`PartialIter`].
    pub fn iterator_from(&self, start: i64) -> PartialIter<'_> {
        PartialIter {
            store: self,
            index: start.max(0) as usize,
        }
    }

    /// Replace the quantity of the record with the given id. Returns whether
    /// a match was found.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> bool {
        self.update(id, |p| p.set_quantity(quantity))
    }

    /// Replace the price of the record with the given id.
    pub fn update_price(&self, id: ProductId, price: f64) -> bool {
        self.update(id, |p| p.set_price(price))
    }

    /// Replace the name of the record with the given id.
    pub fn rename(&self, id: ProductId, name: impl Into<String>) -> bool {
        let name = name.into();
        self.update(id, move |p| p.set_name(name))
    }

    /// Replace the warranty of the record with the given id. Returns true
    /// only when the record exists and is electronic.
    pub fn set_warranty(&self, id: ProductId, warranty: impl Into<String>) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.products.iter_mut().find(|p| p.id() == id) {
            Some(p) => p.set_warranty(warranty),
            None => false,
        }
    }

    fn update<F: FnOnce(&mut Product)>(&self, id: ProductId, apply: F) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.products.iter_mut().find(|p| p.id() == id) {
            Some(p) => {
                apply(p);
                true
            }
            None => false,
        }
    }
}

impl InventoryOps for Inventory {
    fn add(&self, mut product: Product) -> ProductId {
        let mut state = self.state.lock().unwrap();
        let assigned = Self::allocate(&mut state, product.id());
        product.set_id(assigned);
        state.products.push(product);
        assigned
    }

    fn remove_by_id(&self, id: ProductId) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.products.iter().position(|p| p.id() == id) {
            Some(pos) => {
                state.products.remove(pos);
                true
            }
            None => false,
        }
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        let state = self.state.lock().unwrap();
        state.products.iter().find(|p| p.id() == id).cloned()
    }

    fn list_all(&self) -> Vec<Product> {
        let state = self.state.lock().unwrap();
        state.products.clone()
    }

    fn sort_by_name(&self) {
        let mut state = self.state.lock().unwrap();
        state
            .products
            .sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
    }

    fn sort_by_price(&self) {
        let mut state = self.state.lock().unwrap();
        state
            .products
            .sort_by(|a, b| a.price().partial_cmp(&b.price()).unwrap_or(Ordering::Equal));
    }

    fn save_to_file(&self, path: &Path) -> Result<(), PersistError> {
        let state = self.state.lock().unwrap();
        fs::write(path, csv::encode(&state.products))?;
        Ok(())
    }

    fn load_from_file(&self, path: &Path) -> Result<(), PersistError> {
        let mut state = self.state.lock().unwrap();
        // Destructive load: clears before reading, never appends.
        state.products.clear();
        let contents = fs::read_to_string(path)?;
        for product in csv::decode(&contents) {
            state.next_id = state.next_id.max(product.id().get() + 1);
            state.products.push(product);
        }
        Ok(())
    }
}

/// Immutable snapshot of store totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventorySummary {
    pub count: usize,
    pub total_quantity: i64,
    pub total_value: f64,
}

impl core::fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Count: {}, TotalQty: {}, TotalValue: {:.2}",
            self.count, self.total_quantity, self.total_value
        )
    }
}

/// One-pass cursor over the store's current order.
///
/// Each `next` takes the lock, fetches by position and clones, so the
/// sequence reflects live store order when consumed incrementally. It is not
/// a frozen snapshot, not restartable, and concurrent mutation during
/// iteration yields inconsistent (but memory-safe) results.
pub struct PartialIter<'a> {
    store: &'a Inventory,
    index: usize,
}

impl Iterator for PartialIter<'_> {
    type Item = Product;

    fn next(&mut self) -> Option<Product> {
        let state = self.store.state.lock().unwrap();
        let item = state.products.get(self.index).cloned();
        if item.is_some() {
            self.index += 1;
        }
        item
    }
}
