use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Warranty text used for electronic records created without one.
pub const NO_WARRANTY: &str = "No warranty";

/// The closed set of record variants held by the store.
///
/// Electronic records carry a warranty description on top of the shared
/// field set; everything else about them is handled uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Standard,
    Electronic { warranty: String },
}

/// A product record held by the inventory store.
///
/// Identifiers are assigned (or validated) by the store on add; records built
/// with `ProductId::AUTO` request auto-assignment. Price is non-negative by
/// convention and quantity may be zero or negative; neither is validated
/// here — every store operation is total over its input domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a standard record.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            kind: ProductKind::Standard,
        }
    }

    /// Create an electronic record; an absent warranty falls back to the
    /// `NO_WARRANTY` sentinel.
    pub fn electronic(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        warranty: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            kind: ProductKind::Electronic {
                warranty: warranty.unwrap_or_else(|| NO_WARRANTY.to_string()),
            },
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self.kind, ProductKind::Electronic { .. })
    }

    /// Warranty description, if this is an electronic record.
    pub fn warranty(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Electronic { warranty } => Some(warranty),
            ProductKind::Standard => None,
        }
    }

    pub(crate) fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Replace the warranty text. Returns false (and leaves the record
    /// untouched) for standard records.
    pub fn set_warranty(&mut self, warranty: impl Into<String>) -> bool {
        match &mut self.kind {
            ProductKind::Electronic { warranty: current } => {
                *current = warranty.into();
                true
            }
            ProductKind::Standard => false,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Fixed-width table row; electronic records append the warranty column.
    pub fn display_row(&self) -> String {
        let base = format!(
            "{:>4} | {:<30} | {:>6} | {:>10.2} | {:>10.2}",
            self.id,
            self.name,
            self.quantity,
            self.price,
            self.total_value()
        );
        match &self.kind {
            ProductKind::Standard => base,
            ProductKind::Electronic { warranty } => format!("{base} | {warranty:<12}"),
        }
    }

    /// Base CSV row: `id,name,price,quantity`.
    ///
    /// The name is quote-wrapped (with internal quotes doubled) only when it
    /// contains a comma. The warranty of electronic records is never written;
    /// the base encoding is the only persisted form.
    pub fn to_csv_row(&self) -> String {
        let name = if self.name.contains(',') {
            format!("\"{}\"", self.name.replace('"', "\"\""))
        } else {
            self.name.clone()
        };
        format!("{},{},{},{}", self.id, name, self.price, self.quantity)
    }
}
