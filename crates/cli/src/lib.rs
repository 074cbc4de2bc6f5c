//! `stockroom-cli` — interactive presentation layer over the inventory
//! store.
//!
//! Everything in here is glue: it collects user input, calls the store's
//! public operations and renders results. State is passed explicitly into
//! [`menu::run`]; there are no process-wide singletons.

pub mod console;
pub mod menu;
pub mod report;
