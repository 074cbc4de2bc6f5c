//! `stockroom-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no I/O, no
//! presentation concerns): the product identifier newtype and the domain
//! error model.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
