//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product record.
///
/// Sequential positive integer assigned by the store's allocator. A
/// non-positive value on an incoming record is not an identity; it asks the
/// allocator to assign one (`ProductId::AUTO` is the conventional spelling).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Sentinel requesting auto-assignment from the allocator on add.
    pub const AUTO: ProductId = ProductId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Whether this is a concrete assigned identifier (positive).
    pub fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_decimal_string() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!(id.is_assigned());
    }

    #[test]
    fn rejects_non_numeric_string() {
        let err = "abc".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ProductId:")),
        }
    }

    #[test]
    fn auto_sentinel_is_not_assigned() {
        assert!(!ProductId::AUTO.is_assigned());
        assert_eq!(ProductId::AUTO.get(), 0);
    }

    #[test]
    fn display_preserves_width_formatting() {
        assert_eq!(format!("{:>4}", ProductId::new(7)), "   7");
    }
}
