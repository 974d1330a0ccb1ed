use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salesbook_core::{AggregateId, Money};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Tax-relevant product classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Drug,
    Food,
    Standard,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Drug => "drug",
            ProductType::Food => "food",
            ProductType::Standard => "standard",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product snapshot taken when it was put on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub product_id: ProductId,
    pub name: String,
    pub product_type: ProductType,
    /// Catalog price at snapshot time.
    pub price: Money,
    pub snapshot_date: DateTime<Utc>,
}

impl ProductData {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        product_type: ProductType,
        price: Money,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            product_type,
            price,
            snapshot_date,
        }
    }
}
