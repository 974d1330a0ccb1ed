//! Invoice requests: the draft a caller fills before issuance.

use serde::{Deserialize, Serialize};

use salesbook_core::{DomainResult, Money, ValueObject};
use salesbook_parties::ClientData;
use salesbook_products::ProductData;

/// One requested line: product, quantity and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product: ProductData,
    quantity: u32,
    unit_price: Money,
}

impl RequestItem {
    pub fn new(product: ProductData, quantity: u32, unit_price: Money) -> Self {
        Self {
            product,
            quantity,
            unit_price,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Unit price × quantity.
    pub fn total_cost(&self) -> DomainResult<Money> {
        self.unit_price.checked_mul(self.quantity)
    }

    pub(crate) fn into_product(self) -> ProductData {
        self.product
    }
}

impl ValueObject for RequestItem {}

/// Ordered, append-only collection of items to invoice for one client.
///
/// Insertion order is kept and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_parts(self) -> (ClientData, Vec<RequestItem>) {
        (self.client, self.items)
    }
}
