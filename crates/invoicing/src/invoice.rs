use serde::{Deserialize, Serialize};

use salesbook_core::{AggregateId, DomainResult, Entity, Money};
use salesbook_parties::ClientData;
use salesbook_products::ProductData;

use crate::tax::Tax;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub AggregateId);

impl InvoiceId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice line derived from a request item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product: ProductData,
    pub quantity: u32,
    /// Line amount before tax (unit price × quantity).
    pub net: Money,
    pub tax: Tax,
}

impl InvoiceLine {
    /// Net plus tax.
    pub fn gross(&self) -> DomainResult<Money> {
        self.net.checked_add(self.tax.amount())
    }
}

/// Invoice issued to a client.
///
/// Created empty by an [`InvoiceFactory`](crate::InvoiceFactory), filled by the
/// [`BookKeeper`](crate::BookKeeper) and read-only afterwards. Totals are kept
/// up to date on every [`add_item`](Invoice::add_item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    client: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    pub fn new(id: InvoiceId, client: ClientData) -> Self {
        Self {
            id,
            client,
            lines: Vec::new(),
            net: Money::ZERO,
            gross: Money::ZERO,
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Sum of line nets. Tax does not enter this total.
    pub fn net(&self) -> Money {
        self.net
    }

    /// Sum of line nets plus their taxes.
    pub fn gross(&self) -> Money {
        self.gross
    }

    /// Append a line and roll it into the totals.
    ///
    /// On overflow the invoice is left untouched.
    pub fn add_item(&mut self, line: InvoiceLine) -> DomainResult<()> {
        let net = self.net.checked_add(line.net)?;
        let gross = self.gross.checked_add(line.gross()?)?;

        self.lines.push(line);
        self.net = net;
        self.gross = gross;
        Ok(())
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
