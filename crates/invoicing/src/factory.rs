use salesbook_core::{IdGenerator, UuidV7Ids};
use salesbook_parties::ClientData;

use crate::invoice::{Invoice, InvoiceId};

/// Creates empty invoices for a client.
pub trait InvoiceFactory {
    fn create(&self, client: ClientData) -> Invoice;
}

impl<F: InvoiceFactory + ?Sized> InvoiceFactory for &F {
    fn create(&self, client: ClientData) -> Invoice {
        (**self).create(client)
    }
}

/// Factory that draws invoice ids from an injected [`IdGenerator`].
#[derive(Debug, Default)]
pub struct DefaultInvoiceFactory<G = UuidV7Ids> {
    ids: G,
}

impl<G: IdGenerator> DefaultInvoiceFactory<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }
}

impl<G: IdGenerator> InvoiceFactory for DefaultInvoiceFactory<G> {
    fn create(&self, client: ClientData) -> Invoice {
        Invoice::new(InvoiceId::new(self.ids.next_id()), client)
    }
}
