//! Invoice issuance.

use salesbook_core::DomainResult;

use crate::factory::InvoiceFactory;
use crate::invoice::{Invoice, InvoiceLine};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

/// Turns invoice requests into issued invoices.
#[derive(Debug, Clone)]
pub struct BookKeeper<F> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Issue an invoice for `request`.
    ///
    /// Each item is taxed by `tax_policy` exactly once, in request order, and
    /// becomes one invoice line at the same position. The first failing item
    /// aborts issuance and its error is returned unchanged.
    pub fn issuance<P>(&self, request: InvoiceRequest, tax_policy: &P) -> DomainResult<Invoice>
    where
        P: TaxPolicy + ?Sized,
    {
        let (client, items) = request.into_parts();
        let mut invoice = self.factory.create(client);

        tracing::debug!(
            invoice_id = %invoice.id_typed(),
            client_id = %invoice.client().client_id(),
            items = items.len(),
            "issuing invoice"
        );

        for item in items {
            let net = item.total_cost()?;
            let product_type = item.product().product_type;
            let tax = tax_policy.calculate_tax(net, product_type)?;

            tracing::trace!(
                invoice_id = %invoice.id_typed(),
                product_id = %item.product().product_id,
                %net,
                tax = %tax.amount(),
                "taxed invoice line"
            );

            let quantity = item.quantity();
            invoice.add_item(InvoiceLine {
                product: item.into_product(),
                quantity,
                net,
                tax,
            })?;
        }

        tracing::debug!(
            invoice_id = %invoice.id_typed(),
            lines = invoice.items().len(),
            net = %invoice.net(),
            gross = %invoice.gross(),
            "invoice issued"
        );

        Ok(invoice)
    }
}
