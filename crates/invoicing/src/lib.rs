//! Invoicing domain module.
//!
//! Turns an [`InvoiceRequest`] into an [`Invoice`] by pricing and taxing each
//! requested item. Pure, deterministic domain logic (no IO, no HTTP, no
//! storage); tax rules and invoice creation are injected.

pub mod book_keeper;
pub mod factory;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use factory::{DefaultInvoiceFactory, InvoiceFactory};
pub use invoice::{Invoice, InvoiceId, InvoiceLine};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{DefaultTaxPolicy, Tax, TaxPolicy, TaxRates};
