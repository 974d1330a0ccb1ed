//! Product catalog published language.
//!
//! Sales documents keep a frozen snapshot of the product they sell
//! ([`ProductData`]) rather than a live reference into the catalog.

pub mod product;

pub use product::{ProductData, ProductId, ProductType};
