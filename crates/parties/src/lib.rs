//! Parties published language: the client snapshot other modules refer to.
//!
//! Invoicing and sales only need to know *who* they bill, not how clients
//! are managed; this crate carries that reference and nothing else.

pub mod client;

pub use client::{ClientData, ClientId};
