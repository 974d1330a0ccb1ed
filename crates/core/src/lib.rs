//! `salesbook-core` — shared kernel for the sales/invoicing domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, IdGenerator, SequentialIds, UuidV7Ids};
pub use money::Money;
pub use value_object::ValueObject;
