//! Mesh domain
//!
//! The validated [`Mesh`](entities::Mesh) value object and the
//! [`MockCatalog`](catalog::MockCatalog) of fallback shapes.

pub mod catalog;
pub mod entities;

pub use catalog::{CatalogEntry, MockCatalog};
pub use entities::Mesh;
