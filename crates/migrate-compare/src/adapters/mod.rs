//! Catalog adapter implementations.
//!
//! Real dialect adapters (PostgreSQL, Snowflake, Fabric) live with their
//! drivers outside this crate; they implement [`CatalogAdapter`] and register
//! themselves in an [`AdapterRegistry`]. This module ships only the adapter
//! that needs no live database.
//!
//! [`CatalogAdapter`]: crate::core::CatalogAdapter
//! [`AdapterRegistry`]: crate::core::AdapterRegistry

pub mod memory;

pub use memory::{MemoryCatalog, MemoryTable};
