//! Core abstractions shared by the comparison engine and catalog adapters.
//!
//! - [`schema`]: column metadata and bounded sample shapes
//! - [`value`]: nullable cell value representation
//! - [`traits`]: the [`CatalogAdapter`] boundary
//! - [`registry`]: dialect tags and explicit adapter registration
//!
//! The comparison core consumes only these database-agnostic shapes; anything
//! dialect-specific (connections, query text, identifier casing) lives behind
//! the [`CatalogAdapter`] trait in adapter implementations.

pub mod registry;
pub mod schema;
pub mod traits;
pub mod value;

// Re-export commonly used types for convenience
pub use registry::{AdapterRegistry, DialectKind};
pub use schema::{ColumnDescriptor, SampleTable};
pub use traits::CatalogAdapter;
pub use value::ScalarValue;
