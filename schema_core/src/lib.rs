//! Schema data model for the flathaus ecosystem
//!
//! This crate provides the runtime value model, the `Schema` trait with its
//! static per-field metadata, and the persistable-record types shared by the
//! derive macro, the flattening core, and the persistence layer.

pub mod record;
pub mod schema;
pub mod validation;
pub mod value;

pub use record::{ColumnSpec, RecordError, TableRecord, TableSpec};
pub use schema::{DumpedField, FieldDescriptor, FieldKind, Schema, SchemaDescriptor, SchemaDump};
pub use validation::{validate_identifier, IdentifierError};
pub use value::{FieldMap, Value};
