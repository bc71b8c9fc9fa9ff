//! Schema registration and declared record mappings
//!
//! The registry is the explicit mapping table the conversion core dispatches
//! through: every schema the service accepts is registered at startup,
//! nested schema types are mapped to the table whose records they produce,
//! and `validate()` fails fast on any gap before the first request is
//! served.

use std::collections::HashMap;

use schema_core::{
    validate_identifier, Schema, SchemaDescriptor, SchemaDump, TableRecord, TableSpec,
};

use crate::debug_log;
use crate::errors::{FlattenError, RegistryError};

#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, &'static SchemaDescriptor>,
    records: HashMap<&'static str, &'static TableSpec>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
            records: HashMap::new(),
        }
    }

    /// Register a schema type by its static descriptor
    pub fn register<S: Schema>(&mut self) -> Result<(), RegistryError> {
        let descriptor = S::descriptor();
        if self.schemas.contains_key(descriptor.name) {
            return Err(RegistryError::SchemaAlreadyRegistered(descriptor.name));
        }

        self.schemas.insert(descriptor.name, descriptor);
        debug_log!("registered schema '{}'", descriptor.name);
        Ok(())
    }

    /// Declare the record mapping for a registered schema type
    pub fn map_record<S: Schema>(&mut self, table: &'static TableSpec) -> Result<(), RegistryError> {
        if !self.schemas.contains_key(S::NAME) {
            return Err(RegistryError::UnregisteredSchema(S::NAME));
        }
        if self.records.contains_key(S::NAME) {
            return Err(RegistryError::RecordAlreadyMapped(S::NAME));
        }

        validate_identifier(table.name)?;
        for column in table.columns {
            validate_identifier(column.name)?;
        }

        self.records.insert(S::NAME, table);
        debug_log!("mapped schema '{}' to table '{}'", S::NAME, table.name);
        Ok(())
    }

    /// Fail fast on configuration gaps.
    ///
    /// Every nested field must name a registered schema carrying a record
    /// mapping, and every scalar field of a mapped schema must match a
    /// column of its mapped table.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for descriptor in self.schemas.values() {
            for field in descriptor.fields {
                let Some(nested) = field.kind.nested_schema() else {
                    continue;
                };

                let nested_descriptor = self
                    .schemas
                    .get(nested)
                    .ok_or(RegistryError::UnregisteredSchema(nested))?;

                let table =
                    self.records
                        .get(nested)
                        .ok_or(RegistryError::MissingRecordMapping {
                            schema: descriptor.name,
                            field: field.name,
                            nested,
                        })?;

                for scalar in nested_descriptor.scalar_fields() {
                    if !table.has_column(scalar.name) {
                        return Err(RegistryError::UnknownColumn {
                            schema: nested,
                            field: scalar.name,
                            table: table.name,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Look up the declared record mapping for a schema name
    pub fn record_for(&self, schema: &str) -> Option<&'static TableSpec> {
        self.records.get(schema).copied()
    }

    /// Registered schema descriptor by name
    pub fn descriptor_for(&self, schema: &str) -> Option<&'static SchemaDescriptor> {
        self.schemas.get(schema).copied()
    }

    /// Construct the persistable record for one dumped nested schema
    pub fn build_record(&self, dump: SchemaDump) -> Result<TableRecord, FlattenError> {
        let table = self
            .record_for(dump.schema)
            .ok_or(FlattenError::MissingRecordMapping(dump.schema))?;

        TableRecord::from_fields(table, dump.fields).map_err(Into::into)
    }
}
