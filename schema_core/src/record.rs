//! Persistable record model
//!
//! Static table metadata plus the in-memory record type produced by schema
//! conversion. A `TableRecord` carries no primary key; identity is assigned
//! by the persistence layer at insert time.

use serde::Serialize;
use thiserror::Error;

use crate::value::{FieldMap, Value};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("unexpected column '{column}' for table '{table}'")]
    UnexpectedColumn {
        table: &'static str,
        column: String,
    },
}

/// Static column metadata used for DDL generation and row decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub primary_key: bool,
    pub nullable: bool,
    pub unique: bool,
    pub indexed: bool,
    pub references: Option<(&'static str, &'static str)>,
    pub default_sql: Option<&'static str>,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            primary_key: false,
            nullable: false,
            unique: false,
            indexed: false,
            references: None,
            default_sql: None,
        }
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }

    pub const fn default_sql(mut self, sql: &'static str) -> Self {
        self.default_sql = Some(sql);
        self
    }

    /// Column definition fragment for CREATE TABLE
    fn definition_sql(&self) -> String {
        let mut parts = vec![self.name.to_string(), self.sql_type.to_string()];
        if self.primary_key {
            parts.push("PRIMARY KEY".to_string());
        } else if !self.nullable {
            parts.push("NOT NULL".to_string());
        }
        if self.unique {
            parts.push("UNIQUE".to_string());
        }
        if let Some(default) = self.default_sql {
            parts.push(format!("DEFAULT {}", default));
        }
        if let Some((table, column)) = self.references {
            parts.push(format!("REFERENCES {}({})", table, column));
        }
        parts.join(" ")
    }
}

/// Static metadata for one database table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    pub const fn new(name: &'static str, columns: &'static [ColumnSpec]) -> Self {
        Self { name, columns }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn primary_key(&self) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Generate CREATE TABLE IF NOT EXISTS statement
    pub fn create_table_sql(&self) -> String {
        let definitions: Vec<String> = self.columns.iter().map(|c| c.definition_sql()).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            definitions.join(", ")
        )
    }

    /// Generate CREATE INDEX IF NOT EXISTS statements for indexed columns
    pub fn create_indexes_sql(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.indexed)
            .map(|c| {
                format!(
                    "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {} ({})",
                    self.name, c.name, self.name, c.name
                )
            })
            .collect()
    }
}

/// A not-yet-persisted record destined for a declared table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRecord {
    spec: &'static TableSpec,
    columns: FieldMap,
}

impl TableRecord {
    /// Construct a record from a schema's dumped fields.
    ///
    /// Every field must name a declared column; columns the dump does not
    /// cover (primary key, foreign keys assigned later) stay unset.
    pub fn from_fields(spec: &'static TableSpec, fields: FieldMap) -> Result<Self, RecordError> {
        for key in fields.keys() {
            if !spec.has_column(key) {
                return Err(RecordError::UnexpectedColumn {
                    table: spec.name,
                    column: key.clone(),
                });
            }
        }
        Ok(Self {
            spec,
            columns: fields,
        })
    }

    pub fn spec(&self) -> &'static TableSpec {
        self.spec
    }

    pub fn table(&self) -> &'static str {
        self.spec.name
    }

    pub fn columns(&self) -> &FieldMap {
        &self.columns
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ITEMS: TableSpec = TableSpec::new(
        "items",
        &[
            ColumnSpec::new("id", "BIGSERIAL").primary_key(),
            ColumnSpec::new("title", "TEXT").indexed(),
            ColumnSpec::new("description", "TEXT").nullable().indexed(),
            ColumnSpec::new("owner_id", "BIGINT")
                .nullable()
                .references("users", "id"),
        ],
    );

    #[test]
    fn test_create_table_sql() {
        assert_eq!(
            ITEMS.create_table_sql(),
            "CREATE TABLE IF NOT EXISTS items (id BIGSERIAL PRIMARY KEY, \
             title TEXT NOT NULL, description TEXT, \
             owner_id BIGINT REFERENCES users(id))"
        );
    }

    #[test]
    fn test_create_indexes_sql() {
        assert_eq!(
            ITEMS.create_indexes_sql(),
            vec![
                "CREATE INDEX IF NOT EXISTS idx_items_title ON items (title)",
                "CREATE INDEX IF NOT EXISTS idx_items_description ON items (description)",
            ]
        );
    }

    #[test]
    fn test_default_sql() {
        let column = ColumnSpec::new("is_active", "BOOLEAN").default_sql("TRUE");
        assert_eq!(
            column.definition_sql(),
            "is_active BOOLEAN NOT NULL DEFAULT TRUE"
        );
    }

    #[test]
    fn test_from_fields_accepts_declared_columns() {
        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), Value::from("t1"));
        fields.insert("description".to_string(), Value::Null);

        let record = TableRecord::from_fields(&ITEMS, fields).unwrap();
        assert_eq!(record.table(), "items");
        assert_eq!(record.get("title"), Some(&Value::Text("t1".to_string())));
        assert_eq!(record.get("id"), None);
    }

    #[test]
    fn test_from_fields_rejects_unknown_column() {
        let mut fields = FieldMap::new();
        fields.insert("color".to_string(), Value::from("red"));

        let err = TableRecord::from_fields(&ITEMS, fields).unwrap_err();
        assert_eq!(
            err,
            RecordError::UnexpectedColumn {
                table: "items",
                column: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_primary_key_lookup() {
        assert_eq!(ITEMS.primary_key().map(|c| c.name), Some("id"));
    }
}
