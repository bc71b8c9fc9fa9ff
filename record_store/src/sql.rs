//! SQL generation from table specs and records
//!
//! Record column maps are unordered; every statement generated here sorts
//! the record's columns by name so the SQL text is deterministic.

use schema_core::{TableRecord, TableSpec, Value};

use crate::errors::StoreError;

/// The record's set columns plus any extra columns, in binding order
pub fn insert_columns<'a>(
    record: &'a TableRecord,
    extras: &'a [(&'static str, Value)],
) -> Vec<(&'a str, &'a Value)> {
    let mut columns: Vec<(&str, &Value)> = record
        .columns()
        .iter()
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    columns.sort_by_key(|(name, _)| *name);
    columns.extend(extras.iter().map(|(name, value)| (*name, value)));
    columns
}

/// INSERT statement returning the assigned primary key
pub fn insert_sql(
    spec: &TableSpec,
    columns: &[(&str, &Value)],
) -> Result<String, StoreError> {
    let primary_key = spec
        .primary_key()
        .ok_or(StoreError::MissingPrimaryKey { table: spec.name })?;

    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        spec.name,
        names.join(", "),
        placeholders.join(", "),
        primary_key.name
    ))
}

/// SELECT of all declared columns by primary key
pub fn select_by_id_sql(spec: &TableSpec) -> Result<String, StoreError> {
    let primary_key = spec
        .primary_key()
        .ok_or(StoreError::MissingPrimaryKey { table: spec.name })?;

    Ok(format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(spec),
        spec.name,
        primary_key.name
    ))
}

/// SELECT of all declared columns filtered by one column, ordered by
/// primary key for stable results
pub fn select_by_column_sql(spec: &TableSpec, column: &str) -> Result<String, StoreError> {
    let primary_key = spec
        .primary_key()
        .ok_or(StoreError::MissingPrimaryKey { table: spec.name })?;

    Ok(format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        column_list(spec),
        spec.name,
        column,
        primary_key.name
    ))
}

fn column_list(spec: &TableSpec) -> String {
    spec.columns
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_core::{ColumnSpec, FieldMap};

    static USERS: TableSpec = TableSpec::new(
        "users",
        &[
            ColumnSpec::new("id", "BIGSERIAL").primary_key(),
            ColumnSpec::new("username", "TEXT").unique().indexed(),
            ColumnSpec::new("password", "TEXT"),
            ColumnSpec::new("is_active", "BOOLEAN").default_sql("TRUE"),
        ],
    );

    fn sample_record() -> TableRecord {
        let mut fields = FieldMap::new();
        fields.insert("username".to_string(), Value::from("alice"));
        fields.insert("password".to_string(), Value::from("x"));
        TableRecord::from_fields(&USERS, fields).unwrap()
    }

    #[test]
    fn test_insert_sql_is_deterministic() {
        let record = sample_record();
        let columns = insert_columns(&record, &[]);
        let sql = insert_sql(&USERS, &columns).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (password, username) VALUES ($1, $2) RETURNING id"
        );
    }

    #[test]
    fn test_insert_sql_with_extras() {
        let record = sample_record();
        let extras = [("is_active", Value::from(true))];
        let columns = insert_columns(&record, &extras);
        let sql = insert_sql(&USERS, &columns).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (password, username, is_active) VALUES ($1, $2, $3) RETURNING id"
        );
    }

    #[test]
    fn test_select_by_id_sql() {
        assert_eq!(
            select_by_id_sql(&USERS).unwrap(),
            "SELECT id, username, password, is_active FROM users WHERE id = $1"
        );
    }

    #[test]
    fn test_select_by_column_sql() {
        assert_eq!(
            select_by_column_sql(&USERS, "username").unwrap(),
            "SELECT id, username, password, is_active FROM users WHERE username = $1 ORDER BY id"
        );
    }

    #[test]
    fn test_missing_primary_key() {
        static NO_PK: TableSpec =
            TableSpec::new("audit_log", &[ColumnSpec::new("entry", "TEXT")]);
        assert!(matches!(
            select_by_id_sql(&NO_PK),
            Err(StoreError::MissingPrimaryKey { table: "audit_log" })
        ));
    }
}
