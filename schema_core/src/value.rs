//! Runtime value model
//!
//! This module provides the runtime representation of schema field values
//! and of records produced by schema conversion.

use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::record::TableRecord;

/// Field or column values keyed by name
pub type FieldMap = HashMap<String, Value>;

/// Runtime value of a schema field or record column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Json(serde_json::Value),
    Array(Vec<Value>),
    /// Raw dump of a nested schema instance, not yet converted to a record
    Map(FieldMap),
    /// Converted persistable record, no primary key assigned yet
    Record(TableRecord),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer accessor that widens `Integer` to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(i64::from(*v)),
            Value::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&TableRecord> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Text(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Text(val.to_string())
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Integer(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::BigInt(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Boolean(val)
    }
}

impl From<Uuid> for Value {
    fn from(val: Uuid) -> Self {
        Value::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        Value::Timestamp(val)
    }
}

impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        Value::Json(val)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(val: Vec<T>) -> Self {
        Value::Array(val.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from("alice"), Value::Text("alice".to_string()));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42i64), Value::BigInt(42));
        assert_eq!(Value::from(true), Value::Boolean(true));
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<String> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(
            Value::from(Some("x".to_string())),
            Value::Text("x".to_string())
        );
    }

    #[test]
    fn test_vec_conversion() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string())
            ])
        );
    }

    #[test]
    fn test_integer_widening() {
        assert_eq!(Value::Integer(7).as_i64(), Some(7));
        assert_eq!(Value::BigInt(7).as_i64(), Some(7));
        assert_eq!(Value::Text("7".to_string()).as_i64(), None);
    }
}
