//! Schema trait and static field metadata
//!
//! Whether a field holds nested schema content is declared once, at
//! compile time, through the field descriptors generated by
//! `#[derive(Schema)]`. The flattening core dispatches on this metadata;
//! no value is ever inspected at runtime to decide whether it is a schema.

use crate::value::{FieldMap, Value};

/// How a declared field participates in record conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain value, copied through unchanged
    Scalar,
    /// A single nested schema instance
    Nested { schema: &'static str },
    /// An ordered sequence of nested schema instances
    NestedList { schema: &'static str },
}

impl FieldKind {
    /// The nested schema name, if this field holds nested content
    pub fn nested_schema(&self) -> Option<&'static str> {
        match self {
            FieldKind::Scalar => None,
            FieldKind::Nested { schema } | FieldKind::NestedList { schema } => Some(schema),
        }
    }
}

/// Static descriptor for one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Static descriptor for a schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl SchemaDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields holding nested schema content
    pub fn nested_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| f.kind.nested_schema().is_some())
    }

    /// Fields copied through unchanged by conversion
    pub fn scalar_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Scalar))
    }
}

/// Shallow dump of a nested schema instance: its registered name plus the
/// raw field map, one conversion layer deep.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDump {
    pub schema: &'static str,
    pub fields: FieldMap,
}

/// One dumped field, shaped by its declared kind
#[derive(Debug, Clone, PartialEq)]
pub enum DumpedField {
    Scalar(Value),
    Nested(SchemaDump),
    NestedList(Vec<SchemaDump>),
}

/// A validated input object with statically declared field metadata
///
/// Implemented via `#[derive(Schema)]`; manual implementations must keep
/// `descriptor()` consistent with `dump()`.
pub trait Schema {
    /// Registered schema name
    const NAME: &'static str;

    /// Static field metadata for this schema type
    fn descriptor() -> &'static SchemaDescriptor;

    /// Field values in declaration order, shaped by declared kind
    fn dump(&self) -> Vec<(&'static str, DumpedField)>;

    /// All fields as plain values; nested schemas become `Value::Map`
    fn to_field_map(&self) -> FieldMap;

    /// Shallow dump used when this schema appears nested inside another
    fn schema_dump(&self) -> SchemaDump {
        SchemaDump {
            schema: Self::NAME,
            fields: self.to_field_map(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor {
            name: "username",
            kind: FieldKind::Scalar,
        },
        FieldDescriptor {
            name: "profile",
            kind: FieldKind::Nested { schema: "profile" },
        },
        FieldDescriptor {
            name: "items",
            kind: FieldKind::NestedList {
                schema: "item_create",
            },
        },
    ];

    static DESCRIPTOR: SchemaDescriptor = SchemaDescriptor {
        name: "user_create",
        fields: &FIELDS,
    };

    #[test]
    fn test_field_lookup() {
        assert!(DESCRIPTOR.field("username").is_some());
        assert!(DESCRIPTOR.field("missing").is_none());
    }

    #[test]
    fn test_nested_field_partition() {
        let nested: Vec<_> = DESCRIPTOR.nested_fields().map(|f| f.name).collect();
        assert_eq!(nested, vec!["profile", "items"]);

        let scalar: Vec<_> = DESCRIPTOR.scalar_fields().map(|f| f.name).collect();
        assert_eq!(scalar, vec!["username"]);
    }

    #[test]
    fn test_nested_schema_name() {
        assert_eq!(FieldKind::Scalar.nested_schema(), None);
        assert_eq!(
            FieldKind::NestedList {
                schema: "item_create"
            }
            .nested_schema(),
            Some("item_create")
        );
    }
}
