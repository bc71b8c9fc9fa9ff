//! The schema flattening core
//!
//! Converts a validated schema instance into a flat column map: scalar
//! fields pass through unchanged, nested schema fields are replaced by
//! persistable records built through the registry's declared mappings.
//! Conversion goes exactly one structural layer deep per call; a nested
//! schema's own fields travel as its raw dump.

use schema_core::{DumpedField, FieldMap, Schema, Value};

use crate::errors::FlattenError;
use crate::registry::SchemaRegistry;
use crate::trace_log;

/// Flatten one validated schema instance.
///
/// The returned map's keys are exactly the schema's declared field names.
/// The top-level instance itself is never converted; building a record from
/// the returned columns is the caller's decision. The routine is pure: it
/// allocates fresh structures and mutates neither its input nor the
/// registry.
pub fn flatten<S: Schema>(schema: &S, registry: &SchemaRegistry) -> Result<FieldMap, FlattenError> {
    let dumped = schema.dump();
    let mut columns = FieldMap::with_capacity(dumped.len());

    for (name, field) in dumped {
        let value = match field {
            DumpedField::Scalar(value) => value,
            DumpedField::Nested(dump) => {
                trace_log!("converting nested field '{}'", name);
                Value::Record(registry.build_record(dump)?)
            }
            DumpedField::NestedList(dumps) => Value::Array(
                dumps
                    .into_iter()
                    .map(|dump| registry.build_record(dump).map(Value::Record))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        columns.insert(name.to_string(), value);
    }

    Ok(columns)
}
