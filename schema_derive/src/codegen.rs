//! Code generation for the `Schema` derive
//!
//! Generated code refers to `schema_core` by crate-root path; the flathaus
//! facade re-exports the crate so prelude users resolve it without a direct
//! dependency.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::{FieldNesting, ParsedField, SchemaInfo};

pub fn generate_schema_impl(
    name: &Ident,
    schema_info: &SchemaInfo,
    fields: &[ParsedField],
) -> TokenStream {
    let schema_name = &schema_info.name;

    let descriptors = fields.iter().map(|field| {
        let field_name = &field.name;
        match &field.nesting {
            FieldNesting::Scalar => quote! {
                schema_core::FieldDescriptor {
                    name: #field_name,
                    kind: schema_core::FieldKind::Scalar,
                }
            },
            FieldNesting::Nested(ty) => quote! {
                schema_core::FieldDescriptor {
                    name: #field_name,
                    kind: schema_core::FieldKind::Nested {
                        schema: <#ty as schema_core::Schema>::NAME,
                    },
                }
            },
            FieldNesting::NestedList(ty) => quote! {
                schema_core::FieldDescriptor {
                    name: #field_name,
                    kind: schema_core::FieldKind::NestedList {
                        schema: <#ty as schema_core::Schema>::NAME,
                    },
                }
            },
        }
    });

    let dump_entries = fields.iter().map(|field| {
        let field_name = &field.name;
        let ident = &field.ident;
        match &field.nesting {
            FieldNesting::Scalar => quote! {
                (
                    #field_name,
                    schema_core::DumpedField::Scalar(schema_core::Value::from(self.#ident.clone())),
                )
            },
            FieldNesting::Nested(_) => quote! {
                (
                    #field_name,
                    schema_core::DumpedField::Nested(schema_core::Schema::schema_dump(&self.#ident)),
                )
            },
            FieldNesting::NestedList(_) => quote! {
                (
                    #field_name,
                    schema_core::DumpedField::NestedList(
                        self.#ident.iter().map(schema_core::Schema::schema_dump).collect(),
                    ),
                )
            },
        }
    });

    let map_entries = fields.iter().map(|field| {
        let field_name = &field.name;
        let ident = &field.ident;
        match &field.nesting {
            FieldNesting::Scalar => quote! {
                map.insert(
                    #field_name.to_string(),
                    schema_core::Value::from(self.#ident.clone()),
                );
            },
            FieldNesting::Nested(_) => quote! {
                map.insert(
                    #field_name.to_string(),
                    schema_core::Value::Map(schema_core::Schema::to_field_map(&self.#ident)),
                );
            },
            FieldNesting::NestedList(_) => quote! {
                map.insert(
                    #field_name.to_string(),
                    schema_core::Value::Array(
                        self.#ident
                            .iter()
                            .map(|nested| {
                                schema_core::Value::Map(schema_core::Schema::to_field_map(nested))
                            })
                            .collect(),
                    ),
                );
            },
        }
    });

    quote! {
        impl schema_core::Schema for #name {
            const NAME: &'static str = #schema_name;

            fn descriptor() -> &'static schema_core::SchemaDescriptor {
                static FIELDS: &[schema_core::FieldDescriptor] = &[#(#descriptors),*];
                static DESCRIPTOR: schema_core::SchemaDescriptor = schema_core::SchemaDescriptor {
                    name: #schema_name,
                    fields: FIELDS,
                };
                &DESCRIPTOR
            }

            fn dump(&self) -> Vec<(&'static str, schema_core::DumpedField)> {
                vec![#(#dump_entries),*]
            }

            fn to_field_map(&self) -> schema_core::FieldMap {
                let mut map = schema_core::FieldMap::new();
                #(#map_entries)*
                map
            }
        }
    }
}
