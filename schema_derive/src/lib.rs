//! Procedural macro for declaring validated schema types
//!
//! This crate provides the `Schema` derive, which records per-field nesting
//! metadata at compile time so the flattening core can dispatch statically
//! instead of inspecting values at runtime.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parsing;

use codegen::generate_schema_impl;
use parsing::{parse_fields, parse_schema_attributes};

/// Derive macro for the `Schema` trait
///
/// Fields are scalar unless marked otherwise:
///
/// ```rust,ignore
/// use flathaus::prelude::*;
///
/// #[derive(Debug, Clone, Schema)]
/// pub struct ItemCreate {
///     pub title: String,
///     pub description: Option<String>,
/// }
///
/// #[derive(Debug, Clone, Schema)]
/// #[schema(name = "user_create")]
/// pub struct UserCreate {
///     pub username: String,
///     pub password: String,
///     #[field(nested_list)]
///     pub items: Vec<ItemCreate>,
/// }
/// ```
///
/// The schema name defaults to the snake_case struct name; `#[schema(name =
/// "...")]` overrides it. `#[field(nested)]` marks a field holding a single
/// schema instance, `#[field(nested_list)]` a `Vec` of schema instances.
#[proc_macro_derive(Schema, attributes(schema, field))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let schema_info = match parse_schema_attributes(&input.attrs, name) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match parse_fields(&input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let expanded = generate_schema_impl(name, &schema_info, &fields);

    TokenStream::from(expanded)
}
