//! Parsing of `#[schema]` and `#[field]` attributes
//!
//! Mirrors the runtime registry's vocabulary: every field is scalar unless
//! explicitly marked nested, and nesting metadata is fixed here, at parse
//! time.

use syn::{
    parse::Parse, parse::ParseStream, Attribute, Data, Error, Fields, GenericArgument, Ident, Meta,
    PathArguments, Result, Token, Type,
};

#[derive(Debug)]
pub struct SchemaInfo {
    pub name: String,
}

/// How one parsed field participates in conversion
pub enum FieldNesting {
    Scalar,
    Nested(Type),
    NestedList(Type),
}

pub struct ParsedField {
    pub ident: Ident,
    pub name: String,
    pub nesting: FieldNesting,
}

/// Markers accepted inside `#[field(...)]`
struct FieldMarkers {
    markers: Vec<Ident>,
}

impl Parse for FieldMarkers {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut markers = Vec::new();

        while !input.is_empty() {
            let marker: Ident = input.parse()?;
            markers.push(marker);

            if input.peek(Token![,]) {
                let _: Token![,] = input.parse()?;
            }
        }

        Ok(FieldMarkers { markers })
    }
}

pub fn parse_schema_attributes(attrs: &[Attribute], struct_ident: &Ident) -> Result<SchemaInfo> {
    let mut name = None;

    for attr in attrs {
        if attr.path().is_ident("schema") {
            if let Meta::List(meta_list) = &attr.meta {
                // Parse nested tokens manually since syn 2.0 changed the API
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        if key != "name" {
                            return Err(Error::new(
                                key.span(),
                                format!("unknown schema attribute key '{}'", key),
                            ));
                        }

                        // Expect '=' then a string literal
                        match tokens.next() {
                            Some(proc_macro2::TokenTree::Punct(punct)) if punct.as_char() == '=' => {}
                            _ => {
                                return Err(Error::new(
                                    key.span(),
                                    "expected `name = \"...\"` in #[schema(...)]",
                                ))
                            }
                        }

                        match tokens.next() {
                            Some(proc_macro2::TokenTree::Literal(lit)) => {
                                name = Some(lit.to_string().trim_matches('"').to_string());
                            }
                            _ => {
                                return Err(Error::new(
                                    key.span(),
                                    "expected `name = \"...\"` in #[schema(...)]",
                                ))
                            }
                        }

                        // Skip comma if present
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next();
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(SchemaInfo {
        name: name.unwrap_or_else(|| to_snake_case(&struct_ident.to_string())),
    })
}

pub fn parse_fields(data: &Data) -> Result<Vec<ParsedField>> {
    let fields = match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    proc_macro2::Span::call_site(),
                    "Schema can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                "Schema can only be derived for structs",
            ))
        }
    };

    let mut parsed = Vec::new();

    for field in fields {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(proc_macro2::Span::call_site(), "expected a named field"))?;
        let name = ident.to_string();

        let mut nesting = FieldNesting::Scalar;

        for attr in &field.attrs {
            if !attr.path().is_ident("field") {
                continue;
            }

            let markers: FieldMarkers = attr.parse_args()?;
            for marker in &markers.markers {
                match marker.to_string().as_str() {
                    "nested" => {
                        nesting = FieldNesting::Nested(field.ty.clone());
                    }
                    "nested_list" => {
                        let inner = vec_inner_type(&field.ty).ok_or_else(|| {
                            Error::new(
                                marker.span(),
                                "#[field(nested_list)] requires a Vec<T> field",
                            )
                        })?;
                        nesting = FieldNesting::NestedList(inner.clone());
                    }
                    other => {
                        return Err(Error::new(
                            marker.span(),
                            format!("unknown field marker '{}'", other),
                        ))
                    }
                }
            }
        }

        parsed.push(ParsedField {
            ident,
            name,
            nesting,
        });
    }

    Ok(parsed)
}

/// Extract `T` from a `Vec<T>` field type
fn vec_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

/// Default schema name: the snake_case struct name
fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
