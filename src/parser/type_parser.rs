use crate::models::{ParseResult, StructField, ThriftEnum, ThriftStruct};
use anyhow::Result;
use std::path::Path;
use syn::{Attribute, Fields, Item, ItemEnum, ItemStruct, Meta};

/// Derives that mark a type as part of the Thrift schema
const MARKER_DERIVES: &[&str] = &["Thrift", "Serialize", "Deserialize"];

/// Parse a Rust source file and extract the structs and enums marked for Thrift
pub fn parse_items(content: &str, source_file: &Path) -> Result<ParseResult> {
    let syntax = syn::parse_file(content)?;
    let mut result = ParseResult::new();

    collect_items(&syntax.items, source_file, &mut result);

    Ok(result)
}

/// Recursively collect items, descending into inline modules
fn collect_items(items: &[Item], source_file: &Path, result: &mut ParseResult) {
    for item in items {
        match item {
            Item::Struct(item_struct) if is_marked(&item_struct.attrs) => {
                result.structs.push(parse_struct(item_struct, source_file));
            }
            Item::Enum(item_enum) if is_marked(&item_enum.attrs) => {
                result.enums.push(parse_enum(item_enum, source_file));
            }
            Item::Mod(module) => {
                if let Some((_, mod_items)) = &module.content {
                    collect_items(mod_items, source_file, result);
                }
            }
            _ => {}
        }
    }
}

/// Check if a type derives `Thrift`, `Serialize` or `Deserialize`
fn is_marked(attrs: &[Attribute]) -> bool {
    for attr in attrs {
        if let Meta::List(meta_list) = &attr.meta {
            if meta_list.path.is_ident("derive") {
                if let Ok(nested) = meta_list.parse_args_with(
                    syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
                ) {
                    // Last segment covers both `Thrift` and `thrift_sig_derive::Thrift`
                    let marked = nested.iter().any(|path| {
                        path.segments
                            .last()
                            .is_some_and(|last| MARKER_DERIVES.contains(&last.ident.to_string().as_str()))
                    });
                    if marked {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Check for `#[thrift(skip)]` or `#[serde(skip)]`
fn is_skipped(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        let Meta::List(meta_list) = &attr.meta else {
            return false;
        };
        if !(meta_list.path.is_ident("thrift") || meta_list.path.is_ident("serde")) {
            return false;
        }
        meta_list
            .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
            .map(|nested| {
                nested
                    .iter()
                    .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident("skip")))
            })
            .unwrap_or(false)
    })
}

/// Parse a struct into our ThriftStruct representation
fn parse_struct(item: &ItemStruct, source_file: &Path) -> ThriftStruct {
    let generics = item
        .generics
        .params
        .iter()
        .filter_map(|param| {
            if let syn::GenericParam::Type(type_param) = param {
                Some(type_param.ident.to_string())
            } else {
                None
            }
        })
        .collect();

    let fields = match &item.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter(|field| !is_skipped(&field.attrs))
            .filter_map(|field| {
                Some(StructField {
                    name: field.ident.as_ref()?.to_string(),
                    ty: field.ty.clone(),
                })
            })
            .collect(),
        // Tuple struct - use numbered field names
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .filter(|(_, field)| !is_skipped(&field.attrs))
            .map(|(i, field)| StructField {
                name: format!("field{}", i),
                ty: field.ty.clone(),
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    ThriftStruct {
        name: item.ident.to_string(),
        generics,
        fields,
        source_file: source_file.to_path_buf(),
    }
}

/// Parse an enum into our ThriftEnum representation
fn parse_enum(item: &ItemEnum, source_file: &Path) -> ThriftEnum {
    let variants = item
        .variants
        .iter()
        .map(|variant| variant.ident.to_string())
        .collect();
    let has_data = item
        .variants
        .iter()
        .any(|variant| !matches!(variant.fields, Fields::Unit));

    ThriftEnum {
        name: item.ident.to_string(),
        variants,
        has_data,
        source_file: source_file.to_path_buf(),
    }
}
