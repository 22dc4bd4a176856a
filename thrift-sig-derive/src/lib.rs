//! Derive macro for thrift-sig
//!
//! `#[derive(Thrift)]` marks a struct or enum as part of the Thrift schema and
//! registers the `thrift` attribute namespace, allowing `#[thrift(skip)]` on
//! struct fields.
//!
//! The derive generates no code. The scanner in `thrift-sig` reads the marker
//! and the attributes straight from the source at generation time.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Marks a type for signature generation and enables `#[thrift(...)]` field attributes.
///
/// # Example
///
/// ```rust
/// use thrift_sig_derive::Thrift;
///
/// #[derive(Thrift)]
/// pub struct Order {
///     pub id: i64,
///     pub lines: Vec<String>,
///
///     // Left out of the signature report
///     #[thrift(skip)]
///     pub cache_key: u64,
/// }
/// ```
#[proc_macro_derive(Thrift, attributes(thrift))]
pub fn derive_thrift(input: TokenStream) -> TokenStream {
    // Only validates the item, nothing is emitted
    let _ = parse_macro_input!(input as DeriveInput);

    TokenStream::from(quote! {})
}
