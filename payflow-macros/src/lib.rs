//! Procedural macros for payflow.
//!
//! - `#[derive(Request)]` - implements `payflow::Request`

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, LitStr, parse_macro_input};

/// Derive macro for implementing the `Request` trait.
///
/// The request name defaults to the type name; override it with
/// `#[request(name = "...")]`.
///
/// ```rust,ignore
/// #[derive(Debug, Request)]
/// #[request(name = "update_order")]
/// struct UpdateOrder { location: String }
/// ```
#[proc_macro_derive(Request, attributes(request))]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_request(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_request(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_impl = parse_request_name(&input.attrs)?.map(|lit| {
        quote! {
            fn request_name(&self) -> &'static str {
                #lit
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::payflow::Request for #name #ty_generics #where_clause {
            #name_impl
        }
    })
}

fn parse_request_name(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut name = None;

    for attr in attrs {
        if !attr.path().is_ident("request") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "request name must not be empty"));
                }
                name = Some(lit);
                Ok(())
            } else {
                let ident = meta
                    .path
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                Err(meta.error(format!("unknown request attribute: {}", ident)))
            }
        })?;
    }

    Ok(name)
}
