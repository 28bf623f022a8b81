// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(AttributeEnum)]` implementation.
//!
//! Implements `ToAttributeValue` for fieldless enums so enum-typed fields
//! report `AttributeValue::Enum`, which default-value resolution unwraps to
//! the backing value or the case name.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Clone, Copy, AttributeEnum)]
//! pub enum Priority {
//!     Low = 1,
//!     High = 10,
//! }
//!
//! #[derive(AttributeEnum)]
//! pub enum Status {
//!     #[attribute(value = "active")]
//!     Active,
//!     Draft,
//! }
//! ```
//!
//! `Priority::High` reports backing `Int(10)`. `Status::Active` reports
//! backing `Text("active")`; `Status::Draft` has no backing value and
//! resolves to its case name.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Variant, parse_macro_input};

/// Entry point for `#[derive(AttributeEnum)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into()
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "AttributeEnum can only be derived for enums"
            ));
        }
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "AttributeEnum requires at least one variant"
        ));
    }

    let discriminants = variants.iter().any(|v| v.discriminant.is_some());
    let arms = variants
        .iter()
        .map(|variant| arm(variant, discriminants))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::model_inspect::ToAttributeValue for #name #ty_generics #where_clause {
            fn to_attribute_value(&self) -> ::std::option::Option<::model_inspect::AttributeValue> {
                let (case, backing): (&str, ::std::option::Option<::model_inspect::Value>) = match self {
                    #(#arms)*
                };
                ::std::option::Option::Some(::model_inspect::AttributeValue::Enum {
                    case: case.to_string(),
                    backing
                })
            }
        }
    })
}

/// One match arm: `Self::Case => ("Case", backing),`.
fn arm(variant: &Variant, discriminants: bool) -> syn::Result<TokenStream2> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "AttributeEnum variants cannot carry fields"
        ));
    }

    let ident = &variant.ident;
    let case = ident.to_string();

    let backing = match parse_value_attr(&variant.attrs)? {
        Some(lit) => value_tokens(&lit)?,
        None if discriminants => quote! {
            ::std::option::Option::Some(::model_inspect::Value::Int(Self::#ident as i64))
        },
        None => quote!(::std::option::Option::None)
    };

    Ok(quote! {
        Self::#ident => (#case, #backing),
    })
}

/// Parse `#[attribute(value = ...)]`.
fn parse_value_attr(attrs: &[Attribute]) -> syn::Result<Option<Lit>> {
    let mut value = None;
    for attr in attrs {
        if !attr.path().is_ident("attribute") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                value = Some(meta.value()?.parse::<Lit>()?);
                Ok(())
            } else {
                Err(meta.error("expected `value = ...`"))
            }
        })?;
    }
    Ok(value)
}

fn value_tokens(lit: &Lit) -> syn::Result<TokenStream2> {
    let value = match lit {
        Lit::Str(s) => quote!(::model_inspect::Value::Text(#s.to_string())),
        Lit::Int(i) => {
            let n: i64 = i.base10_parse()?;
            quote!(::model_inspect::Value::Int(#n))
        }
        Lit::Float(f) => {
            let n: f64 = f.base10_parse()?;
            quote!(::model_inspect::Value::Float(#n))
        }
        Lit::Bool(b) => quote!(::model_inspect::Value::Bool(#b)),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "backing value must be a string, integer, float or bool literal"
            ));
        }
    };
    Ok(quote!(::std::option::Option::Some(#value)))
}
