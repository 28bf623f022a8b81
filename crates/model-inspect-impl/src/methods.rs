// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[record_methods]` implementation.
//!
//! Re-emits the annotated impl block unchanged and adds an associated
//! function listing its methods as `MethodSignature` values.
//!
//! # Mapping
//!
//! | Declaration | Signature |
//! |-------------|-----------|
//! | no receiver | `is_static: true` |
//! | trait impl block | `inherited: true` |
//! | `-> T` | `return_type: Some("T")` |
//! | `value: T` | `Parameter { name: "value", ty: Some("T") }` |
//!
//! Patterns other than plain identifiers are reported as `_`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, ImplItem, ItemImpl, Pat, ReturnType, Signature, ext::IdentExt, parse_macro_input};

use crate::utils::types::render;

/// Entry point for `#[record_methods]`.
pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = TokenStream2::from(attr);
    let item = parse_macro_input!(item as ItemImpl);

    if !attr.is_empty() {
        return syn::Error::new_spanned(attr, "record_methods takes no arguments")
            .to_compile_error()
            .into();
    }

    generate(&item).into()
}

fn generate(item: &ItemImpl) -> TokenStream2 {
    let inherited = item.trait_.is_some();
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let signatures = item.items.iter().filter_map(|member| match member {
        ImplItem::Fn(method) => Some(signature(&method.sig, inherited)),
        _ => None
    });

    quote! {
        #item

        impl #impl_generics #self_ty #where_clause {
            /// Methods declared in the `#[record_methods]` impl block.
            #[doc(hidden)]
            pub fn record_methods() -> ::std::vec::Vec<::model_inspect::MethodSignature> {
                ::std::vec![#(#signatures),*]
            }
        }
    }
}

fn signature(sig: &Signature, inherited: bool) -> TokenStream2 {
    let name = sig.ident.unraw().to_string();
    let is_static = sig.receiver().is_none();

    let return_type = match &sig.output {
        ReturnType::Default => quote!(::std::option::Option::None),
        ReturnType::Type(_, ty) => {
            let label = render(ty);
            quote!(::std::option::Option::Some(#label.to_string()))
        }
    };

    let parameters = sig.inputs.iter().filter_map(|input| match input {
        FnArg::Receiver(_) => None,
        FnArg::Typed(typed) => {
            let name = match typed.pat.as_ref() {
                Pat::Ident(pat) => pat.ident.unraw().to_string(),
                _ => "_".to_string()
            };
            let ty = render(&typed.ty);
            Some(quote!(::model_inspect::Parameter::new(#name, ::std::option::Option::Some(#ty))))
        }
    });

    quote! {
        ::model_inspect::MethodSignature {
            name: #name.to_string(),
            return_type: #return_type,
            parameters: ::std::vec![#(#parameters),*],
            is_static: #is_static,
            is_abstract: false,
            inherited: #inherited
        }
    }
}
