// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Record)]` implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! └── attrs.rs  → RecordAttrs / FieldAttrs (darling)
//! ```
//!
//! # Generated Code
//!
//! A single `impl ::model_inspect::Record for T`:
//!
//! | Method | Source |
//! |--------|--------|
//! | `table` | `table = "..."` |
//! | `is_mass_assignable` | `MassAssignment` from fillable/guarded/unguarded |
//! | `hidden` / `visible` | Record lists plus field flags |
//! | `casts` / `dates` | Field `cast` options, `dates(..)` |
//! | `methods` | `Self::record_methods()` when `methods` is set |
//! | `attribute_value` | Field values via `ToAttributeValue` |
//! | `is_appended` | `appends(..)` |

mod attrs;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use self::attrs::RecordAttrs;

/// Entry point for `#[derive(Record)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Err(err) = check_shape(&input) {
        return err.to_compile_error().into();
    }

    match RecordAttrs::from_derive_input(&input) {
        Ok(attrs) => generate(&attrs).into(),
        Err(err) => err.with_span(&input.ident).write_errors().into()
    }
}

/// Only structs with named fields carry attributes.
fn check_shape(input: &DeriveInput) -> syn::Result<()> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Named(_)) => Ok(()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs with named fields"
        ))
    }
}

fn generate(attrs: &RecordAttrs) -> TokenStream2 {
    let ident = &attrs.ident;
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();
    let table = &attrs.table;

    let fillable = attrs.fillable_names();
    let guarded = attrs.guarded_names();
    let unguarded = attrs.unguarded;
    let hidden = attrs.hidden_names();
    let visible = attrs.visible_names();
    let appends = attrs.appended_names();
    let dates = attrs.date_names();
    let (cast_names, cast_rules): (Vec<_>, Vec<_>) = attrs.casts().into_iter().unzip();

    let methods = attrs.methods.then(|| {
        quote! {
            fn methods(&self) -> ::std::vec::Vec<::model_inspect::MethodSignature> {
                Self::record_methods()
            }
        }
    });

    let valued: Vec<_> = attrs
        .fields()
        .into_iter()
        .filter(|field| !field.skip)
        .filter_map(|field| Some((field.attribute_name()?, field.ident.as_ref()?)))
        .collect();
    let value_names = valued.iter().map(|(name, _)| name);
    let value_fields = valued.iter().map(|(_, ident)| ident);

    quote! {
        impl #impl_generics ::model_inspect::Record for #ident #ty_generics #where_clause {
            fn table(&self) -> &str {
                #table
            }

            fn is_mass_assignable(&self, attribute: &str) -> bool {
                let rules = ::model_inspect::MassAssignment {
                    fillable: ::std::vec![#(#fillable.to_string()),*],
                    guarded: ::std::vec![#(#guarded.to_string()),*],
                    unguarded: #unguarded
                };
                rules.permits(attribute)
            }

            fn hidden(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#hidden.to_string()),*]
            }

            fn visible(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#visible.to_string()),*]
            }

            fn casts(&self) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                ::std::vec![#((#cast_names.to_string(), #cast_rules.to_string())),*]
            }

            fn dates(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#dates.to_string()),*]
            }

            #methods

            fn attribute_value(
                &self,
                attribute: &str
            ) -> ::std::option::Option<::model_inspect::AttributeValue> {
                match attribute {
                    #(#value_names => ::model_inspect::ToAttributeValue::to_attribute_value(&self.#value_fields),)*
                    _ => ::std::option::Option::None
                }
            }

            fn is_appended(&self, attribute: &str) -> bool {
                let appended: &[&str] = &[#(#appends),*];
                appended.contains(&attribute)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn expand(input: DeriveInput) -> String {
        let attrs = RecordAttrs::from_derive_input(&input).unwrap();
        generate(&attrs).to_string()
    }

    #[test]
    fn shape_check() {
        assert!(check_shape(&parse_quote!(struct User { id: i64 })).is_ok());
        assert!(check_shape(&parse_quote!(struct User(i64);)).is_err());
        assert!(check_shape(&parse_quote!(struct User;)).is_err());

        let err = check_shape(&parse_quote!(enum User { A })).unwrap_err();
        assert_eq!(err.to_string(), "Record can only be derived for structs with named fields");
    }

    #[test]
    fn implements_record() {
        let output = expand(parse_quote! {
            #[record(table = "users")]
            struct User {
                id: Option<i64>
            }
        });

        assert!(output.contains("impl :: model_inspect :: Record for User"));
        assert!(output.contains("\"users\""));
        assert!(output.contains("\"*\" . to_string ()"));
        assert!(output.contains("\"id\" => :: model_inspect :: ToAttributeValue"));
        assert!(!output.contains("record_methods"));
    }

    #[test]
    fn methods_flag_reads_catalog() {
        let output = expand(parse_quote! {
            #[record(table = "users", methods)]
            struct User {
                id: Option<i64>
            }
        });
        assert!(output.contains("Self :: record_methods ()"));
    }

    #[test]
    fn skipped_fields_have_no_value() {
        let output = expand(parse_quote! {
            #[record(table = "users")]
            struct User {
                id: Option<i64>,
                #[record(skip)]
                cache: Vec<u8>
            }
        });
        assert!(!output.contains("\"cache\""));
    }

    #[test]
    fn renamed_field_value() {
        let output = expand(parse_quote! {
            #[record(table = "users")]
            struct User {
                #[record(rename = "type", cast = "string")]
                kind: Option<String>
            }
        });
        assert!(output.contains("\"type\" => :: model_inspect :: ToAttributeValue :: to_attribute_value (& self . kind)"));
        assert!(output.contains("(\"type\" . to_string () , \"string\" . to_string ())"));
    }

    #[test]
    fn generics_are_forwarded() {
        let output = expand(parse_quote! {
            #[record(table = "items", unguarded)]
            struct Item<T: Clone> {
                payload: T
            }
        });
        assert!(output.contains("impl < T : Clone > :: model_inspect :: Record for Item < T >"));
        assert!(output.contains("unguarded : true"));
    }
}
