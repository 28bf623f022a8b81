// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macros for model-inspect.
//!
//! Use the `model-inspect` crate instead of depending on this one directly;
//! generated code refers to `::model_inspect`.
//!
//! # Attribute Quick Reference
//!
//! ## Record-Level `#[record(...)]`
//!
//! ```rust,ignore
//! #[derive(Record)]
//! #[record(
//!     table = "users",          // Required: backing table
//!     fillable(name, email),    // Optional: mass-assignable attributes
//!     guarded(is_admin),        // Optional: protected attributes (default: all)
//!     unguarded,                // Optional: disable mass-assignment protection
//!     hidden(password),         // Optional: hidden from representation
//!     visible(name),            // Optional: exclusively visible
//!     appends(full_name),       // Optional: appended virtual attributes
//!     dates(verified_at),       // Optional: legacy date attributes
//!     methods                   // Optional: use the #[record_methods] catalog
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level `#[record(...)]`
//!
//! ```rust,ignore
//! pub struct User {
//!     #[record(fillable)]              // Adds to fillable list
//!     pub name: Option<String>,
//!
//!     #[record(hidden, guarded)]       // Hidden and protected
//!     pub password: Option<String>,
//!
//!     #[record(cast = "datetime")]     // Cast rule
//!     pub verified_at: Option<String>,
//!
//!     #[record(rename = "type")]       // Attribute name differs from field
//!     pub kind: Option<String>,
//!
//!     #[record(skip)]                  // Not an attribute value
//!     pub cache: Vec<u8>,
//! }
//! ```
//!
//! # Method Catalog
//!
//! ```rust,ignore
//! #[record_methods]
//! impl User {
//!     pub fn get_full_name_attribute(&self) -> String { /* ... */ }
//!     pub fn set_password_attribute(&mut self, value: String) { /* ... */ }
//! }
//! ```
//!
//! # Enumerations
//!
//! ```rust,ignore
//! #[derive(AttributeEnum)]
//! pub enum Status {
//!     #[attribute(value = "active")]
//!     Active,
//!     #[attribute(value = "banned")]
//!     Banned,
//! }
//! ```

mod attribute_enum;
mod methods;
mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive `model_inspect::Record` from declarative attributes.
///
/// See the [crate documentation](crate) for the attribute reference.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}

/// Emit a method catalog for an impl block.
///
/// Adds `fn record_methods() -> Vec<model_inspect::MethodSignature>` to the
/// implementing type. Use `#[record(methods)]` on the struct to feed it
/// into `Record::methods`. Only one annotated impl block per type.
#[proc_macro_attribute]
pub fn record_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    methods::expand(attr, item)
}

/// Derive `model_inspect::ToAttributeValue` for a fieldless enum.
///
/// Variants report their name and backing value: `#[attribute(value =
/// ...)]` when present, the discriminant when any variant declares one,
/// none otherwise.
#[proc_macro_derive(AttributeEnum, attributes(attribute))]
pub fn derive_attribute_enum(input: TokenStream) -> TokenStream {
    attribute_enum::derive(input)
}
