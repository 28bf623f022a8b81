// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types and attribute resolution for model-inspect.
//!
//! This crate merges two sources of truth about a persisted record type:
//! the physical schema of its table and the record's behavioural metadata
//! (casts, accessors, mutators, computed attributes, visibility and
//! mass-assignment rules). The result is one ordered list of
//! [`Attribute`] descriptors.
//!
//! # Overview
//!
//! - [`SchemaSource`] — Columns and indexes of a table
//! - [`Record`] — Behavioural metadata of a record type
//! - [`Inspector`] — Resolves a record into [`Attribute`]s
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `model-inspect` directly, which re-exports this
//! crate together with the derive macros. For manual implementations:
//!
//! ```rust
//! use model_inspect_core::prelude::*;
//!
//! struct Tag;
//!
//! impl Record for Tag {
//!     fn table(&self) -> &str {
//!         "tags"
//!     }
//!
//!     fn is_mass_assignable(&self, _attribute: &str) -> bool {
//!         true
//!     }
//! }
//!
//! let schema = TableSchema::new().column(Column::new("label", "varchar(64)"));
//! let attributes = Inspector::new(schema).inspect(&Tag).unwrap();
//! assert_eq!(attributes[0].semantic_type.as_deref(), Some("string"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute;
pub mod behavior;
pub mod conventions;
pub mod index;
pub mod inspector;
#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub mod postgres;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod schema;
pub mod types;
pub mod value;
pub mod virtuals;
pub mod visibility;

pub use attribute::{Attribute, Transform};
pub use conventions::{ConventionMatch, MethodCatalog, MethodKind, classify};
pub use index::KeyFlags;
pub use inspector::{InspectError, Inspector};
pub use record::{MassAssignment, MethodSignature, Parameter, Record};
pub use registry::Registry;
pub use schema::{Column, Index, MemorySchema, SchemaError, SchemaSource, TableSchema};
pub use types::{ScalarKind, infer};
pub use value::{AttributeValue, ToAttributeValue, Value};
pub use visibility::Visibility;
