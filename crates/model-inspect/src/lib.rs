// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # model-inspect
//!
//! One crate, all features. Re-exports:
//! - [`Record`](macro@Record), [`AttributeEnum`] and [`record_methods`]
//!   macros from `model-inspect-impl`
//! - All types from `model-inspect-core` ([`Inspector`], [`Attribute`],
//!   [`SchemaSource`], [`Registry`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use model_inspect::{Column, Index, Inspector, Record, TableSchema};
//!
//! #[derive(Default, Record)]
//! #[record(table = "users", fillable(email), hidden(password))]
//! pub struct User {
//!     pub id: Option<i64>,
//!     pub email: Option<String>,
//!     pub password: Option<String>,
//! }
//!
//! let schema = TableSchema::new()
//!     .column(Column::new("id", "bigint").auto_increment())
//!     .column(Column::new("email", "varchar(255)"))
//!     .index(Index::primary(["id"]));
//!
//! let attributes = Inspector::new(schema).inspect_default::<User>()?;
//! ```

pub use model_inspect_core::*;
pub use model_inspect_impl::{AttributeEnum, Record, record_methods};
