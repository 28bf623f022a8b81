// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use model_inspect_core::prelude::*;
//! ```

pub use crate::{
    Attribute, AttributeValue, Column, Index, InspectError, Inspector, MassAssignment,
    MemorySchema, MethodSignature, Record, Registry, SchemaSource, TableSchema,
    ToAttributeValue, Transform, Value
};
