// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute descriptors.
//!
//! An [`Attribute`] is the unified description of one field of a record:
//! either backed by a physical column or purely behavioural (virtual).
//!
//! # Column vs Virtual
//!
//! | Field | Column-backed | Virtual |
//! |-------|---------------|---------|
//! | `storage_type` | raw column type | `None` |
//! | `auto_increment` | from schema | `false` |
//! | `nullable` | `Some(_)` | `None` |
//! | `default` | in-memory value or schema default | `None` |
//! | `primary` / `unique` | `Some(_)` | `None` |
//! | `appended` | `None` | `Some(_)` |
//! | `is_virtual` | `false` | `true` |

use std::fmt;

use crate::value::Value;

/// How an attribute's stored value is transformed on read or write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Declared value-cast rule, carrying its cast label (e.g. `datetime`).
    Cast(String),

    /// Custom get accessor (for columns: a get/set accessor pair).
    Accessor,

    /// Custom set mutator.
    Mutator,

    /// Single computed-attribute definition covering read and write.
    Attribute
}

impl Transform {
    /// Label reported to consumers.
    ///
    /// Casts report their own label; method-based transforms report
    /// `accessor`, `mutator` or `attribute`.
    pub fn label(&self) -> &str {
        match self {
            Self::Cast(label) => label,
            Self::Accessor => "accessor",
            Self::Mutator => "mutator",
            Self::Attribute => "attribute"
        }
    }

    /// Check if this transform comes from a cast rule.
    pub const fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Transform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Unified attribute descriptor.
///
/// Produced fresh on every resolution; names are unique within one
/// resolution result except for the uncollapsed duplicate groups described
/// in [`virtuals`](crate::virtuals).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    /// Attribute name.
    pub name: String,

    /// Best-effort semantic type (e.g. `int`, `string`, `DateTime`).
    ///
    /// Always set for columns; for virtual attributes this is the declared
    /// accessor return type or mutator parameter type, if any.
    pub semantic_type: Option<String>,

    /// Raw column type as reported by the schema source.
    pub storage_type: Option<String>,

    /// Whether the column auto-increments.
    pub auto_increment: bool,

    /// Whether the column accepts NULL. `None` for virtual attributes.
    pub nullable: Option<bool>,

    /// Default value with enumeration values unwrapped.
    pub default: Option<Value>,

    /// Covered by a single-column primary index. `None` for virtual.
    pub primary: Option<bool>,

    /// Covered by a single-column unique index. `None` for virtual.
    pub unique: Option<bool>,

    /// Whether bulk assignment may set this attribute.
    pub mass_assignable: bool,

    /// Whether a virtual attribute is appended to the default
    /// representation. `None` for columns.
    pub appended: Option<bool>,

    /// Value transformation, if any.
    pub transform: Option<Transform>,

    /// True when no backing column exists.
    pub is_virtual: bool,

    /// Whether the attribute is suppressed from default representation.
    pub hidden: bool
}

impl Attribute {
    /// Check if this attribute is backed by a column.
    pub const fn is_column(&self) -> bool {
        !self.is_virtual
    }

    /// Transform label, if any.
    pub fn transform_label(&self) -> Option<&str> {
        self.transform.as_ref().map(Transform::label)
    }
}
