// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Behavioural metadata of column-backed attributes.
//!
//! # Priority
//!
//! 1. Get accessor and set mutator both declared → [`Transform::Accessor`]
//! 2. Dual-purpose computed attribute → [`Transform::Attribute`]
//! 3. Cast rule → [`Transform::Cast`]
//! 4. Nothing → `None`

use std::collections::BTreeMap;

use crate::{attribute::Transform, record::Record};

/// Cast label applied to legacy date attributes.
pub const DATE_CAST: &str = "datetime";

/// Effective cast table of a record.
///
/// Legacy date attributes map to [`DATE_CAST`]; explicit casts are merged
/// over them and win on collision.
#[must_use]
pub fn cast_table<R: Record + ?Sized>(record: &R) -> BTreeMap<String, String> {
    let mut table: BTreeMap<String, String> = record
        .dates()
        .into_iter()
        .filter(|name| !name.is_empty())
        .map(|name| (name, DATE_CAST.to_string()))
        .collect();

    table.extend(record.casts());
    table
}

/// Resolve the transform of a column-backed attribute.
///
/// `casts` is the record's [`cast_table`], computed once per resolution.
pub fn transform_for<R: Record + ?Sized>(
    record: &R,
    casts: &BTreeMap<String, String>,
    column: &str
) -> Option<Transform> {
    if record.has_accessor_pair(column) {
        return Some(Transform::Accessor);
    }

    if record.has_computed_attribute(column) {
        return Some(Transform::Attribute);
    }

    casts.get(column).cloned().map(Transform::Cast)
}
