// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column type inference.
//!
//! Maps a raw column type to a coarse semantic kind.
//!
//! # Resolution Order
//!
//! 1. Exact raw-label rules (`tinyint(1)`, `bit`, `boolean`) → `bool`
//! 2. Family match on the normalized type name
//! 3. Fallback → `string`
//!
//! # Family Table
//!
//! | Family | Type names | Kind |
//! |--------|-----------|------|
//! | Integer | `int`, `integer`, `bigint`, `smallint`, `int4`, `serial`, ... | `int` |
//! | Float | `float`, `double`, `real`, `decimal`, `numeric`, `float8`, ... | `float` |
//! | Binary | `binary`, `varbinary`, `blob`, `bytea`, ... | `resource` |
//! | Date/time | `date`, `datetime`, `timestamp`, `timestamptz`, `time`, `year`, ... | `DateTime` |
//! | JSON | `json`, `jsonb` | `mixed` |
//! | Boolean | `bool`, `boolean` | `bool` |

use std::fmt;

/// Semantic scalar kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean.
    Bool,

    /// Integer.
    Int,

    /// Floating point or fixed-point decimal.
    Float,

    /// Binary payload.
    Resource,

    /// Date, time or timestamp.
    DateTime,

    /// Structured document (JSON).
    Mixed,

    /// Fallback for everything else.
    String
}

impl ScalarKind {
    /// Label reported in [`Attribute::semantic_type`](crate::Attribute).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Resource => "resource",
            Self::DateTime => "DateTime",
            Self::Mixed => "mixed",
            Self::String => "string"
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the semantic kind of a column.
///
/// `type_label` is the raw type as reported by the schema source
/// (e.g. `varchar(255)`, `tinyint(1)`). `type_name` is the normalized type
/// name when the source provides one (e.g. `varchar`, `int4`); otherwise it
/// is derived from the label.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{ScalarKind, infer};
///
/// assert_eq!(infer("tinyint(1)", Some("tinyint")), ScalarKind::Bool);
/// assert_eq!(infer("tinyint(4)", Some("tinyint")), ScalarKind::Int);
/// assert_eq!(infer("timestamp without time zone", None), ScalarKind::DateTime);
/// assert_eq!(infer("geometry", None), ScalarKind::String);
/// ```
#[must_use]
pub fn infer(type_label: &str, type_name: Option<&str>) -> ScalarKind {
    let label = type_label.trim().to_ascii_lowercase();

    if matches!(
        label.as_str(),
        "tinyint(1)" | "bit" | "bit(1)" | "bool" | "boolean"
    ) {
        return ScalarKind::Bool;
    }

    let name = match type_name {
        Some(name) if !name.trim().is_empty() => normalize(name),
        _ => normalize(&label)
    };

    match name.as_str() {
        "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" | "int2" | "int4"
        | "int8" | "serial" | "smallserial" | "bigserial" | "serial2" | "serial4"
        | "serial8" => ScalarKind::Int,

        "float" | "float4" | "float8" | "double" | "real" | "decimal" | "numeric"
        | "dec" | "fixed" => ScalarKind::Float,

        "binary" | "varbinary" | "blob" | "tinyblob" | "mediumblob" | "longblob" | "bytea" => {
            ScalarKind::Resource
        }

        "date" | "datetime" | "datetime2" | "timestamp" | "timestamptz" | "time" | "timetz"
        | "year" | "smalldatetime" | "datetimeoffset" => ScalarKind::DateTime,

        "json" | "jsonb" => ScalarKind::Mixed,

        "bool" | "boolean" => ScalarKind::Bool,

        _ => ScalarKind::String
    }
}

/// Reduce a type string to its bare family name.
///
/// Lowercases, drops any `(...)` parameters and keeps the first word, so
/// `DOUBLE PRECISION` becomes `double` and `int(11) unsigned` becomes `int`.
fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    let head = lower.split('(').next().unwrap_or_default();
    head.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
