// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute resolution.
//!
//! [`Inspector`] combines one schema read with the record's behavioural
//! metadata into an ordered list of [`Attribute`]s.
//!
//! # Flow
//!
//! ```text
//! record.table() ──► SchemaSource::columns ─┐
//!                └─► SchemaSource::indexes ─┤
//!                                           ▼
//!              per column: infer + KeyFlags + Visibility + transform_for
//!                                           │
//!                                           ▼
//!              virtuals::discover (columns win on name collision)
//!                                           │
//!                                           ▼
//!              [column attributes in schema order] ++ [virtual attributes]
//! ```

use tracing::debug;

use crate::{
    attribute::Attribute,
    behavior::{cast_table, transform_for},
    index::KeyFlags,
    record::Record,
    registry::Registry,
    schema::{Column, SchemaSource},
    types::infer,
    value::Value,
    virtuals::discover,
    visibility::Visibility
};

/// Errors from [`Inspector::inspect_named`].
#[derive(Debug, thiserror::Error)]
pub enum InspectError<E: std::error::Error + 'static> {
    /// No record registered under the identifier.
    #[error("unknown record: {0}")]
    UnknownRecord(String),

    /// Schema source failure.
    #[error(transparent)]
    Schema(E)
}

impl<E: std::error::Error + 'static> InspectError<E> {
    /// Check if the identifier could not be resolved.
    pub const fn is_unknown_record(&self) -> bool {
        matches!(self, Self::UnknownRecord(_))
    }

    /// Check if the schema source failed.
    pub const fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Resolves record attributes against a schema source.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{Column, Index, Inspector, MassAssignment, Record, TableSchema};
///
/// struct User;
///
/// impl Record for User {
///     fn table(&self) -> &str {
///         "users"
///     }
///
///     fn is_mass_assignable(&self, attribute: &str) -> bool {
///         MassAssignment::new(&["email"], &[]).permits(attribute)
///     }
/// }
///
/// let schema = TableSchema::new()
///     .column(Column::new("id", "integer").auto_increment())
///     .column(Column::new("email", "varchar(255)"))
///     .index(Index::primary(["id"]));
///
/// let attributes = Inspector::new(schema).inspect(&User).unwrap();
/// assert_eq!(attributes[0].semantic_type.as_deref(), Some("int"));
/// assert_eq!(attributes[0].primary, Some(true));
/// assert!(attributes[1].mass_assignable);
/// ```
#[derive(Debug, Clone)]
pub struct Inspector<S> {
    source: S
}

impl<S: SchemaSource> Inspector<S> {
    /// Create an inspector over `source`.
    pub const fn new(source: S) -> Self {
        Self {
            source
        }
    }

    /// Underlying schema source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve all attributes of `record`.
    ///
    /// Column-backed attributes come first in schema order, followed by
    /// virtual attributes in discovery order.
    ///
    /// # Errors
    ///
    /// Returns the schema source error unchanged if columns or indexes
    /// cannot be read.
    pub fn inspect<R: Record + ?Sized>(&self, record: &R) -> Result<Vec<Attribute>, S::Error> {
        let table = record.table();
        let columns = self.source.columns(table)?;
        let indexes = self.source.indexes(table)?;

        let visibility = Visibility::new(record.hidden(), record.visible());
        let casts = cast_table(record);

        let mut attributes: Vec<Attribute> = columns
            .iter()
            .map(|column| {
                let keys = KeyFlags::for_column(&column.name, &indexes);
                Attribute {
                    name:            column.name.clone(),
                    semantic_type:   Some(
                        infer(&column.type_label, column.type_name.as_deref())
                            .as_str()
                            .to_string()
                    ),
                    storage_type:    Some(column.type_label.clone()),
                    auto_increment:  column.auto_increment,
                    nullable:        Some(column.nullable),
                    default:         column_default(record, column),
                    primary:         Some(keys.primary),
                    unique:          Some(keys.unique),
                    mass_assignable: record.is_mass_assignable(&column.name),
                    appended:        None,
                    transform:       transform_for(record, &casts, &column.name),
                    is_virtual:      false,
                    hidden:          visibility.is_hidden(&column.name)
                }
            })
            .collect();

        let column_names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        let virtuals = discover(record, &column_names, &visibility);

        debug!(
            table,
            columns = attributes.len(),
            virtuals = virtuals.len(),
            "resolved record attributes"
        );

        attributes.extend(virtuals);
        Ok(attributes)
    }

    /// Resolve the attributes of a default instance of `R`.
    ///
    /// # Errors
    ///
    /// Same as [`inspect`](Self::inspect).
    pub fn inspect_default<R: Record + Default>(&self) -> Result<Vec<Attribute>, S::Error> {
        self.inspect(&R::default())
    }

    /// Resolve a record registered under `identifier`.
    ///
    /// # Errors
    ///
    /// - [`InspectError::UnknownRecord`] if nothing matches `identifier`
    /// - [`InspectError::Schema`] if the schema read fails
    pub fn inspect_named(
        &self,
        registry: &Registry,
        identifier: &str
    ) -> Result<Vec<Attribute>, InspectError<S::Error>> {
        let record = registry
            .resolve(identifier)
            .ok_or_else(|| InspectError::UnknownRecord(identifier.to_string()))?;

        self.inspect(&*record).map_err(InspectError::Schema)
    }
}

/// In-memory value (enumerations unwrapped), else the schema default.
fn column_default<R: Record + ?Sized>(record: &R, column: &Column) -> Option<Value> {
    record
        .attribute_value(&column.name)
        .map(|value| value.into_scalar())
        .filter(|value| !value.is_null())
        .or_else(|| column.default.clone().map(Value::Text))
}
