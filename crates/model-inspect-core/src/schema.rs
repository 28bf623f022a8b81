// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Physical schema facts and the schema source seam.
//!
//! The resolver never talks to a database directly. It asks a
//! [`SchemaSource`] for the columns and indexes of one table and treats any
//! error as fatal for that resolution.
//!
//! # Sources
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`TableSchema`] | Snapshot of a single table, ignores the table name |
//! | [`MemorySchema`] | Snapshots keyed by table name |
//! | `postgres::load_table` | Builds a [`TableSchema`] from `pg_catalog` (feature `postgres`) |

use std::collections::BTreeMap;

/// One physical column as reported by the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Raw type label (e.g. `varchar(255)`, `timestamp(0) without time zone`).
    pub type_label: String,

    /// Normalized type name (e.g. `varchar`, `int4`), when available.
    pub type_name: Option<String>,

    /// Whether the column auto-increments.
    pub auto_increment: bool,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// Declared default expression.
    pub default: Option<String>
}

impl Column {
    /// Create a NOT NULL column without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name:           name.into(),
            type_label:     type_label.into(),
            type_name:      None,
            auto_increment: false,
            nullable:       false,
            default:        None
        }
    }

    /// Set the normalized type name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Mark the column as auto-incrementing.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Mark the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the declared default expression.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Table index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name, when the source reports one.
    pub name: Option<String>,

    /// Covered columns in index order.
    pub columns: Vec<String>,

    /// Primary key index.
    pub primary: bool,

    /// Unique index.
    pub unique: bool
}

impl Index {
    /// Create a plain (non-unique) index.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            name:    None,
            columns: columns.into_iter().map(Into::into).collect(),
            primary: false,
            unique:  false
        }
    }

    /// Create a unique index.
    #[must_use]
    pub fn unique<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            unique: true,
            ..Self::new(columns)
        }
    }

    /// Create a primary key index. Primary keys are also unique.
    #[must_use]
    pub fn primary<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            primary: true,
            unique: true,
            ..Self::new(columns)
        }
    }

    /// Set the index name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check if the index covers exactly one column.
    pub fn is_single_column(&self) -> bool {
        self.columns.len() == 1
    }
}

/// Source of physical schema facts.
///
/// Implementations must return columns in their physical order; the
/// resolver preserves that order.
pub trait SchemaSource {
    /// Error type for schema reads.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ordered columns of `table`.
    fn columns(&self, table: &str) -> Result<Vec<Column>, Self::Error>;

    /// All indexes of `table`.
    fn indexes(&self, table: &str) -> Result<Vec<Index>, Self::Error>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    type Error = S::Error;

    fn columns(&self, table: &str) -> Result<Vec<Column>, Self::Error> {
        (**self).columns(table)
    }

    fn indexes(&self, table: &str) -> Result<Vec<Index>, Self::Error> {
        (**self).indexes(table)
    }
}

/// Errors from the in-memory schema sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No snapshot registered for the table.
    #[error("table not found: {0}")]
    TableNotFound(String)
}

/// Columns and indexes of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    /// Ordered columns.
    pub columns: Vec<Column>,

    /// Indexes.
    pub indexes: Vec<Index>
}

impl TableSchema {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add an index.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }
}

impl SchemaSource for TableSchema {
    type Error = std::convert::Infallible;

    fn columns(&self, _table: &str) -> Result<Vec<Column>, Self::Error> {
        Ok(self.columns.clone())
    }

    fn indexes(&self, _table: &str) -> Result<Vec<Index>, Self::Error> {
        Ok(self.indexes.clone())
    }
}

/// Table snapshots keyed by table name.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{Column, Index, MemorySchema, SchemaSource, TableSchema};
///
/// let schema = MemorySchema::new().table(
///     "users",
///     TableSchema::new()
///         .column(Column::new("id", "integer").auto_increment())
///         .index(Index::primary(["id"]))
/// );
///
/// assert_eq!(schema.columns("users").unwrap().len(), 1);
/// assert!(schema.columns("posts").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySchema {
    tables: BTreeMap<String, TableSchema>
}

impl MemorySchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table snapshot, replacing any previous one.
    #[must_use]
    pub fn table(mut self, name: impl Into<String>, table: TableSchema) -> Self {
        self.insert(name, table);
        self
    }

    /// Register a table snapshot in place.
    pub fn insert(&mut self, name: impl Into<String>, table: TableSchema) {
        self.tables.insert(name.into(), table);
    }

    /// Snapshot for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    fn lookup(&self, name: &str) -> Result<&TableSchema, SchemaError> {
        self.tables
            .get(name)
            .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))
    }
}

impl SchemaSource for MemorySchema {
    type Error = SchemaError;

    fn columns(&self, table: &str) -> Result<Vec<Column>, Self::Error> {
        Ok(self.lookup(table)?.columns.clone())
    }

    fn indexes(&self, table: &str) -> Result<Vec<Index>, Self::Error> {
        Ok(self.lookup(table)?.indexes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_builder() {
        let column = Column::new("created_at", "timestamp(0) without time zone")
            .with_type_name("timestamp")
            .nullable()
            .with_default("CURRENT_TIMESTAMP");

        assert_eq!(column.name, "created_at");
        assert_eq!(column.type_name.as_deref(), Some("timestamp"));
        assert!(column.nullable);
        assert!(!column.auto_increment);
        assert_eq!(column.default.as_deref(), Some("CURRENT_TIMESTAMP"));
    }

    #[test]
    fn index_constructors() {
        let plain = Index::new(["a", "b"]);
        assert!(!plain.primary && !plain.unique);
        assert!(!plain.is_single_column());

        let unique = Index::unique(["email"]).with_name("users_email_unique");
        assert!(unique.unique && !unique.primary);
        assert_eq!(unique.name.as_deref(), Some("users_email_unique"));

        let primary = Index::primary(["id"]);
        assert!(primary.primary && primary.unique);
        assert!(primary.is_single_column());
    }

    #[test]
    fn memory_schema_missing_table() {
        let schema = MemorySchema::new();
        assert_eq!(
            schema.indexes("ghosts"),
            Err(SchemaError::TableNotFound("ghosts".to_string()))
        );
        assert_eq!(
            SchemaError::TableNotFound("ghosts".into()).to_string(),
            "table not found: ghosts"
        );
    }

    #[test]
    fn memory_schema_preserves_column_order() {
        let schema = MemorySchema::new().table(
            "posts",
            TableSchema::new()
                .column(Column::new("title", "text"))
                .column(Column::new("body", "text"))
                .column(Column::new("id", "bigint"))
        );

        let names: Vec<_> = schema
            .columns("posts")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["title", "body", "id"]);
    }

    #[test]
    fn borrowed_source_delegates() {
        let table = TableSchema::new().column(Column::new("id", "integer"));
        let source: &TableSchema = &table;
        assert_eq!(SchemaSource::columns(&source, "any").unwrap().len(), 1);
    }
}
