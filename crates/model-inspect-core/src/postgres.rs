// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL schema loading.
//!
//! Reads one table's columns and indexes from `pg_catalog` into a
//! [`TableSchema`] snapshot. Resolution itself stays synchronous: load the
//! snapshot, then hand it (or a [`MemorySchema`] holding it) to an
//! [`Inspector`](crate::Inspector).
//!
//! # Example
//!
//! ```rust,ignore
//! use model_inspect_core::{Inspector, postgres};
//!
//! let users = postgres::load_table(&pool, "public", "users").await?;
//! let attributes = Inspector::new(users).inspect(&User::default())?;
//! ```

use sqlx::PgPool;
use tracing::debug;

use crate::schema::{Column, Index, MemorySchema, TableSchema};

/// Columns in physical order.
const COLUMNS_SQL: &str = "\
SELECT a.attname::text AS name, \
       format_type(a.atttypid, a.atttypmod) AS type_label, \
       t.typname::text AS type_name, \
       NOT a.attnotnull AS nullable, \
       pg_get_expr(d.adbin, d.adrelid) AS default_expr, \
       a.attidentity::text AS identity \
FROM pg_attribute a \
JOIN pg_class c ON c.oid = a.attrelid \
JOIN pg_namespace n ON n.oid = c.relnamespace \
JOIN pg_type t ON t.oid = a.atttypid \
LEFT JOIN pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum \
WHERE c.relname = $1 AND n.nspname = $2 AND a.attnum > 0 AND NOT a.attisdropped \
ORDER BY a.attnum";

/// Indexes with their columns in key order, comma separated.
///
/// Expression keys (`attnum = 0`) have no column name and are reported as
/// empty entries so the index keeps its arity.
const INDEXES_SQL: &str = "\
SELECT ic.relname::text AS name, \
       string_agg(coalesce(a.attname::text, ''), ',' ORDER BY k.ord) AS columns, \
       i.indisprimary AS is_primary, \
       i.indisunique AS is_unique \
FROM pg_index i \
JOIN pg_class tc ON tc.oid = i.indrelid \
JOIN pg_namespace n ON n.oid = tc.relnamespace \
JOIN pg_class ic ON ic.oid = i.indexrelid \
CROSS JOIN LATERAL unnest(i.indkey) WITH ORDINALITY AS k(attnum, ord) \
LEFT JOIN pg_attribute a ON a.attrelid = i.indrelid AND a.attnum = k.attnum \
WHERE tc.relname = $1 AND n.nspname = $2 \
GROUP BY ic.relname, i.indisprimary, i.indisunique \
ORDER BY ic.relname";

type ColumnRow = (String, String, String, bool, Option<String>, String);
type IndexRow = (String, Option<String>, bool, bool);

/// Load the columns and indexes of `schema.table`.
///
/// # Errors
///
/// Returns `sqlx::Error` if either catalog query fails.
pub async fn load_table(pool: &PgPool, schema: &str, table: &str) -> Result<TableSchema, sqlx::Error> {
    let columns: Vec<ColumnRow> = sqlx::query_as(COLUMNS_SQL)
        .bind(table)
        .bind(schema)
        .fetch_all(pool)
        .await?;

    let indexes: Vec<IndexRow> = sqlx::query_as(INDEXES_SQL)
        .bind(table)
        .bind(schema)
        .fetch_all(pool)
        .await?;

    debug!(
        schema,
        table,
        columns = columns.len(),
        indexes = indexes.len(),
        "loaded table schema"
    );

    Ok(TableSchema {
        columns: columns.into_iter().map(column_from_row).collect(),
        indexes: indexes.into_iter().map(index_from_row).collect()
    })
}

/// Load `schema.table` and register it in `target` under `table`.
///
/// # Errors
///
/// Returns `sqlx::Error` if either catalog query fails.
pub async fn load_into(
    pool: &PgPool,
    target: &mut MemorySchema,
    schema: &str,
    table: &str
) -> Result<(), sqlx::Error> {
    let snapshot = load_table(pool, schema, table).await?;
    target.insert(table, snapshot);
    Ok(())
}

fn column_from_row(row: ColumnRow) -> Column {
    let (name, type_label, type_name, nullable, default, identity) = row;
    Column {
        auto_increment: is_auto_increment(&identity, default.as_deref()),
        name,
        type_label,
        type_name: Some(type_name),
        nullable,
        default
    }
}

fn index_from_row(row: IndexRow) -> Index {
    let (name, columns, primary, unique) = row;
    Index {
        name: Some(name),
        columns: columns
            .map(|c| c.split(',').map(str::to_string).collect())
            .unwrap_or_default(),
        primary,
        unique
    }
}

/// Identity columns and `serial` sequences both count as auto-increment.
fn is_auto_increment(identity: &str, default: Option<&str>) -> bool {
    !identity.is_empty() || default.is_some_and(|d| d.starts_with("nextval("))
}
