// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-column key lookup.
//!
//! Only single-column indexes contribute to an attribute's `primary` and
//! `unique` flags. A composite `unique(tenant_id, email)` says nothing
//! about `email` alone.

use crate::schema::Index;

/// Indexes covering exactly `column` and nothing else.
pub fn single_column_indexes<'a>(
    column: &'a str,
    indexes: &'a [Index]
) -> impl Iterator<Item = &'a Index> + 'a {
    indexes
        .iter()
        .filter(move |index| index.is_single_column() && index.columns[0] == column)
}

/// Key flags of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyFlags {
    /// Covered by a single-column primary index.
    pub primary: bool,

    /// Covered by a single-column unique index.
    pub unique: bool
}

impl KeyFlags {
    /// Fold the single-column indexes of `column` into flags.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_inspect_core::{Index, KeyFlags};
    ///
    /// let indexes = [Index::primary(["id"]), Index::unique(["tenant_id", "email"])];
    ///
    /// let id = KeyFlags::for_column("id", &indexes);
    /// assert!(id.primary && id.unique);
    ///
    /// let email = KeyFlags::for_column("email", &indexes);
    /// assert!(!email.primary && !email.unique);
    /// ```
    #[must_use]
    pub fn for_column(column: &str, indexes: &[Index]) -> Self {
        single_column_indexes(column, indexes).fold(Self::default(), |flags, index| Self {
            primary: flags.primary || index.primary,
            unique:  flags.unique || index.unique
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_only() {
        let indexes = [Index::unique(["email"])];
        let flags = KeyFlags::for_column("email", &indexes);
        assert_eq!(
            flags,
            KeyFlags {
                primary: false,
                unique:  true
            }
        );
    }

    #[test]
    fn primary_and_unique() {
        let indexes = [Index::primary(["id"]), Index::unique(["id"])];
        let flags = KeyFlags::for_column("id", &indexes);
        assert!(flags.primary);
        assert!(flags.unique);
    }

    #[test]
    fn composite_only_is_ignored() {
        let indexes = [Index::unique(["email", "tenant_id"]), Index::primary(["email", "id"])];
        assert_eq!(KeyFlags::for_column("email", &indexes), KeyFlags::default());
    }

    #[test]
    fn expression_key_keeps_index_composite() {
        let indexes = [Index::unique(["", "tenant_id"]), Index::unique([""])];
        assert_eq!(KeyFlags::for_column("tenant_id", &indexes), KeyFlags::default());
        assert_eq!(single_column_indexes("tenant_id", &indexes).count(), 0);
    }

    #[test]
    fn plain_index_sets_nothing() {
        let indexes = [Index::new(["status"])];
        assert_eq!(KeyFlags::for_column("status", &indexes), KeyFlags::default());
    }

    #[test]
    fn primary_reported_non_unique() {
        let mut index = Index::primary(["id"]);
        index.unique = false;
        let flags = KeyFlags::for_column("id", &[index]);
        assert!(flags.primary);
        assert!(!flags.unique);
    }

    #[test]
    fn single_column_filter() {
        let indexes = [
            Index::new(["a"]),
            Index::unique(["a", "b"]),
            Index::unique(["a"]).with_name("a_unique"),
            Index::new(["b"])
        ];
        let matched: Vec<_> = single_column_indexes("a", &indexes).collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[1].name.as_deref(), Some("a_unique"));
    }
}
