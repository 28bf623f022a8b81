// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Virtual attribute discovery.
//!
//! Virtual attributes have no backing column and exist only through
//! accessor, mutator or computed-attribute methods.
//!
//! # Algorithm
//!
//! ```text
//! methods ──► own instance methods ──► classify ──► drop empty / column names
//!                                                          │
//!                     ┌────────────────────────────────────┘
//!                     ▼
//!          group by name (first-seen order)
//!                     │
//!     ┌───────────────┼──────────────────────────┐
//!     ▼               ▼                          ▼
//! [accessor,      singleton or              3+ entries or other
//!  mutator]       computed attribute        two-entry shapes
//!     │               │                          │
//!  collapse to    pass through               pass through
//!  `attribute`                                (duplicate names kept)
//! ```
//!
//! Groups are collapsed only when they hold exactly one accessor and one
//! mutator. Larger groups keep every entry, so the result can contain
//! repeated names in that case.

use tracing::trace;

use crate::{
    attribute::{Attribute, Transform},
    conventions::{ConventionMatch, MethodKind, classify},
    record::Record,
    visibility::Visibility
};

/// Virtual attribute before record-level flags are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Attribute name.
    pub name: String,

    /// Declared type, if any.
    pub semantic_type: Option<String>,

    /// Transform derived from the method kind.
    pub transform: Transform
}

impl From<ConventionMatch> for Candidate {
    fn from(matched: ConventionMatch) -> Self {
        let transform = match matched.kind {
            MethodKind::Accessor => Transform::Accessor,
            MethodKind::Mutator => Transform::Mutator,
            MethodKind::ComputedAttribute => Transform::Attribute
        };

        Self {
            name: matched.attribute,
            semantic_type: matched.semantic_type,
            transform
        }
    }
}

/// Collect candidates from the record's own instance methods.
///
/// Candidates with an empty name or a name in `columns` are dropped.
pub fn candidates<R: Record + ?Sized>(record: &R, columns: &[&str]) -> Vec<Candidate> {
    record
        .methods()
        .iter()
        .filter(|method| method.is_own_instance_method())
        .filter_map(classify)
        .map(Candidate::from)
        .filter(|candidate| {
            if candidate.name.is_empty() {
                return false;
            }
            if columns.contains(&candidate.name.as_str()) {
                trace!(attribute = %candidate.name, "virtual candidate shadowed by column");
                return false;
            }
            true
        })
        .collect()
}

/// Group candidates by name and collapse accessor/mutator pairs.
///
/// Output follows the order in which each name was first seen.
#[must_use]
pub fn merge(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut groups: Vec<(String, Vec<Candidate>)> = Vec::new();
    for candidate in candidates {
        match groups.iter_mut().find(|(name, _)| *name == candidate.name) {
            Some((_, group)) => group.push(candidate),
            None => groups.push((candidate.name.clone(), vec![candidate]))
        }
    }

    let mut merged = Vec::new();
    for (name, mut group) in groups {
        if let Some(pair) = collapse_pair(&group) {
            merged.push(pair);
            continue;
        }

        if group.len() > 2 {
            trace!(attribute = %name, entries = group.len(), "uncollapsed duplicate group");
        }
        merged.append(&mut group);
    }
    merged
}

/// Collapse a `[accessor, mutator]` group in either order.
fn collapse_pair(group: &[Candidate]) -> Option<Candidate> {
    let [first, second] = group else {
        return None;
    };

    let (accessor, mutator) = match (&first.transform, &second.transform) {
        (Transform::Accessor, Transform::Mutator) => (first, second),
        (Transform::Mutator, Transform::Accessor) => (second, first),
        _ => return None
    };

    Some(Candidate {
        name:          accessor.name.clone(),
        semantic_type: accessor
            .semantic_type
            .clone()
            .or_else(|| mutator.semantic_type.clone()),
        transform:     Transform::Attribute
    })
}

/// Discover the virtual attributes of `record`.
///
/// `columns` are the names of the column-backed attributes; columns always
/// win over virtual candidates.
pub fn discover<R: Record + ?Sized>(
    record: &R,
    columns: &[&str],
    visibility: &Visibility
) -> Vec<Attribute> {
    merge(candidates(record, columns))
        .into_iter()
        .map(|candidate| Attribute {
            mass_assignable: record.is_mass_assignable(&candidate.name),
            appended:        Some(record.is_appended(&candidate.name)),
            hidden:          visibility.is_hidden(&candidate.name),
            name:            candidate.name,
            semantic_type:   candidate.semantic_type,
            storage_type:    None,
            auto_increment:  false,
            nullable:        None,
            default:         None,
            primary:         None,
            unique:          None,
            transform:       Some(candidate.transform),
            is_virtual:      true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MethodSignature;

    struct User {
        methods: Vec<MethodSignature>
    }

    impl Record for User {
        fn table(&self) -> &str {
            "users"
        }

        fn is_mass_assignable(&self, attribute: &str) -> bool {
            attribute == "password"
        }

        fn methods(&self) -> Vec<MethodSignature> {
            self.methods.clone()
        }

        fn is_appended(&self, attribute: &str) -> bool {
            attribute == "full_name"
        }
    }

    fn user(methods: Vec<MethodSignature>) -> User {
        User {
            methods
        }
    }

    fn candidate(name: &str, ty: Option<&str>, transform: Transform) -> Candidate {
        Candidate {
            name: name.into(),
            semantic_type: ty.map(str::to_string),
            transform
        }
    }

    #[test]
    fn accessor_and_mutator_collapse() {
        let record = user(vec![
            MethodSignature::new("getFooAttribute").returns("int"),
            MethodSignature::new("setFooAttribute").param("value", "string"),
        ]);
        let found = discover(&record, &[], &Visibility::default());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "foo");
        assert_eq!(found[0].transform, Some(Transform::Attribute));
        assert_eq!(found[0].semantic_type.as_deref(), Some("int"));
        assert!(found[0].is_virtual);
    }

    #[test]
    fn collapse_prefers_accessor_type_then_mutator() {
        let merged = merge(vec![
            candidate("foo", Some("string"), Transform::Mutator),
            candidate("foo", None, Transform::Accessor),
        ]);
        assert_eq!(merged, vec![candidate("foo", Some("string"), Transform::Attribute)]);
    }

    #[test]
    fn column_collision_is_dropped() {
        let record = user(vec![
            MethodSignature::new("getEmailAttribute"),
            MethodSignature::new("getNicknameAttribute"),
        ]);
        let found = discover(&record, &["email"], &Visibility::default());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "nickname");
        assert_eq!(found[0].transform, Some(Transform::Accessor));
    }

    #[test]
    fn column_collision_with_digits() {
        let record = user(vec![
            MethodSignature::new("get_line2_attribute").returns("String"),
            MethodSignature::new("set_line2_attribute").param("value", "String"),
        ]);
        let found = discover(&record, &["email", "line2"], &Visibility::default());

        assert!(found.is_empty());
    }

    #[test]
    fn excluded_methods() {
        let record = user(vec![
            MethodSignature::new("getAAttribute").static_fn(),
            MethodSignature::new("getBAttribute").abstract_fn(),
            MethodSignature::new("getCAttribute").inherited(),
            MethodSignature::new("getDAttribute"),
        ]);
        let names: Vec<_> = discover(&record, &[], &Visibility::default())
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["d"]);
    }

    #[test]
    fn computed_attribute_passes_through() {
        let record = user(vec![MethodSignature::new("fullName").returns("Attribute")]);
        let found = discover(&record, &[], &Visibility::default());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "full_name");
        assert_eq!(found[0].transform, Some(Transform::Attribute));
        assert!(found[0].semantic_type.is_none());
        assert_eq!(found[0].appended, Some(true));
    }

    #[test]
    fn two_accessors_are_not_collapsed() {
        let merged = merge(vec![
            candidate("foo", Some("int"), Transform::Accessor),
            candidate("foo", Some("string"), Transform::Accessor),
        ]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|c| c.transform == Transform::Accessor));
    }

    #[test]
    fn three_entry_group_keeps_duplicates() {
        let record = user(vec![
            MethodSignature::new("getFooAttribute").returns("int"),
            MethodSignature::new("setFooAttribute").param("value", "int"),
            MethodSignature::new("foo").returns("Attribute"),
        ]);
        let found = discover(&record, &[], &Visibility::default());

        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|a| a.name == "foo"));
        let transforms: Vec<_> = found.iter().map(|a| a.transform.clone()).collect();
        assert_eq!(
            transforms,
            [
                Some(Transform::Accessor),
                Some(Transform::Mutator),
                Some(Transform::Attribute)
            ]
        );
    }

    #[test]
    fn discovery_order_is_first_seen() {
        let merged = merge(vec![
            candidate("b", None, Transform::Accessor),
            candidate("a", None, Transform::Accessor),
            candidate("b", None, Transform::Mutator),
        ]);
        let names: Vec<_> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(merged[0].transform, Transform::Attribute);
    }

    #[test]
    fn record_flags_are_applied() {
        let record = user(vec![
            MethodSignature::new("setPasswordAttribute").param("value", "string"),
            MethodSignature::new("getSecretAttribute"),
        ]);
        let visibility = Visibility::new(vec!["secret".into()], vec![]);
        let found = discover(&record, &[], &visibility);

        assert_eq!(found[0].name, "password");
        assert!(found[0].mass_assignable);
        assert!(!found[0].hidden);
        assert_eq!(found[0].appended, Some(false));
        assert_eq!(found[0].transform, Some(Transform::Mutator));

        assert_eq!(found[1].name, "secret");
        assert!(!found[1].mass_assignable);
        assert!(found[1].hidden);
    }

    #[test]
    fn virtual_fields_are_not_applicable() {
        let record = user(vec![MethodSignature::new("getBadgeAttribute")]);
        let found = discover(&record, &[], &Visibility::default());
        let badge = &found[0];

        assert!(badge.storage_type.is_none());
        assert!(!badge.auto_increment);
        assert!(badge.nullable.is_none());
        assert!(badge.default.is_none());
        assert!(badge.primary.is_none());
        assert!(badge.unique.is_none());
    }
}
