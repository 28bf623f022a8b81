// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method naming conventions.
//!
//! Classifies declared methods into accessors, mutators and computed
//! attributes purely from their names and declared types.
//!
//! # Conventions
//!
//! | Method | Kind | Attribute | Semantic type |
//! |--------|------|-----------|---------------|
//! | `getFullNameAttribute` / `get_full_name_attribute` | accessor | `full_name` | return type |
//! | `setFullNameAttribute` / `set_full_name_attribute` | mutator | `full_name` | type of `value` |
//! | `fullName() -> Attribute` / `full_name() -> Attribute` | computed attribute | `full_name` | none |

use convert_case::{Boundary, Case, Casing};

use crate::record::MethodSignature;

/// Kind of attribute-defining method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Get accessor.
    Accessor,

    /// Set mutator.
    Mutator,

    /// Single method defining both read and write behaviour.
    ComputedAttribute
}

/// A method recognised as defining an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionMatch {
    /// Snake-cased attribute name.
    pub attribute: String,

    /// Method kind.
    pub kind: MethodKind,

    /// Declared type carried by the method, if any.
    pub semantic_type: Option<String>
}

/// Classify one method by naming convention.
///
/// Returns `None` for methods that define no attribute.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{MethodKind, MethodSignature, classify};
///
/// let method = MethodSignature::new("getFullNameAttribute").returns("string");
/// let matched = classify(&method).unwrap();
/// assert_eq!(matched.attribute, "full_name");
/// assert_eq!(matched.kind, MethodKind::Accessor);
/// assert_eq!(matched.semantic_type.as_deref(), Some("string"));
///
/// assert!(classify(&MethodSignature::new("save")).is_none());
/// ```
#[must_use]
pub fn classify(method: &MethodSignature) -> Option<ConventionMatch> {
    let name = method.name.as_str();

    if let Some(inner) = strip_affixes(name, "get") {
        return Some(ConventionMatch {
            attribute:     snake(inner),
            kind:          MethodKind::Accessor,
            semantic_type: clean_type(method.return_type.as_deref())
        });
    }

    if let Some(inner) = strip_affixes(name, "set") {
        return Some(ConventionMatch {
            attribute:     snake(inner),
            kind:          MethodKind::Mutator,
            semantic_type: clean_type(method.parameter_type("value"))
        });
    }

    if method
        .return_type
        .as_deref()
        .is_some_and(returns_attribute_definition)
    {
        return Some(ConventionMatch {
            attribute:     snake(name),
            kind:          MethodKind::ComputedAttribute,
            semantic_type: None
        });
    }

    None
}

/// Strip `get`/`set` prefix and `Attribute` suffix in either camel or snake
/// form. The part in between must be non-empty.
fn strip_affixes<'a>(name: &'a str, verb: &str) -> Option<&'a str> {
    let camel = name
        .strip_prefix(verb)
        .and_then(|rest| rest.strip_suffix("Attribute"));
    if let Some(inner) = camel
        && !inner.is_empty()
        && !inner.starts_with('_')
    {
        return Some(inner);
    }

    name.strip_prefix(verb)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.strip_suffix("_attribute"))
        .filter(|inner| !inner.is_empty())
}

/// Snake-case an attribute name. Digits stay attached to the preceding
/// word: `Line2` is `line2`, `Address2Line` is `address2_line`.
fn snake(name: &str) -> String {
    name.remove_boundaries(&[Boundary::LowerDigit, Boundary::UpperDigit, Boundary::DigitLower])
        .to_case(Case::Snake)
}

/// Trimmed type text; blank text degrades to `None`.
fn clean_type(ty: Option<&str>) -> Option<String> {
    ty.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Check if a declared return type names the attribute-definition type.
///
/// Accepts any path form (`Attribute`, `crate::casts::Attribute`) with
/// optional generics or a leading reference.
fn returns_attribute_definition(ty: &str) -> bool {
    let ty = ty.trim().trim_start_matches('&').trim();
    let base = ty.split('<').next().unwrap_or_default().trim();
    let last = base
        .rsplit(':')
        .next()
        .unwrap_or_default()
        .trim();
    last == "Attribute"
}

/// Convention matches of a method list, for attribute lookups.
#[derive(Debug, Clone, Default)]
pub struct MethodCatalog {
    matches: Vec<ConventionMatch>
}

impl MethodCatalog {
    /// Classify every non-static method.
    #[must_use]
    pub fn new(methods: &[MethodSignature]) -> Self {
        Self {
            matches: methods
                .iter()
                .filter(|m| !m.is_static)
                .filter_map(classify)
                .collect()
        }
    }

    fn has(&self, attribute: &str, kind: MethodKind) -> bool {
        self.matches
            .iter()
            .any(|m| m.kind == kind && m.attribute == attribute)
    }

    /// Check for both a get accessor and a set mutator.
    pub fn has_accessor_pair(&self, attribute: &str) -> bool {
        self.has(attribute, MethodKind::Accessor) && self.has(attribute, MethodKind::Mutator)
    }

    /// Check for a dual-purpose computed attribute.
    pub fn has_computed_attribute(&self, attribute: &str) -> bool {
        self.has(attribute, MethodKind::ComputedAttribute)
    }
}
