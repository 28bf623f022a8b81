// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record type introspection seam.
//!
//! [`Record`] is the capability interface the resolver reads behavioural
//! metadata through. `#[derive(Record)]` implements it from declarative
//! attributes; it can also be implemented by hand.
//!
//! # Capabilities
//!
//! | Method | Provides |
//! |--------|----------|
//! | [`Record::table`] | Backing table name |
//! | [`Record::is_mass_assignable`] | Bulk-assignment predicate |
//! | [`Record::hidden`] / [`Record::visible`] | Visibility lists |
//! | [`Record::casts`] / [`Record::dates`] | Value-cast rules |
//! | [`Record::has_accessor_pair`] | Get accessor + set mutator present |
//! | [`Record::has_computed_attribute`] | Dual-purpose computed attribute present |
//! | [`Record::methods`] | Directly declared methods |
//! | [`Record::attribute_value`] | Current in-memory values |
//! | [`Record::is_appended`] | Appended to default representation |

use crate::{conventions::MethodCatalog, value::AttributeValue};

/// Declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,

    /// Declared type, if it could be rendered.
    pub ty: Option<String>
}

impl Parameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Option<&str>) -> Self {
        Self {
            name: name.into(),
            ty:   ty.map(str::to_string)
        }
    }
}

/// Signature of a method declared on a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name.
    pub name: String,

    /// Declared return type, if any.
    pub return_type: Option<String>,

    /// Parameters, excluding the receiver.
    pub parameters: Vec<Parameter>,

    /// Associated function without a receiver.
    pub is_static: bool,

    /// Declared without a body.
    pub is_abstract: bool,

    /// Provided by a supertype or trait rather than the record itself.
    pub inherited: bool
}

impl MethodSignature {
    /// Create an instance method with no parameters and no return type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            return_type: None,
            parameters:  Vec::new(),
            is_static:   false,
            is_abstract: false,
            inherited:   false
        }
    }

    /// Set the declared return type.
    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty:   Some(ty.into())
        });
        self
    }

    /// Mark as static.
    #[must_use]
    pub fn static_fn(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as abstract.
    #[must_use]
    pub fn abstract_fn(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as inherited.
    #[must_use]
    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }

    /// Declared type of the parameter called `name`.
    pub fn parameter_type(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.ty.as_deref())
    }

    /// Check if the method is declared directly on the record as an
    /// instance method with a body.
    pub const fn is_own_instance_method(&self) -> bool {
        !self.is_static && !self.is_abstract && !self.inherited
    }
}

/// Behavioural metadata of a persisted record type.
///
/// Only [`table`](Record::table) and
/// [`is_mass_assignable`](Record::is_mass_assignable) are required.
/// [`has_accessor_pair`](Record::has_accessor_pair) and
/// [`has_computed_attribute`](Record::has_computed_attribute) default to
/// the naming conventions applied to [`methods`](Record::methods).
pub trait Record {
    /// Backing table name.
    fn table(&self) -> &str;

    /// Check if bulk assignment may set `attribute`.
    fn is_mass_assignable(&self, attribute: &str) -> bool;

    /// Attributes hidden from default representation.
    fn hidden(&self) -> Vec<String> {
        Vec::new()
    }

    /// Attributes exclusively visible in default representation.
    fn visible(&self) -> Vec<String> {
        Vec::new()
    }

    /// Explicit cast rules as `(attribute, cast label)` pairs.
    fn casts(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Legacy date attributes, treated as `datetime` casts.
    fn dates(&self) -> Vec<String> {
        Vec::new()
    }

    /// Methods declared on the record type.
    fn methods(&self) -> Vec<MethodSignature> {
        Vec::new()
    }

    /// Current in-memory value of `attribute`, if set.
    fn attribute_value(&self, _attribute: &str) -> Option<AttributeValue> {
        None
    }

    /// Check if `attribute` is appended to default representation.
    fn is_appended(&self, _attribute: &str) -> bool {
        false
    }

    /// Check if the record declares both a get accessor and a set mutator
    /// for `attribute`.
    fn has_accessor_pair(&self, attribute: &str) -> bool {
        MethodCatalog::new(&self.methods()).has_accessor_pair(attribute)
    }

    /// Check if the record declares a dual-purpose computed attribute for
    /// `attribute`.
    fn has_computed_attribute(&self, attribute: &str) -> bool {
        MethodCatalog::new(&self.methods()).has_computed_attribute(attribute)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn table(&self) -> &str {
        (**self).table()
    }

    fn is_mass_assignable(&self, attribute: &str) -> bool {
        (**self).is_mass_assignable(attribute)
    }

    fn hidden(&self) -> Vec<String> {
        (**self).hidden()
    }

    fn visible(&self) -> Vec<String> {
        (**self).visible()
    }

    fn casts(&self) -> Vec<(String, String)> {
        (**self).casts()
    }

    fn dates(&self) -> Vec<String> {
        (**self).dates()
    }

    fn methods(&self) -> Vec<MethodSignature> {
        (**self).methods()
    }

    fn attribute_value(&self, attribute: &str) -> Option<AttributeValue> {
        (**self).attribute_value(attribute)
    }

    fn is_appended(&self, attribute: &str) -> bool {
        (**self).is_appended(attribute)
    }

    fn has_accessor_pair(&self, attribute: &str) -> bool {
        (**self).has_accessor_pair(attribute)
    }

    fn has_computed_attribute(&self, attribute: &str) -> bool {
        (**self).has_computed_attribute(attribute)
    }
}

/// Mass-assignment rules built from fillable and guarded lists.
///
/// # Rules
///
/// 1. `unguarded` → every attribute is assignable
/// 2. listed in `fillable` → assignable
/// 3. `guarded` is `["*"]` or lists the attribute (case-insensitive) → not
///    assignable
/// 4. otherwise assignable only when `fillable` is empty and the name does
///    not start with `_` or contain `.`
///
/// # Example
///
/// ```rust
/// use model_inspect_core::MassAssignment;
///
/// let rules = MassAssignment::new(&["name", "email"], &["*"]);
/// assert!(rules.permits("email"));
/// assert!(!rules.permits("is_admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MassAssignment {
    /// Explicitly assignable attributes.
    pub fillable: Vec<String>,

    /// Protected attributes; `*` guards everything not fillable.
    pub guarded: Vec<String>,

    /// Disable all protection.
    pub unguarded: bool
}

impl MassAssignment {
    /// Create from fillable and guarded lists.
    #[must_use]
    pub fn new(fillable: &[&str], guarded: &[&str]) -> Self {
        Self {
            fillable:  fillable.iter().map(|s| s.to_string()).collect(),
            guarded:   guarded.iter().map(|s| s.to_string()).collect(),
            unguarded: false
        }
    }

    /// Rules that permit everything.
    #[must_use]
    pub fn unguarded() -> Self {
        Self {
            fillable:  Vec::new(),
            guarded:   Vec::new(),
            unguarded: true
        }
    }

    /// Check if `attribute` may be mass-assigned.
    pub fn permits(&self, attribute: &str) -> bool {
        if self.unguarded {
            return true;
        }

        if self.fillable.iter().any(|f| f == attribute) {
            return true;
        }

        if self.is_guarded(attribute) {
            return false;
        }

        self.fillable.is_empty() && !attribute.contains('.') && !attribute.starts_with('_')
    }

    fn is_guarded(&self, attribute: &str) -> bool {
        if self.guarded.is_empty() {
            return false;
        }

        self.is_totally_guarded() || self.guarded.iter().any(|g| g.eq_ignore_ascii_case(attribute))
    }

    /// Check if everything outside `fillable` is guarded.
    pub fn is_totally_guarded(&self) -> bool {
        self.guarded.len() == 1 && self.guarded[0] == "*"
    }
}

impl Default for MassAssignment {
    fn default() -> Self {
        Self::new(&[], &["*"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Record for Bare {
        fn table(&self) -> &str {
            "bare"
        }

        fn is_mass_assignable(&self, _attribute: &str) -> bool {
            false
        }

        fn methods(&self) -> Vec<MethodSignature> {
            vec![
                MethodSignature::new("getTitleAttribute").returns("string"),
                MethodSignature::new("setTitleAttribute").param("value", "string"),
                MethodSignature::new("slug").returns("Attribute"),
            ]
        }
    }

    #[test]
    fn default_capabilities_are_empty() {
        let record = Bare;
        assert!(record.hidden().is_empty());
        assert!(record.visible().is_empty());
        assert!(record.casts().is_empty());
        assert!(record.dates().is_empty());
        assert!(record.attribute_value("title").is_none());
        assert!(!record.is_appended("title"));
    }

    #[test]
    fn default_predicates_follow_methods() {
        let record = Bare;
        assert!(record.has_accessor_pair("title"));
        assert!(!record.has_accessor_pair("slug"));
        assert!(record.has_computed_attribute("slug"));
        assert!(!record.has_computed_attribute("title"));
    }

    #[test]
    fn boxed_record_delegates() {
        let record: Box<dyn Record> = Box::new(Bare);
        assert_eq!(record.table(), "bare");
        assert!(record.has_accessor_pair("title"));
        assert_eq!(record.methods().len(), 3);
    }

    #[test]
    fn method_signature_helpers() {
        let method = MethodSignature::new("setNameAttribute")
            .param("value", "Option<String>")
            .returns("void");
        assert_eq!(method.parameter_type("value"), Some("Option<String>"));
        assert_eq!(method.parameter_type("other"), None);
        assert!(method.is_own_instance_method());
        assert!(!MethodSignature::new("boot").static_fn().is_own_instance_method());
        assert!(!MethodSignature::new("x").abstract_fn().is_own_instance_method());
        assert!(!MethodSignature::new("save").inherited().is_own_instance_method());
    }

    #[test]
    fn mass_assignment_fillable() {
        let rules = MassAssignment::new(&["name"], &[]);
        assert!(rules.permits("name"));
        assert!(!rules.permits("email"));
    }

    #[test]
    fn mass_assignment_totally_guarded() {
        let rules = MassAssignment::default();
        assert!(rules.is_totally_guarded());
        assert!(!rules.permits("name"));
    }

    #[test]
    fn mass_assignment_guarded_list() {
        let rules = MassAssignment::new(&[], &["Password"]);
        assert!(!rules.permits("password"));
        assert!(rules.permits("name"));
        assert!(!rules.permits("_token"));
        assert!(!rules.permits("meta.key"));
    }

    #[test]
    fn mass_assignment_fillable_beats_guarded() {
        let rules = MassAssignment::new(&["email"], &["email"]);
        assert!(rules.permits("email"));
    }

    #[test]
    fn mass_assignment_unguarded() {
        let rules = MassAssignment::unguarded();
        assert!(rules.permits("anything"));
        assert!(rules.permits("_private"));
    }

    #[test]
    fn mass_assignment_nothing_guarded() {
        let rules = MassAssignment::new(&[], &[]);
        assert!(rules.permits("name"));
        assert!(!rules.permits("_hidden"));
    }
}
