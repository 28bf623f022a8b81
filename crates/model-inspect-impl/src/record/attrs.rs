// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[record(...)]` parsing with darling.
//!
//! # Record-Level Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | Yes | | Backing table name |
//! | `fillable(..)` | No | empty | Mass-assignable attributes |
//! | `guarded(..)` | No | `*` | Protected attributes |
//! | `unguarded` | No | `false` | Disable mass-assignment protection |
//! | `hidden(..)` | No | empty | Hidden attributes |
//! | `visible(..)` | No | empty | Exclusively visible attributes |
//! | `appends(..)` | No | empty | Appended virtual attributes |
//! | `dates(..)` | No | empty | Legacy date attributes |
//! | `methods` | No | `false` | Read `Self::record_methods()` |
//!
//! # Field-Level Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `cast = "..."` | Cast rule for this attribute |
//! | `rename = "..."` | Attribute name when it differs from the field |
//! | `hidden` / `visible` | Join the record's visibility lists |
//! | `fillable` / `guarded` | Join the record's mass-assignment lists |
//! | `skip` | Not an attribute; no value is reported |

use darling::{FromDeriveInput, FromField, ast::Data, util::PathList};
use syn::{Generics, Ident, Path, ext::IdentExt};

/// Parsed `#[derive(Record)]` input.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the generated impl.
    pub generics: Generics,

    /// Named fields.
    pub data: Data<(), FieldAttrs>,

    /// Backing table name.
    pub table: String,

    #[darling(default)]
    pub fillable: PathList,

    /// `None` leaves the default of guarding everything.
    #[darling(default)]
    pub guarded: Option<PathList>,

    #[darling(default)]
    pub unguarded: bool,

    #[darling(default)]
    pub hidden: PathList,

    #[darling(default)]
    pub visible: PathList,

    #[darling(default)]
    pub appends: PathList,

    #[darling(default)]
    pub dates: PathList,

    /// Feed `Self::record_methods()` into `Record::methods`.
    #[darling(default)]
    pub methods: bool
}

/// Parsed field with its `#[record(...)]` options.
#[derive(Debug, FromField)]
#[darling(attributes(record))]
pub struct FieldAttrs {
    pub ident: Option<Ident>,

    #[darling(default)]
    pub cast: Option<String>,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub hidden: bool,

    #[darling(default)]
    pub visible: bool,

    #[darling(default)]
    pub fillable: bool,

    #[darling(default)]
    pub guarded: bool,

    #[darling(default)]
    pub skip: bool
}

impl FieldAttrs {
    /// Attribute name: `rename` or the unraw field identifier.
    pub fn attribute_name(&self) -> Option<String> {
        self.rename
            .clone()
            .or_else(|| self.ident.as_ref().map(|ident| ident.unraw().to_string()))
    }
}

impl RecordAttrs {
    /// Fields in declaration order.
    pub fn fields(&self) -> Vec<&FieldAttrs> {
        match &self.data {
            Data::Struct(fields) => fields.iter().collect(),
            Data::Enum(_) => Vec::new()
        }
    }

    /// Names gathered from a record-level list plus flagged fields.
    fn collect(&self, list: &[Path], flag: impl Fn(&FieldAttrs) -> bool) -> Vec<String> {
        let mut names: Vec<String> = list.iter().map(path_name).collect();
        for field in self.fields() {
            if flag(field)
                && let Some(name) = field.attribute_name()
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }

    pub fn fillable_names(&self) -> Vec<String> {
        self.collect(&self.fillable, |f| f.fillable)
    }

    /// Guarded names, or `["*"]` when neither the record nor any field
    /// declares guarded attributes.
    pub fn guarded_names(&self) -> Vec<String> {
        let declared = self.guarded.as_ref().map(|list| list.to_vec()).unwrap_or_default();
        let names = self.collect(&declared, |f| f.guarded);
        if names.is_empty() && self.guarded.is_none() {
            return vec!["*".to_string()];
        }
        names
    }

    pub fn hidden_names(&self) -> Vec<String> {
        self.collect(&self.hidden, |f| f.hidden)
    }

    pub fn visible_names(&self) -> Vec<String> {
        self.collect(&self.visible, |f| f.visible)
    }

    pub fn appended_names(&self) -> Vec<String> {
        self.appends.iter().map(path_name).collect()
    }

    pub fn date_names(&self) -> Vec<String> {
        self.dates.iter().map(path_name).collect()
    }

    /// `(attribute, cast)` pairs from field `cast` options. Skipped fields
    /// contribute none.
    pub fn casts(&self) -> Vec<(String, String)> {
        self.fields()
            .into_iter()
            .filter(|field| !field.skip)
            .filter_map(|field| Some((field.attribute_name()?, field.cast.clone()?)))
            .collect()
    }
}

/// Last segment of `path` as an attribute name.
fn path_name(path: &Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.unraw().to_string())
        .unwrap_or_default()
}
