// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Every record-level and field-level option together.

use model_inspect::{AttributeValue, Record, Value, record_methods};

#[derive(Default, Record)]
#[record(
    table = "users",
    fillable(name),
    guarded(is_admin),
    hidden(token),
    visible(name, email),
    appends(full_name),
    dates(verified_at),
    methods
)]
pub struct User {
    pub id:          Option<i64>,
    pub name:        Option<String>,
    #[record(fillable, visible)]
    pub email:       Option<String>,
    #[record(hidden, guarded)]
    pub password:    Option<String>,
    pub token:       Option<String>,
    #[record(cast = "bool")]
    pub is_admin:    Option<bool>,
    #[record(rename = "type")]
    pub kind:        Option<String>,
    pub verified_at: Option<String>,
    #[record(skip)]
    pub scratch:     Vec<u8>
}

#[record_methods]
impl User {
    pub fn get_full_name_attribute(&self) -> String {
        String::new()
    }
}

fn main() {
    let user = User {
        kind: Some("admin".into()),
        ..User::default()
    };

    assert!(user.is_mass_assignable("email"));
    assert!(!user.is_mass_assignable("password"));
    assert_eq!(user.hidden(), ["token", "password"]);
    assert_eq!(user.casts(), [("is_admin".to_string(), "bool".to_string())]);
    assert_eq!(user.dates(), ["verified_at"]);
    assert!(user.is_appended("full_name"));
    assert_eq!(user.methods().len(), 1);
    assert_eq!(
        user.attribute_value("type"),
        Some(AttributeValue::Raw(Value::Text("admin".into())))
    );
}
