// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic records forward their bounds.

use model_inspect::{Record, ToAttributeValue};

#[derive(Record)]
#[record(table = "settings", unguarded)]
pub struct Setting<T: ToAttributeValue> {
    pub key:   String,
    pub value: T
}

fn main() {
    let setting = Setting {
        key:   "theme".to_string(),
        value: 3_i64
    };
    assert!(setting.is_mass_assignable("anything"));
    assert!(setting.attribute_value("value").is_some());
}
