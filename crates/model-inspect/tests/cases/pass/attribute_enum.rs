// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(AttributeEnum)]` backing values.

use model_inspect::{AttributeEnum, ToAttributeValue, Value};

#[derive(Clone, Copy, AttributeEnum)]
pub enum Priority {
    Low = 1,
    High = 10
}

#[derive(AttributeEnum)]
pub enum Status {
    #[attribute(value = "active")]
    Active,
    Draft
}

fn main() {
    let high = Priority::High.to_attribute_value().map(|v| v.into_scalar());
    assert_eq!(high, Some(Value::Int(10)));

    let active = Status::Active.to_attribute_value().map(|v| v.into_scalar());
    assert_eq!(active, Some(Value::Text("active".into())));

    let draft = Status::Draft.to_attribute_value().map(|v| v.into_scalar());
    assert_eq!(draft, Some(Value::Text("Draft".into())));
}
