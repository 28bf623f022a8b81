// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal `#[derive(Record)]` with only a table name.

use model_inspect::Record;

#[derive(Default, Record)]
#[record(table = "posts")]
pub struct Post {
    pub id:    Option<i64>,
    pub title: Option<String>
}

fn main() {
    let post = Post::default();
    assert_eq!(post.table(), "posts");
    assert!(!post.is_mass_assignable("title"));
    assert!(post.attribute_value("title").is_none());
    assert!(post.methods().is_empty());
}
