// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_inspect::Record;

#[derive(Record)]
#[record(fillable(email))]
pub struct User {
    pub id:    Option<i64>,
    pub email: Option<String>
}

fn main() {}
