// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_inspect::Record;

#[derive(Record)]
#[record(table = "items")]
pub struct Item(i64, String);

fn main() {}
