// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_inspect::Record;

#[derive(Record)]
#[record(table = "statuses")]
pub enum Status {
    Active,
    Inactive
}

fn main() {}
