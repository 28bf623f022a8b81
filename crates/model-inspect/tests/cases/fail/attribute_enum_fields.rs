// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use model_inspect::AttributeEnum;

#[derive(AttributeEnum)]
pub enum Shape {
    Circle(f64),
    Square
}

fn main() {}
