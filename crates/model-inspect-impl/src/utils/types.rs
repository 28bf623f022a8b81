// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type label rendering.
//!
//! `quote!` spaces every token (`Option < String >`); labels reported in
//! method catalogs read the way the type was written (`Option<String>`).

use quote::ToTokens;
use syn::Type;

/// Render `ty` as a compact label.
pub fn render(ty: &Type) -> String {
    compact(&ty.to_token_stream().to_string())
}

/// Drop whitespace except between two word characters.
///
/// `& 'a mut dyn Fn (u8) -> bool` becomes `&'a mut dyn Fn(u8)->bool`.
pub fn compact(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        let before = out.chars().last();
        let after = chars[i + 1..].iter().find(|c| !c.is_whitespace());
        if let (Some(b), Some(a)) = (before, after)
            && is_word(b)
            && is_word(*a)
        {
            out.push(' ');
        }
    }
    out
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn generic_paths() {
        let ty: Type = parse_quote!(Option<Vec<String>>);
        assert_eq!(render(&ty), "Option<Vec<String>>");
    }

    #[test]
    fn references_and_lifetimes() {
        let ty: Type = parse_quote!(&'a mut str);
        assert_eq!(render(&ty), "&'a mut str");
    }

    #[test]
    fn qualified_path() {
        let ty: Type = parse_quote!(::model_inspect::Attribute);
        assert_eq!(render(&ty), "::model_inspect::Attribute");
    }

    #[test]
    fn trait_objects() {
        let ty: Type = parse_quote!(Box<dyn Fn(u8) -> bool + Send>);
        assert_eq!(render(&ty), "Box<dyn Fn(u8)->bool+Send>");
    }
}
