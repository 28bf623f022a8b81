// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hidden/visible resolution.
//!
//! | hidden | visible | attribute is hidden when |
//! |--------|---------|--------------------------|
//! | non-empty | any | listed in hidden |
//! | empty | non-empty | not listed in visible |
//! | empty | empty | never |
//!
//! The visible list is ignored whenever the hidden list is non-empty.

/// Hidden and visible lists of a record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    hidden:  Vec<String>,
    visible: Vec<String>
}

impl Visibility {
    /// Create from the record's hidden and visible lists.
    #[must_use]
    pub fn new(hidden: Vec<String>, visible: Vec<String>) -> Self {
        Self {
            hidden,
            visible
        }
    }

    /// Check if `name` is suppressed from default representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_inspect_core::Visibility;
    ///
    /// let visibility = Visibility::new(vec![], vec!["name".into()]);
    /// assert!(!visibility.is_hidden("name"));
    /// assert!(visibility.is_hidden("password"));
    /// ```
    pub fn is_hidden(&self, name: &str) -> bool {
        if !self.hidden.is_empty() {
            return self.hidden.iter().any(|h| h == name);
        }

        if !self.visible.is_empty() {
            return !self.visible.iter().any(|v| v == name);
        }

        false
    }
}
