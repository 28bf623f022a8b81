// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record identifiers.
//!
//! Maps identifiers such as `"User"` or `"app::models::User"` to factories
//! producing a default instance, so tooling can inspect a record by name.

use crate::record::Record;

type Factory = Box<dyn Fn() -> Box<dyn Record> + Send + Sync>;

/// Identifier → default instance factory.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{Record, Registry};
///
/// #[derive(Default)]
/// struct User;
///
/// impl Record for User {
///     fn table(&self) -> &str {
///         "users"
///     }
///
///     fn is_mass_assignable(&self, _attribute: &str) -> bool {
///         false
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<User>("app::models::User");
///
/// assert!(registry.resolve("app::models::User").is_some());
/// assert!(registry.resolve("user").is_some());
/// assert!(registry.resolve("Post").is_none());
/// ```
#[derive(Default)]
pub struct Registry {
    entries: Vec<(String, Factory)>
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `R` under `identifier`, built through `Default`.
    pub fn register<R>(&mut self, identifier: impl Into<String>) -> &mut Self
    where
        R: Record + Default + 'static
    {
        self.register_with(identifier, || Box::new(R::default()) as Box<dyn Record>)
    }

    /// Register a custom factory under `identifier`.
    pub fn register_with<F>(&mut self, identifier: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Record> + Send + Sync + 'static
    {
        self.entries.push((identifier.into(), Box::new(factory)));
        self
    }

    /// Registered identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Resolve `identifier` to a fresh default instance.
    ///
    /// Exact identifiers win; otherwise the last `::` segment of each
    /// registered identifier is compared case-insensitively, first
    /// registration first.
    pub fn resolve(&self, identifier: &str) -> Option<Box<dyn Record>> {
        let identifier = identifier.trim();

        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(id, _)| short_name(id).eq_ignore_ascii_case(short_name(identifier)))
            })
            .map(|(_, factory)| factory())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("identifiers", &self.identifiers().collect::<Vec<_>>())
            .finish()
    }
}

fn short_name(identifier: &str) -> &str {
    identifier.rsplit("::").next().unwrap_or(identifier)
}
