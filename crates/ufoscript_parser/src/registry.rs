//! Scoped registry of sub-parser factories.

use std::collections::HashMap;

use ufoscript_foundation::{Error, Result};

use crate::factory::{MatchMode, SubParserFactory};

/// Factories registered in one scope.
///
/// Exact identifiers are looked up first; identifiers registered with
/// [`MatchMode::IdName`] are then tried case-insensitively. Registering an
/// identifier twice is an error, and so is an `IdName` registration that
/// differs from an existing identifier only in case.
#[derive(Clone, Debug, Default)]
pub struct SubParserRegistry {
    /// Node type owning this registry, used in error messages.
    scope: String,
    /// Factories in registration order.
    factories: Vec<SubParserFactory>,
    /// Index by exact identifier.
    exact: HashMap<&'static str, usize>,
    /// Index by lowercased identifier, `IdName` factories only.
    id_names: HashMap<String, usize>,
}

impl SubParserRegistry {
    /// Creates an empty registry for `scope`.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            ..Self::default()
        }
    }

    /// Returns the scope name.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Registers a factory.
    ///
    /// # Errors
    ///
    /// Returns a duplicate registration error if the identifier is already
    /// taken in this scope.
    pub fn register(&mut self, factory: SubParserFactory) -> Result<()> {
        let id = factory.id();
        let folded = id.to_lowercase();
        let clash = self.exact.contains_key(id)
            || self.id_names.contains_key(&folded)
            || (factory.match_mode() == MatchMode::IdName
                && self.factories.iter().any(|f| f.id().to_lowercase() == folded));
        if clash {
            return Err(Error::duplicate_registration(id, self.scope.clone()));
        }

        let index = self.factories.len();
        self.factories.push(factory);
        self.exact.insert(id, index);
        if factory.is_id_name() {
            self.id_names.insert(folded, index);
        }
        Ok(())
    }

    /// Registers every factory in `factories`, stopping at the first conflict.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate registration error.
    pub fn register_all(&mut self, factories: &[SubParserFactory]) -> Result<()> {
        factories.iter().try_for_each(|f| self.register(*f))
    }

    /// Finds the factory selected by `token`.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&SubParserFactory> {
        if let Some(&index) = self.exact.get(token) {
            return self.factories.get(index);
        }
        if self.id_names.is_empty() {
            return None;
        }
        self.id_names
            .get(&token.to_lowercase())
            .and_then(|&index| self.factories.get(index))
    }

    /// Returns true if `token` resolves in this scope.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Iterates over the registered identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.iter().map(SubParserFactory::id)
    }

    /// Iterates over the registered factories in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SubParserFactory> {
        self.factories.iter()
    }
}
