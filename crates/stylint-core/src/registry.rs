//! Process-wide rule registry.

use crate::rule::{Rule, RuleBox};
use std::collections::BTreeMap;

/// Errors raised by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A rule with the same id was already registered.
    #[error("rule '{id}' is already registered")]
    Duplicate {
        /// The conflicting rule id.
        id: String,
    },

    /// No rule with the given id is registered.
    #[error("unknown rule '{id}'")]
    Unknown {
        /// The missing rule id.
        id: String,
    },
}

/// Immutable-after-population mapping from rule id to rule.
///
/// Populated once at startup and never mutated afterwards, so concurrent
/// lint runs can share it by reference without locking. Iteration is
/// ascending by rule id, which is the evaluation order the engine relies
/// on for determinism.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<&'static str, RuleBox>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a set of rules.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if two rules share an id.
    pub fn from_rules(rules: Vec<RuleBox>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// Registers a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the id is already taken.
    pub fn register(&mut self, rule: RuleBox) -> Result<(), RegistryError> {
        let id = rule.id();
        if self.rules.contains_key(id) {
            return Err(RegistryError::Duplicate { id: id.to_string() });
        }
        self.rules.insert(id, rule);
        Ok(())
    }

    /// Looks up a rule by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] if no rule has the given id.
    pub fn get(&self, id: &str) -> Result<&dyn Rule, RegistryError> {
        self.rules
            .get(id)
            .map(AsRef::as_ref)
            .ok_or_else(|| RegistryError::Unknown { id: id.to_string() })
    }

    /// Returns `true` if a rule with the given id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over rules in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(AsRef::as_ref)
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FileContext;
    use crate::rule::RuleOptions;
    use crate::types::Violation;

    struct NamedRule(&'static str);

    impl Rule for NamedRule {
        fn id(&self) -> &'static str {
            self.0
        }
        fn code(&self) -> &'static str {
            "TEST000"
        }
        fn check(&self, _ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
            Vec::new()
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NamedRule("alpha"))).unwrap();
        assert!(registry.contains("alpha"));
        assert_eq!(registry.get("alpha").unwrap().id(), "alpha");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NamedRule("alpha"))).unwrap();
        let err = registry.register(Box::new(NamedRule("alpha"))).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { id } if id == "alpha"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = RuleRegistry::new();
        let err = registry.get("missing").err().unwrap();
        assert!(matches!(err, RegistryError::Unknown { ref id } if id == "missing"));
        assert_eq!(err.to_string(), "unknown rule 'missing'");
    }

    #[test]
    fn iteration_is_ascending_by_id() {
        let registry = RuleRegistry::from_rules(vec![
            Box::new(NamedRule("zeta")),
            Box::new(NamedRule("alpha")),
            Box::new(NamedRule("mid")),
        ])
        .unwrap();
        let ids: Vec<&str> = registry.iter().map(Rule::id).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn from_rules_propagates_duplicates() {
        let result = RuleRegistry::from_rules(vec![
            Box::new(NamedRule("dup")),
            Box::new(NamedRule("dup")),
        ]);
        assert!(result.is_err());
    }
}
