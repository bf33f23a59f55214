//! The event catalog: declared argument contracts.
//!
//! The catalog is the leaf component of the registry. It holds one
//! [`EventSpec`] per declared event name and performs all declaration-time
//! validation; it knows nothing about handlers.

use std::collections::{BTreeSet, HashMap};
use tannoy_core::{DispatchError, ident};

/// The declared contract for one event name.
///
/// Holds the ordered list of argument names every occurrence of the event
/// must carry and every handler of it must accept. Immutable once declared;
/// re-declaring the same name is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSpec {
    name: String,
    arguments: Vec<String>,
}

impl EventSpec {
    /// The event name this contract belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared argument names, in declaration order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Whether `names` equals the declared argument names as a set.
    ///
    /// Order is irrelevant on both sides: handlers bind arguments by name,
    /// never by position.
    pub fn matches<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let declared: BTreeSet<&str> = self.arguments.iter().map(String::as_str).collect();
        let supplied: BTreeSet<&str> = names.into_iter().collect();
        declared == supplied
    }

    /// Build the mismatch error for a supplied name set that failed
    /// [`matches`](Self::matches). Both sides come out sorted and deduped.
    pub(crate) fn mismatch_error<'a, I>(&self, actual: I) -> DispatchError
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected: BTreeSet<&str> = self.arguments.iter().map(String::as_str).collect();
        let actual: BTreeSet<&str> = actual.into_iter().collect();
        DispatchError::ArgumentMismatch {
            event: self.name.clone(),
            expected: expected.into_iter().map(str::to_owned).collect(),
            actual: actual.into_iter().map(str::to_owned).collect(),
        }
    }
}

/// Event name → declared contract.
#[derive(Debug, Default)]
pub struct Catalog {
    specs: HashMap<String, EventSpec>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `event` with its required argument names.
    ///
    /// Fails with [`DispatchError::DuplicateEvent`] when the name already
    /// has a contract, and with [`DispatchError::InvalidArgumentName`] when
    /// an argument name fails identifier validation. On failure no state is
    /// retained; the event remains undeclared.
    pub fn declare(&mut self, event: &str, arguments: &[&str]) -> Result<(), DispatchError> {
        if self.specs.contains_key(event) {
            return Err(DispatchError::DuplicateEvent(event.to_owned()));
        }
        for argument in arguments {
            ident::validate(argument)?;
        }
        self.specs.insert(
            event.to_owned(),
            EventSpec {
                name: event.to_owned(),
                arguments: arguments.iter().map(|a| (*a).to_owned()).collect(),
            },
        );
        Ok(())
    }

    /// The contract declared for `event`, if any.
    pub fn get(&self, event: &str) -> Option<&EventSpec> {
        self.specs.get(event)
    }

    /// Whether `event` has a declared contract.
    pub fn contains(&self, event: &str) -> bool {
        self.specs.contains_key(event)
    }

    /// Number of declared events.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Drop every declaration.
    pub fn clear(&mut self) {
        self.specs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use tannoy_core::DispatchError;

    #[test]
    fn test_declare_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.declare("privmsg", &["connection", "user"]).unwrap();
        let spec = catalog.get("privmsg").unwrap();
        assert_eq!(spec.name(), "privmsg");
        assert_eq!(spec.arguments(), ["connection", "user"]);
    }

    #[test]
    fn test_redeclare_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.declare("join", &[]).unwrap();
        let result = catalog.declare("join", &["channel"]);
        assert!(matches!(result, Err(DispatchError::DuplicateEvent(_))));
        // The original declaration is untouched.
        assert!(catalog.get("join").unwrap().arguments().is_empty());
    }

    #[test]
    fn test_invalid_argument_leaves_no_state() {
        let mut catalog = Catalog::new();
        let result = catalog.declare("privmsg", &["user", "match"]);
        assert!(matches!(
            result,
            Err(DispatchError::InvalidArgumentName(name)) if name == "match"
        ));
        assert!(!catalog.contains("privmsg"));
        // A later declaration of the same name is not shadowed by the failure.
        catalog.declare("privmsg", &["user"]).unwrap();
    }

    #[test]
    fn test_matches_ignores_order() {
        let mut catalog = Catalog::new();
        catalog.declare("privmsg", &["user", "target"]).unwrap();
        let spec = catalog.get("privmsg").unwrap();
        assert!(spec.matches(["target", "user"]));
        assert!(!spec.matches(["user"]));
        assert!(!spec.matches(["user", "target", "extra"]));
    }
}
