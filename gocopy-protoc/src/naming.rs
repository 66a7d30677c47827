//! Go name conflict resolution within a generated message struct.

use std::collections::HashMap;

/// Method names every generated message already declares.
const RESERVED_METHODS: &[&str] = &[
    "Reset",
    "String",
    "ProtoMessage",
    "Marshal",
    "Unmarshal",
    "ExtensionRangeArray",
    "ExtensionMap",
    "Descriptor",
];

/// Tracks the struct field and method names used by one message.
///
/// The value records whether the name is taken; `Get<Name>` entries are
/// recorded as taken only for names that have a getter.
#[derive(Debug)]
pub(crate) struct MessageNames {
    used: HashMap<String, bool>,
}

impl MessageNames {
    pub(crate) fn new() -> Self {
        Self {
            used: RESERVED_METHODS
                .iter()
                .map(|name| (name.to_string(), true))
                .collect(),
        }
    }

    /// Make `name` unique by appending `_`, then claim it (and its getter).
    pub(crate) fn claim(&mut self, name: String, has_getter: bool) -> String {
        let mut name = name;
        while self.is_used(&name) || (has_getter && self.is_used(&format!("Get{}", name))) {
            name.push('_');
        }
        self.used.insert(name.clone(), true);
        self.used.insert(format!("Get{}", name), has_getter);
        name
    }

    fn is_used(&self, name: &str) -> bool {
        self.used.get(name).copied().unwrap_or(false)
    }
}
