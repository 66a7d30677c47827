//! Import collection with local name allocation.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Tracks imported packages and the local name each one is referenced by.
///
/// Local names are unique within the collector and never equal a reserved
/// name; a clash is resolved by appending the smallest free numeric suffix.
/// Maintains insertion order, with [`ImportCollector::sorted`] for
/// deterministic rendering.
///
/// # Example
///
/// ```
/// use gocopy_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new().with_reserved(["x", "v"]);
/// assert_eq!(imports.add("example.com/a/foo", "foo"), "foo");
/// assert_eq!(imports.add("example.com/b/foo", "foo"), "foo1");
/// assert_eq!(imports.add("example.com/v", "v"), "v1");
/// assert_eq!(imports.add("example.com/a/foo", "ignored"), "foo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Names that may never be used as a local name.
    reserved: HashSet<String>,
    /// Import path -> local name
    imports: IndexMap<String, String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve names that imports must not shadow.
    pub fn with_reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an import, returning its local name.
    ///
    /// `preferred` is only consulted the first time `path` is added.
    pub fn add(&mut self, path: &str, preferred: &str) -> &str {
        if !self.imports.contains_key(path) {
            let name = self.allocate(preferred);
            self.imports.insert(path.to_string(), name);
        }
        &self.imports[path]
    }

    /// Iterate over `(path, name)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get `(path, name)` pairs sorted by path.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut imports: Vec<_> = self.iter().collect();
        imports.sort_by_key(|(path, _)| *path);
        imports
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    fn allocate(&self, preferred: &str) -> String {
        let taken = |name: &str| {
            self.reserved.contains(name) || self.imports.values().any(|n| n == name)
        };

        if !taken(preferred) {
            return preferred.to_string();
        }
        (1..)
            .map(|i| format!("{}{}", preferred, i))
            .find(|name| !taken(name))
            .unwrap_or_else(|| preferred.to_string())
    }
}
