//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Symbols are grouped per module; rendering helpers return them sorted so
/// output is deterministic regardless of the order types were encountered.
///
/// # Example
///
/// ```
/// use crudkit_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "List");
/// imports.add("java.math", "BigDecimal");
/// imports.add("java.util", "ArrayList");
///
/// assert_eq!(
///     imports.qualified("."),
///     vec!["java.math.BigDecimal", "java.util.ArrayList", "java.util.List"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a fully qualified path, splitting on the last `separator`.
    ///
    /// Paths without a separator are ignored.
    pub fn add_qualified(&mut self, path: &str, separator: &str) {
        if let Some((module, symbol)) = path.rsplit_once(separator) {
            self.add(module, symbol);
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Drop every symbol imported from `module`.
    pub fn remove_module(&mut self, module: &str) {
        self.imports.shift_remove(module);
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fully qualified paths joined with `separator`, sorted lexicographically.
    pub fn qualified(&self, separator: &str) -> Vec<String> {
        let paths: BTreeSet<String> = self
            .imports
            .iter()
            .flat_map(|(module, symbols)| {
                symbols
                    .iter()
                    .map(move |symbol| format!("{}{}{}", module, separator, symbol))
            })
            .collect();
        paths.into_iter().collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.values().all(BTreeSet::is_empty)
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add("java.util", "ArrayList");
        imports.add("java.time", "LocalDate");

        assert!(imports.has_module("java.util"));
        assert!(imports.has_symbol("java.util", "List"));
        assert!(!imports.has_symbol("java.util", "Map"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_add_qualified() {
        let mut imports = ImportCollector::new();
        imports.add_qualified("com.acme.entity.Book", ".");
        imports.add_qualified("Book", ".");

        assert!(imports.has_symbol("com.acme.entity", "Book"));
        assert_eq!(imports.qualified("."), vec!["com.acme.entity.Book"]);
    }

    #[test]
    fn test_import_collector_merge_and_remove() {
        let mut a = ImportCollector::new();
        a.add("java.util", "List");

        let mut b = ImportCollector::new();
        b.add("java.util", "Set");
        b.add("com.acme.dto", "BookDto");

        a.merge(&b);
        assert!(a.has_symbol("java.util", "List"));
        assert!(a.has_symbol("java.util", "Set"));

        a.remove_module("com.acme.dto");
        assert!(!a.has_module("com.acme.dto"));
        assert_eq!(a.qualified("."), vec!["java.util.List", "java.util.Set"]);
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert!(imports.qualified(".").is_empty());
    }
}
