//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Symbols within a module are kept sorted and [`sorted`](Self::sorted)
/// orders modules by name.
///
/// # Example
///
/// ```
/// use typesharing_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("typing", "Union");
/// imports.add("decimal", "Decimal");
/// imports.add("typing", "Optional");
///
/// let lines: Vec<String> = imports
///     .sorted()
///     .into_iter()
///     .map(|(module, symbols)| {
///         let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
///         format!("from {} import {}", module, symbols.join(", "))
///     })
///     .collect();
/// assert_eq!(
///     lines,
///     ["from decimal import Decimal", "from typing import Optional, Union"]
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

    /// All imports with modules ordered by name.
    pub fn sorted(&self) -> Vec<(&str, &BTreeSet<String>)> {
        let mut imports: Vec<_> = self
            .imports
            .iter()
            .map(|(module, symbols)| (module.as_str(), symbols))
            .collect();
        imports.sort_by_key(|(module, _)| *module);
        imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_deduplicates() {
        let mut imports = ImportCollector::new();
        imports.add("typing", "Union");
        imports.add("typing", "Optional");
        imports.add("typing", "Union");
        imports.add("dataclasses", "dataclass");

        let sorted = imports.sorted();
        assert_eq!(sorted.len(), 2);
        let (module, symbols) = sorted[1];
        assert_eq!(module, "typing");
        assert_eq!(symbols.iter().collect::<Vec<_>>(), ["Optional", "Union"]);
    }

    #[test]
    fn test_import_collector_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("typing", "List");
        imports.add("datetime", "date");
        imports.add("dataclasses", "field");

        let modules: Vec<&str> = imports.sorted().into_iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["dataclasses", "datetime", "typing"]);
    }
}
