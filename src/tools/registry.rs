//! Tool registry with lazy name lookup
//!
//! Read-only view over a fixed set of tool definitions. The name index is
//! built on first lookup and reused for the life of the registry; filtered
//! listings and counts never touch it, so callers that only enumerate pay
//! nothing for the index.

use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, OnceLock};

use crate::error::{LedgrError, Result};

use super::catalog::BUILTIN_TOOLS;
use super::definition::{ToolDefinition, ToolGroup};

/// Process-wide registry over the built-in catalog.
///
/// Uniqueness of the compiled-in names is pinned by tests in `catalog`;
/// a duplicate slipping through is a build defect, not a runtime condition.
static BUILTIN: LazyLock<ToolRegistry> = LazyLock::new(|| {
    ToolRegistry::new(BUILTIN_TOOLS.to_vec()).expect("built-in tool catalog has duplicate names")
});

/// Immutable catalog of tool definitions with O(1) name lookup
#[derive(Debug)]
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
    // name -> position in `definitions`, built once on first `get`
    index: OnceLock<HashMap<&'static str, usize>>,
}

impl ToolRegistry {
    /// Build a registry over a fixed set of definitions.
    ///
    /// Duplicate names are a configuration error and rejected here rather
    /// than letting a later entry shadow an earlier one in the index.
    pub fn new(definitions: Vec<ToolDefinition>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if !seen.insert(def.name) {
                return Err(LedgrError::Registry(format!("duplicate tool name: {}", def.name)));
            }
        }

        Ok(Self {
            definitions,
            index: OnceLock::new(),
        })
    }

    /// The registry over the compiled-in catalog
    pub fn builtin() -> &'static ToolRegistry {
        &BUILTIN
    }

    fn index(&self) -> &HashMap<&'static str, usize> {
        self.index.get_or_init(|| {
            self.definitions
                .iter()
                .enumerate()
                .map(|(i, def)| (def.name, i))
                .collect()
        })
    }

    /// Get a tool by exact name, `None` if absent
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index().get(name).map(|&i| &self.definitions[i])
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All definitions in declaration order
    pub fn all(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Definitions in the given group, declaration order preserved
    pub fn by_group(&self, group: ToolGroup) -> Vec<&ToolDefinition> {
        self.definitions.iter().filter(|t| t.group == group).collect()
    }

    /// Non-mutating tools
    pub fn read_only(&self) -> Vec<&ToolDefinition> {
        self.definitions.iter().filter(|t| t.read_only).collect()
    }

    /// Mutating tools
    pub fn write(&self) -> Vec<&ToolDefinition> {
        self.definitions.iter().filter(|t| !t.read_only).collect()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> ToolRegistry {
        ToolRegistry::new(vec![
            ToolDefinition::read("list_invoices", ToolGroup::Invoices, "List invoices"),
            ToolDefinition::write("create_invoice", ToolGroup::Invoices, "Create an invoice"),
            ToolDefinition::read("list_bills", ToolGroup::Bills, "List bills"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_present() {
        let registry = sample_registry();
        let tool = registry.get("create_invoice").unwrap();
        assert_eq!(tool.name, "create_invoice");
        assert!(!tool.read_only);
    }

    #[test]
    fn test_get_absent() {
        let registry = sample_registry();
        assert!(registry.get("delete_invoice").is_none());
        assert!(!registry.contains("delete_invoice"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ToolRegistry::new(vec![
            ToolDefinition::read("list_invoices", ToolGroup::Invoices, "first"),
            ToolDefinition::write("list_invoices", ToolGroup::Invoices, "second"),
        ])
        .unwrap_err();

        assert!(matches!(err, LedgrError::Registry(_)));
        assert!(err.to_string().contains("list_invoices"));
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        let registry = sample_registry();
        let names: Vec<_> = registry.all().iter().map(|t| t.name).collect();
        assert_eq!(names, ["list_invoices", "create_invoice", "list_bills"]);
    }

    #[test]
    fn test_by_group() {
        let registry = sample_registry();
        let invoices = registry.by_group(ToolGroup::Invoices);
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].name, "list_invoices");
        assert_eq!(invoices[1].name, "create_invoice");

        assert!(registry.by_group(ToolGroup::Reports).is_empty());
    }

    #[test]
    fn test_read_write_partition() {
        let registry = sample_registry();
        let read_only = registry.read_only();
        let write = registry.write();

        assert_eq!(read_only.len() + write.len(), registry.len());
        for tool in read_only {
            assert!(tool.read_only);
        }
        for tool in write {
            assert!(!tool.read_only);
        }
    }

    #[test]
    fn test_len_without_lookup() {
        let registry = sample_registry();
        // count is available before any name lookup has built the index
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_filters_unaffected_by_lookup() {
        let registry = sample_registry();
        let before: Vec<_> = registry.read_only().iter().map(|t| t.name).collect();

        let _ = registry.get("list_invoices");
        let _ = registry.get("no_such_tool");

        let after: Vec<_> = registry.read_only().iter().map(|t| t.name).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_lookup_idempotent() {
        let registry = sample_registry();
        let first = registry.get("list_bills").map(|t| t.name);
        let second = registry.get("list_bills").map(|t| t.name);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("anything").is_none());
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), BUILTIN_TOOLS.len());
        assert!(registry.contains("list_invoices"));
        assert!(registry.contains("add_attachment"));
    }
}
