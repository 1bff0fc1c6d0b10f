//! Ordered assembly registries
//!
//! The resolver scans two of these: the curated registered set and the
//! set of all loaded assemblies. Enumeration order is registration order;
//! scan tie-breaks depend on it, so it is preserved.

use gantry_sdk::Assembly;
use parking_lot::RwLock;

/// Ordered list of assemblies shared by the resolver tiers
pub struct AssemblyRegistry {
    assemblies: RwLock<Vec<Assembly>>,
}

impl AssemblyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AssemblyRegistry {
            assemblies: RwLock::new(Vec::new()),
        }
    }

    /// Append an assembly, keeping registration order
    pub fn register(&self, assembly: Assembly) {
        self.assemblies.write().push(assembly);
    }

    /// Snapshot the current list for scanning without holding the lock
    pub fn snapshot(&self) -> Vec<Assembly> {
        self.assemblies.read().clone()
    }

    /// Number of registered assemblies
    pub fn len(&self) -> usize {
        self.assemblies.read().len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.assemblies.read().is_empty()
    }
}

impl Default for AssemblyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_sdk::HostTypeBuilder;

    fn assembly(name: &str) -> Assembly {
        let ty = HostTypeBuilder::new("Marker").namespace(name).build();
        Assembly::new(name, vec![ty])
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = AssemblyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let registry = AssemblyRegistry::new();
        registry.register(assembly("first"));
        registry.register(assembly("second"));
        registry.register(assembly("third"));

        let names: Vec<String> = registry
            .snapshot()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = AssemblyRegistry::new();
        registry.register(assembly("first"));

        let snapshot = registry.snapshot();
        registry.register(assembly("second"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
    }
}
