//! Guest alias tokens for host types
//!
//! Subscript expressions may name an element type by a short guest token
//! (`"int"`, `"str"`, ...) instead of a projected type object. This table
//! resolves those tokens.

use gantry_sdk::HostType;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Alias token to host type table
pub struct AliasTable {
    aliases: RwLock<FxHashMap<String, HostType>>,
}

impl AliasTable {
    /// Create an empty table
    pub fn new() -> Self {
        AliasTable {
            aliases: RwLock::new(FxHashMap::default()),
        }
    }

    /// Register an alias token
    pub fn register(&self, token: &str, ty: &HostType) {
        self.aliases.write().insert(token.to_string(), ty.clone());
    }

    /// Resolve an alias token
    pub fn resolve(&self, token: &str) -> Option<HostType> {
        self.aliases.read().get(token).cloned()
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.aliases.read().len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.aliases.read().is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_sdk::HostTypeBuilder;

    #[test]
    fn test_register_and_resolve() {
        let table = AliasTable::new();
        let int64 = HostTypeBuilder::new("Int64").namespace("Host").build();

        table.register("int", &int64);
        assert_eq!(table.resolve("int").unwrap(), int64);
        assert!(table.resolve("float").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let table = AliasTable::new();
        let first = HostTypeBuilder::new("First").build();
        let second = HostTypeBuilder::new("Second").build();

        table.register("t", &first);
        table.register("t", &second);
        assert_eq!(table.resolve("t").unwrap(), second);
        assert_eq!(table.len(), 1);
    }
}
