//! Identity activation table
//!
//! Mirrors the host runtime's ability to materialize a type directly from
//! its identity without scanning assemblies. The resolver consults it as
//! the tier after both assembly scans.

use dashmap::DashMap;
use gantry_sdk::{HostType, TypeIdentity};

/// Identity-to-type activation table
pub struct ActivationTable {
    entries: DashMap<TypeIdentity, HostType>,
}

impl ActivationTable {
    /// Create an empty table
    pub fn new() -> Self {
        ActivationTable {
            entries: DashMap::new(),
        }
    }

    /// Register a type under its own declared identity.
    ///
    /// Types without an identity are ignored.
    pub fn register(&self, ty: &HostType) {
        if let Some(identity) = ty.identity() {
            self.entries.insert(identity, ty.clone());
        }
    }

    /// Register a type under an explicit identity
    pub fn register_identity(&self, identity: TypeIdentity, ty: &HostType) {
        self.entries.insert(identity, ty.clone());
    }

    /// Look up the type activated for `identity`
    pub fn get(&self, identity: TypeIdentity) -> Option<HostType> {
        self.entries.get(&identity).map(|entry| entry.clone())
    }

    /// Number of activation entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivationTable {
    fn default() -> Self {
        Self::new()
    }
}
