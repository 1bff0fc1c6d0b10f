//! Aggregated host-side environment
//!
//! Bundles the collaborator registries the engine consumes: the two
//! assembly sets, the activation table, the alias table, and a table of
//! standalone types (builtins, generic definitions registered directly).
//! Embedders populate it; the engine only reads.

use dashmap::DashMap;
use gantry_sdk::{Assembly, HostType, TypeIdentity};

use crate::host::activation::ActivationTable;
use crate::host::alias::AliasTable;
use crate::host::assembly::AssemblyRegistry;
use crate::host::builtins;

/// Everything the resolver and class machinery consume from the host
pub struct HostEnvironment {
    registered: AssemblyRegistry,
    loaded: AssemblyRegistry,
    activation: ActivationTable,
    aliases: AliasTable,
    /// Types registered outside any assembly, keyed by qualified name
    standalone: DashMap<String, HostType>,
}

impl HostEnvironment {
    /// Create an environment with the builtin prelude installed
    pub fn new() -> Self {
        let env = HostEnvironment {
            registered: AssemblyRegistry::new(),
            loaded: AssemblyRegistry::new(),
            activation: ActivationTable::new(),
            aliases: AliasTable::new(),
            standalone: DashMap::new(),
        };
        for ty in builtins::builtin_types() {
            env.register_type(&ty);
        }
        for (token, ty) in builtins::standard_aliases() {
            env.aliases.register(token, &ty);
        }
        env
    }

    /// The curated registered assembly set (resolver tier 2)
    pub fn registered_assemblies(&self) -> &AssemblyRegistry {
        &self.registered
    }

    /// All loaded assemblies (resolver tier 3)
    pub fn loaded_assemblies(&self) -> &AssemblyRegistry {
        &self.loaded
    }

    /// The identity activation table (resolver tier 4)
    pub fn activation(&self) -> &ActivationTable {
        &self.activation
    }

    /// The guest alias table
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Add an assembly to the curated set.
    ///
    /// Registered assemblies are also loaded, so the broader scan sees
    /// them too.
    pub fn register_assembly(&self, assembly: &Assembly) {
        self.registered.register(assembly.clone());
        self.loaded.register(assembly.clone());
    }

    /// Add an assembly to the loaded set only
    pub fn load_assembly(&self, assembly: &Assembly) {
        self.loaded.register(assembly.clone());
    }

    /// Register a standalone type under its qualified name
    pub fn register_type(&self, ty: &HostType) {
        self.standalone
            .insert(ty.qualified_name().to_string(), ty.clone());
    }

    /// Find a type by qualified name.
    ///
    /// Standalone types shadow assembly exports; assemblies are searched
    /// in registration order, registered set first.
    pub fn lookup_qualified(&self, qualified: &str) -> Option<HostType> {
        if let Some(ty) = self.standalone.get(qualified) {
            return Some(ty.clone());
        }
        for assembly in self.registered.snapshot() {
            if let Some(ty) = assembly.find_type(qualified) {
                return Some(ty.clone());
            }
        }
        for assembly in self.loaded.snapshot() {
            if let Some(ty) = assembly.find_type(qualified) {
                return Some(ty.clone());
            }
        }
        None
    }

    /// Resolve a guest alias token
    pub fn alias_type(&self, token: &str) -> Option<HostType> {
        self.aliases.resolve(token)
    }

    /// Identity lookup against the activation table
    pub fn activate(&self, identity: TypeIdentity) -> Option<HostType> {
        self.activation.get(identity)
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
