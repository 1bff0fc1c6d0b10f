//! Proxy class interning
//!
//! One proxy class per qualified type name for the life of the registry,
//! so repeated projections of the same host type share a single binding.

use std::sync::Arc;

use dashmap::DashMap;
use gantry_sdk::{HostInstance, HostType, ProxyHandle};

use crate::class::ProxyClass;

/// Interning table from qualified type names to proxy classes
pub struct ClassRegistry {
    classes: DashMap<String, Arc<ProxyClass>>,
}

impl ClassRegistry {
    /// Empty registry
    pub fn new() -> Self {
        ClassRegistry {
            classes: DashMap::new(),
        }
    }

    /// The proxy class for `ty`, creating and interning it on first use
    pub fn class_for(&self, ty: &HostType) -> Arc<ProxyClass> {
        if let Some(class) = self.classes.get(ty.qualified_name()) {
            return class.clone();
        }
        self.classes
            .entry(ty.qualified_name().to_string())
            .or_insert_with(|| Arc::new(ProxyClass::new(ty)))
            .clone()
    }

    /// Wrap a host instance in a proxy projected as `ty`.
    ///
    /// Ensures the class exists so later member access finds it interned.
    pub fn instance_handle(&self, instance: HostInstance, ty: &HostType) -> ProxyHandle {
        self.class_for(ty);
        ProxyHandle::new(instance, ty.clone())
    }

    /// Number of interned classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class has been interned yet
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_sdk::{HostObject, HostTypeBuilder};

    struct Blank {
        ty: HostType,
    }

    impl HostObject for Blank {
        fn runtime_type(&self) -> HostType {
            self.ty.clone()
        }
    }

    #[test]
    fn test_class_for_interns() {
        let registry = ClassRegistry::new();
        let ty = HostTypeBuilder::new("IStream").namespace("Acme").interface().build();

        let first = registry.class_for(&ty);
        let second = registry.class_for(&ty);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_instance_handle_projects_requested_type() {
        let registry = ClassRegistry::new();
        let concrete = HostTypeBuilder::new("Stream").namespace("Acme").build();
        let interface = HostTypeBuilder::new("IStream").namespace("Acme").interface().build();
        let instance = HostInstance::new(Blank { ty: concrete });

        let handle = registry.instance_handle(instance, &interface);

        assert_eq!(handle.projected_type(), &interface);
        assert!(!registry.is_empty());
    }
}
