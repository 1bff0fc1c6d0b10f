//! Proxy classes
//!
//! Guest-side class objects standing for host types. Construction,
//! subscript specialization, and indexer access all route through a
//! [`ProxyClass`] interned by the [`ClassRegistry`].

use std::fmt;

use gantry_sdk::{HostCtor, HostType};

mod indexer;
mod interface;
mod registry;
mod subscript;

pub use indexer::IndexerBinding;
pub use interface::construct;
pub use registry::ClassRegistry;
pub use subscript::{bind_generic_class, type_subscript};

/// Guest-side class object for one host type
pub struct ProxyClass {
    ty: HostType,
    ctor: Option<HostCtor>,
    indexer: Option<IndexerBinding>,
}

impl ProxyClass {
    /// Bind a host type: interfaces take their companion's default
    /// constructor, concrete types their own.
    fn new(ty: &HostType) -> Self {
        let ctor = match ty.companion() {
            Some(companion) => companion.constructor().cloned(),
            None => ty.constructor().cloned(),
        };
        let indexer = ty.indexer().map(IndexerBinding::new);
        ProxyClass {
            ty: ty.clone(),
            ctor,
            indexer,
        }
    }

    /// The projected host type
    pub fn host_type(&self) -> &HostType {
        &self.ty
    }

    /// Simple type name
    pub fn name(&self) -> &str {
        self.ty.name()
    }

    /// Default constructor used for zero-argument construction
    pub fn companion_ctor(&self) -> Option<&HostCtor> {
        self.ctor.as_ref()
    }

    /// Indexer binding, if the type declares one
    pub fn indexer(&self) -> Option<&IndexerBinding> {
        self.indexer.as_ref()
    }
}

impl fmt::Debug for ProxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyClass")
            .field("type", &self.ty.qualified_name())
            .field("constructible", &self.ctor.is_some())
            .field("indexed", &self.indexer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_sdk::{HostInstance, HostObject, HostTypeBuilder};

    struct Blank {
        ty: HostType,
    }

    impl HostObject for Blank {
        fn runtime_type(&self) -> HostType {
            self.ty.clone()
        }
    }

    #[test]
    fn test_interface_takes_companion_constructor() {
        let concrete = HostTypeBuilder::new("StreamClass")
            .namespace("Acme")
            .constructor(|| {
                Some(HostInstance::new(Blank {
                    ty: HostTypeBuilder::new("StreamClass").namespace("Acme").build(),
                }))
            })
            .build();
        let interface = HostTypeBuilder::new("IStream")
            .namespace("Acme")
            .interface()
            .companion(&concrete)
            .build();

        let class = ProxyClass::new(&interface);
        assert!(class.companion_ctor().is_some());
        assert_eq!(class.name(), "IStream");
    }

    #[test]
    fn test_companionless_type_has_no_constructor() {
        let interface = HostTypeBuilder::new("IStream")
            .namespace("Acme")
            .interface()
            .build();
        assert!(ProxyClass::new(&interface).companion_ctor().is_none());
    }
}
