//! Opaque host instance handles

use std::fmt;
use std::sync::Arc;

use crate::dispatch::LateBound;
use crate::metadata::HostType;

/// A live host object surfaced to the engine.
///
/// Integrations implement this once per host object they expose. The
/// late-binding capability is an explicit query; the default answer is
/// "not supported", which the engine treats as a normal condition.
pub trait HostObject: Send + Sync {
    /// Reflected runtime type of the object
    fn runtime_type(&self) -> HostType;

    /// Late-binding capability of the object, if it has one
    fn as_late_bound(&self) -> Option<&dyn LateBound> {
        None
    }
}

/// Shared handle to a host object.
///
/// Cloning shares the same underlying object; the host-side owning
/// reference is released when the last handle drops.
#[derive(Clone)]
pub struct HostInstance {
    object: Arc<dyn HostObject>,
}

impl HostInstance {
    /// Wrap a host object
    pub fn new(object: impl HostObject + 'static) -> Self {
        HostInstance {
            object: Arc::new(object),
        }
    }

    /// Wrap an already shared host object
    pub fn from_arc(object: Arc<dyn HostObject>) -> Self {
        HostInstance { object }
    }

    /// Reflected runtime type of the object
    pub fn runtime_type(&self) -> HostType {
        self.object.runtime_type()
    }

    /// Late-binding capability of the object, if it has one
    pub fn as_late_bound(&self) -> Option<&dyn LateBound> {
        self.object.as_late_bound()
    }

    /// Whether two handles refer to the same underlying object
    pub fn same_object(&self, other: &HostInstance) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for HostInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostInstance")
            .field(&self.runtime_type().qualified_name())
            .finish()
    }
}
