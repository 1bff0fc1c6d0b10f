//! Late-binding capability traits
//!
//! Host objects that support automation-style dispatch expose these
//! traits through [`HostObject::as_late_bound`]. The capability is an
//! explicit query: objects without it simply return `None` there, which
//! the engine treats as "use the fallback type", never as an error.
//!
//! [`HostObject::as_late_bound`]: crate::instance::HostObject::as_late_bound

use std::sync::Arc;

use crate::identity::TypeIdentity;
use crate::status::DispatchStatus;

/// Locale identifier passed to type-information requests (system default)
pub const DEFAULT_LOCALE: u32 = 0x0800;

/// Member id assigned by a late-bound object to a resolved name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DispatchId(i32);

impl DispatchId {
    /// Wrap a raw member id
    pub const fn from_raw(raw: i32) -> Self {
        DispatchId(raw)
    }

    /// The raw member id
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Type description exposed by a late-bound object.
///
/// This is the only metadata available for objects carrying no static
/// reflection data; the resolver can synthesize a full host type from it
/// when every other resolution tier comes up empty.
pub trait TypeInfo: Send + Sync {
    /// Identity of the described type
    fn identity(&self) -> TypeIdentity;

    /// Simple name of the described type
    fn name(&self) -> String;

    /// Name of the library the type belongs to
    fn library(&self) -> String;
}

/// Automation-style late-binding surface of a host object.
///
/// All calls are bounded synchronous foreign calls. Failures are reported
/// through [`DispatchStatus`] words rather than panics; the engine decides
/// which statuses are fatal.
pub trait LateBound: Send + Sync {
    /// Number of type descriptions the object can provide (0 or 1)
    fn type_info_count(&self) -> u32;

    /// Retrieve the type description at `index` for `locale`
    fn type_info(&self, index: u32, locale: u32) -> Result<Arc<dyn TypeInfo>, DispatchStatus>;

    /// Map a member name to its dispatch id
    fn dispatch_id(&self, name: &str, locale: u32) -> Result<DispatchId, DispatchStatus>;
}
