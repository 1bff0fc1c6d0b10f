//! Guest-side dynamic values and proxy handles

use std::fmt;
use std::sync::Arc;

use crate::instance::HostInstance;
use crate::metadata::HostType;

/// Dynamic value as seen by the guest runtime
#[derive(Debug, Clone, PartialEq)]
pub enum GuestValue {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Immutable text
    Str(Arc<str>),
    /// Ordered sequence (the guest's tuple)
    Tuple(Arc<[GuestValue]>),
    /// Proxy over a host instance
    Object(ProxyHandle),
    /// A projected host type
    Type(HostType),
}

impl GuestValue {
    /// Text value from a string slice
    pub fn str(text: &str) -> Self {
        GuestValue::Str(Arc::from(text))
    }

    /// Tuple value from a vector of items
    pub fn tuple(items: Vec<GuestValue>) -> Self {
        GuestValue::Tuple(Arc::from(items))
    }

    /// Whether the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, GuestValue::Null)
    }

    /// Extract an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            GuestValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Extract text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GuestValue::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Extract tuple items
    pub fn as_tuple(&self) -> Option<&[GuestValue]> {
        match self {
            GuestValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Extract a proxy handle
    pub fn as_object(&self) -> Option<&ProxyHandle> {
        match self {
            GuestValue::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// Extract a projected type
    pub fn as_type(&self) -> Option<&HostType> {
        match self {
            GuestValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// Guest-visible name of the value's kind
    pub fn type_name(&self) -> &'static str {
        match self {
            GuestValue::Null => "null",
            GuestValue::Bool(_) => "bool",
            GuestValue::Int(_) => "int",
            GuestValue::Float(_) => "float",
            GuestValue::Str(_) => "str",
            GuestValue::Tuple(_) => "tuple",
            GuestValue::Object(_) => "object",
            GuestValue::Type(_) => "type",
        }
    }
}

struct ProxyCell {
    instance: HostInstance,
    projected: HostType,
}

/// Reference-counted guest proxy over one host instance.
///
/// All clones share one cell holding the host instance and the type it is
/// projected as. Dropping the last clone drops the cell, releasing the
/// host-side owning reference.
#[derive(Clone)]
pub struct ProxyHandle {
    cell: Arc<ProxyCell>,
}

impl ProxyHandle {
    /// Mint a handle projecting `instance` as `projected`
    pub fn new(instance: HostInstance, projected: HostType) -> Self {
        ProxyHandle {
            cell: Arc::new(ProxyCell {
                instance,
                projected,
            }),
        }
    }

    /// The wrapped host instance
    pub fn instance(&self) -> &HostInstance {
        &self.cell.instance
    }

    /// The type this proxy is projected as
    pub fn projected_type(&self) -> &HostType {
        &self.cell.projected
    }

    /// Number of live handles sharing this proxy
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.cell)
    }

    /// Whether two handles share the same proxy cell
    pub fn same_proxy(&self, other: &ProxyHandle) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl PartialEq for ProxyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_proxy(other)
    }
}

impl fmt::Debug for ProxyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyHandle")
            .field("projected", &self.cell.projected.qualified_name())
            .field("handles", &self.handle_count())
            .finish()
    }
}
