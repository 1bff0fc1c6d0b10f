//! Proxy construction
//!
//! Calling a proxy class either re-projects an existing proxy's host
//! object under this class's type (one argument) or default-constructs
//! through the companion (zero arguments). Nothing else is accepted.

use gantry_sdk::{GuestValue, ProxyHandle};

use crate::class::registry::ClassRegistry;
use crate::class::ProxyClass;
use crate::error::{ProjectionError, ProjectionResult};

/// Invoke a proxy class as a constructor.
///
/// One argument must be an existing proxy whose host object is
/// assignable to this class's type; the same object comes back under
/// the new projection. Zero arguments route through the companion
/// default constructor. Any other arity is rejected.
pub fn construct(
    registry: &ClassRegistry,
    class: &ProxyClass,
    args: &[GuestValue],
) -> ProjectionResult<ProxyHandle> {
    match args {
        [GuestValue::Object(handle)] => {
            let runtime = handle.instance().runtime_type();
            if !class.host_type().is_assignable_from(&runtime) {
                return Err(ProjectionError::TypeMismatch(class.name().to_string()));
            }
            Ok(registry.instance_handle(handle.instance().clone(), class.host_type()))
        }
        [_other] => Err(ProjectionError::TypeMismatch(class.name().to_string())),
        [] => {
            let Some(ctor) = class.companion_ctor() else {
                return Err(ProjectionError::Arity);
            };
            let instance = ctor().ok_or(ProjectionError::Construction)?;
            if !class.host_type().is_assignable_from(&instance.runtime_type()) {
                return Err(ProjectionError::Construction);
            }
            Ok(registry.instance_handle(instance, class.host_type()))
        }
        _ => Err(ProjectionError::Arity),
    }
}
