//! Type subscripts
//!
//! `Class[T]` syntax on proxy classes. The array root specializes to
//! array types, generic definitions bind their own parameters, and any
//! other type delegates to the arity-qualified generic definition that
//! shares its name.

use std::slice;
use std::sync::Arc;

use gantry_sdk::{GuestValue, HostType, TypeKind};

use crate::class::registry::ClassRegistry;
use crate::class::ProxyClass;
use crate::error::{ProjectionError, ProjectionResult};
use crate::host::HostEnvironment;

/// Specialize a proxy class with a type subscript.
///
/// The array root is checked before anything else so `Array[T]` works
/// even though the root carries no generic parameters of its own.
pub fn type_subscript(
    env: &HostEnvironment,
    registry: &ClassRegistry,
    ty: &HostType,
    index: &GuestValue,
) -> ProjectionResult<Arc<ProxyClass>> {
    if ty.is_array_root() {
        return array_subscript(env, registry, index);
    }

    if matches!(ty.kind(), TypeKind::GenericDefinition { .. }) {
        let args = type_arguments(env, index)?;
        return bind_generic_class(registry, ty, &args);
    }

    let args = type_arguments(env, index)?;
    let qualified = format!("{}`{}", ty.qualified_name(), args.len());
    tracing::debug!("delegating subscript on {} to {}", ty.qualified_name(), qualified);
    match env.lookup_qualified(&qualified) {
        Some(definition) => bind_generic_class(registry, &definition, &args),
        None => Err(ProjectionError::Unsubscriptable),
    }
}

/// Close a generic definition over concrete arguments and intern the
/// resulting proxy class.
pub fn bind_generic_class(
    registry: &ClassRegistry,
    definition: &HostType,
    args: &[HostType],
) -> ProjectionResult<Arc<ProxyClass>> {
    let bound = definition
        .bind_generic(args)
        .ok_or(ProjectionError::TypesExpected)?;
    Ok(registry.class_for(&bound))
}

/// `Array[T]`: exactly one element type, never a tuple
fn array_subscript(
    env: &HostEnvironment,
    registry: &ClassRegistry,
    index: &GuestValue,
) -> ProjectionResult<Arc<ProxyClass>> {
    if matches!(index, GuestValue::Tuple(_)) {
        return Err(ProjectionError::TypeExpected);
    }
    let element = single_type_argument(env, index).ok_or(ProjectionError::TypeExpected)?;
    let array = HostType::array_of(&element);
    Ok(registry.class_for(&array))
}

/// One subscript element to a host type: a type value directly, or a
/// string through the alias table.
fn single_type_argument(env: &HostEnvironment, value: &GuestValue) -> Option<HostType> {
    match value {
        GuestValue::Type(ty) => Some(ty.clone()),
        GuestValue::Str(token) => env.alias_type(token),
        _ => None,
    }
}

/// Full subscript to a host type argument list. A tuple contributes one
/// argument per element; anything else is a single argument.
fn type_arguments(
    env: &HostEnvironment,
    index: &GuestValue,
) -> ProjectionResult<Vec<HostType>> {
    let items = match index {
        GuestValue::Tuple(items) => &items[..],
        single => slice::from_ref(single),
    };
    items
        .iter()
        .map(|item| single_type_argument(env, item).ok_or(ProjectionError::TypesExpected))
        .collect()
}
