//! Projection facade
//!
//! One handle over the whole engine: tiered type resolution, late-binding
//! interrogation, proxy construction, type subscripts, and indexer access.

use std::sync::Arc;

use gantry_sdk::{
    DispatchId, GuestValue, HostInstance, HostType, LateBound, ProxyHandle, TypeInfo,
    DEFAULT_LOCALE,
};

use crate::class::{self, ClassRegistry, ProxyClass};
use crate::dispatch::DispatchAdapter;
use crate::error::{ProjectionError, ProjectionResult};
use crate::host::HostEnvironment;
use crate::resolve::{Resolver, TypeCache};

/// Tunables for a projector
#[derive(Debug, Clone)]
pub struct ProjectorOptions {
    /// Locale passed to late-binding metadata queries
    pub locale: u32,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        ProjectorOptions {
            locale: DEFAULT_LOCALE,
        }
    }
}

/// Engine facade over one host environment
pub struct Projector {
    env: Arc<HostEnvironment>,
    resolver: Resolver,
    classes: ClassRegistry,
    options: ProjectorOptions,
}

impl Projector {
    /// Projector over `env` with default options and the shared cache
    pub fn new(env: Arc<HostEnvironment>) -> Self {
        Self::with_options(env, ProjectorOptions::default())
    }

    /// Projector with explicit options
    pub fn with_options(env: Arc<HostEnvironment>, options: ProjectorOptions) -> Self {
        Projector {
            resolver: Resolver::new(env.clone()),
            env,
            classes: ClassRegistry::new(),
            options,
        }
    }

    /// Projector with its own type cache, isolated from the process-wide
    /// one (test setups mostly)
    pub fn with_private_cache(env: Arc<HostEnvironment>) -> Self {
        Projector {
            resolver: Resolver::with_cache(env.clone(), Arc::new(TypeCache::new())),
            env,
            classes: ClassRegistry::new(),
            options: ProjectorOptions::default(),
        }
    }

    /// The host environment being projected
    pub fn environment(&self) -> &HostEnvironment {
        &self.env
    }

    /// The underlying tiered resolver
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The proxy class interning table
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// Resolve a late-binding type description to a host type
    pub fn resolve_type(&self, info: &dyn TypeInfo) -> HostType {
        self.resolver.resolve(info)
    }

    /// Refine `fallback` to the instance's concrete runtime type, or
    /// return it unchanged when the instance can't say
    pub fn concrete_type(&self, instance: Option<&HostInstance>, fallback: &HostType) -> HostType {
        DispatchAdapter::with_locale(&self.resolver, self.options.locale)
            .concrete_type(instance, fallback)
    }

    /// Translate a member name to its dispatch slot; `Ok(None)` means
    /// the member simply doesn't exist
    pub fn member_id(
        &self,
        object: &dyn LateBound,
        name: &str,
    ) -> ProjectionResult<Option<DispatchId>> {
        DispatchAdapter::with_locale(&self.resolver, self.options.locale).member_id(object, name)
    }

    /// The interned proxy class for a host type
    pub fn class_for(&self, ty: &HostType) -> Arc<ProxyClass> {
        self.classes.class_for(ty)
    }

    /// Invoke a type as a constructor: identity-preserving cast with one
    /// proxy argument, companion default construction with none
    pub fn construct(&self, ty: &HostType, args: &[GuestValue]) -> ProjectionResult<ProxyHandle> {
        let class = self.classes.class_for(ty);
        class::construct(&self.classes, &class, args)
    }

    /// Specialize a type with a subscript: `Array[T]`, a generic
    /// definition, or delegation to the arity-qualified definition
    pub fn type_subscript(
        &self,
        ty: &HostType,
        index: &GuestValue,
    ) -> ProjectionResult<Arc<ProxyClass>> {
        class::type_subscript(&self.env, &self.classes, ty, index)
    }

    /// Read through a proxy's indexer
    pub fn get_index(&self, handle: &ProxyHandle, index: &GuestValue) -> ProjectionResult<GuestValue> {
        let class = self.classes.class_for(handle.projected_type());
        let Some(binding) = class.indexer() else {
            return Err(ProjectionError::Unindexable);
        };
        binding.get(handle.instance(), index)
    }

    /// Write through a proxy's indexer
    pub fn set_index(
        &self,
        handle: &ProxyHandle,
        index: &GuestValue,
        value: GuestValue,
    ) -> ProjectionResult<()> {
        let class = self.classes.class_for(handle.projected_type());
        let Some(binding) = class.indexer() else {
            return Err(ProjectionError::ItemAssignment);
        };
        binding.set(handle.instance(), index, value)
    }

    /// Wrap a host instance in a proxy projected as `ty`
    pub fn wrap(&self, instance: HostInstance, ty: &HostType) -> ProxyHandle {
        self.classes.instance_handle(instance, ty)
    }
}
