//! Gantry Projection Engine
//!
//! This crate is the complete projection engine between a duck-typed
//! guest runtime and a statically typed host runtime:
//! - **Resolve**: tiered type-identity resolution with a shared cache
//!   (`resolve` module)
//! - **Dispatch**: late-binding interrogation with silent fallback
//!   (`dispatch` module)
//! - **Class**: proxy classes, construction, subscripts, and indexers
//!   (`class` module)
//! - **Host**: assembly registries, activation, aliases, and builtins
//!   (`host` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use gantry_engine::{HostEnvironment, Projector};
//!
//! let env = Arc::new(HostEnvironment::new());
//! env.register_assembly(&assembly);
//!
//! let projector = Projector::new(env);
//! let concrete = projector.concrete_type(Some(&instance), &declared);
//! let handle = projector.wrap(instance, &concrete);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Proxy classes: construction, subscripts, and indexer marshaling
pub mod class;

/// Late-binding adapter over the optional dispatch capability
pub mod dispatch;

/// Error taxonomy of the engine
pub mod error;

/// Host environment: assemblies, activation, aliases, and builtins
pub mod host;

/// Projection facade tying the engine together
pub mod projector;

/// Tiered type-identity resolution
pub mod resolve;

// ============================================================================
// Engine Re-exports
// ============================================================================

pub use class::{ClassRegistry, IndexerBinding, ProxyClass};
pub use dispatch::DispatchAdapter;
pub use error::{ProjectionError, ProjectionResult};
pub use host::{builtins, ActivationTable, AliasTable, AssemblyRegistry, HostEnvironment};
pub use projector::{Projector, ProjectorOptions};
pub use resolve::{ResolutionTier, Resolver, ResolverStats, TypeCache};

// ============================================================================
// SDK Re-exports
// ============================================================================

pub use gantry_sdk::{
    // Identity and dispatch plumbing
    DispatchId, DispatchStatus, IdentityParseError, LateBound, TypeIdentity, TypeInfo,
    DEFAULT_LOCALE,
    // Host object model
    Assembly, HostCtor, HostInstance, HostObject, HostType, HostTypeBuilder, TypeKind,
    // Indexer metadata
    DefaultValue, IndexerGetFn, IndexerSetFn, IndexerSpec, ParamSpec,
    // Guest values and proxies
    GuestValue, ProxyHandle,
    // Errors
    HostError, HostResult,
};
