//! Gantry SDK - Lightweight SDK for describing a host object model
//!
//! This crate provides the minimal types and traits a host integration
//! needs to describe its object model to the Gantry projection engine
//! without depending on engine internals:
//!
//! - [`TypeIdentity`]: 128-bit type identity used as the resolution key
//! - [`DispatchStatus`] / [`DispatchId`]: raw late-binding status words
//!   and member ids
//! - [`LateBound`] / [`TypeInfo`]: the automation-style capability traits
//! - [`HostType`] / [`Assembly`]: interned reflection metadata descriptors
//! - [`HostObject`] / [`HostInstance`]: live host objects behind shared
//!   handles
//! - [`GuestValue`] / [`ProxyHandle`]: the guest-side dynamic value model
//!   and the reference-counted proxy

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod dispatch;
pub mod error;
pub mod identity;
pub mod instance;
pub mod metadata;
pub mod status;
pub mod value;

pub use dispatch::{DispatchId, LateBound, TypeInfo, DEFAULT_LOCALE};
pub use error::{HostError, HostResult};
pub use identity::{IdentityParseError, TypeIdentity};
pub use instance::{HostInstance, HostObject};
pub use metadata::{
    Assembly, DefaultValue, HostCtor, HostType, HostTypeBuilder, IndexerGetFn, IndexerSetFn,
    IndexerSpec, ParamSpec, TypeKind,
};
pub use status::DispatchStatus;
pub use value::{GuestValue, ProxyHandle};
