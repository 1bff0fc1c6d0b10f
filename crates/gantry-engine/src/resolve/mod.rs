//! Type-identity resolution
//!
//! Maps the identities reported by late-binding handles onto host type
//! descriptors through a tiered strategy backed by a process-wide cache.

mod cache;
mod resolver;

pub use cache::{global, TypeCache};
pub use resolver::{ResolutionTier, Resolver, ResolverStats};
