//! Host-side collaborator registries
//!
//! The projection engine consumes these contracts; embedders populate
//! them with their reflected metadata:
//! - [`AssemblyRegistry`]: ordered assembly sets for the resolver scans
//! - [`ActivationTable`]: direct identity-to-type activation
//! - [`AliasTable`]: guest alias tokens for host types
//! - [`HostEnvironment`]: the aggregate handed to the engine
//!
//! The `builtins` module holds the host prelude (standard value types and
//! their guest aliases) every environment starts with.

mod activation;
mod alias;
mod assembly;
pub mod builtins;
mod environment;

pub use activation::ActivationTable;
pub use alias::AliasTable;
pub use assembly::AssemblyRegistry;
pub use environment::HostEnvironment;
