//! Tiered type-identity resolution
//!
//! `resolve` never fails: it degrades through an ordered tier list until
//! the guaranteed synthesis tier answers from the late-binding handle's
//! own metadata. Every resolution publishes exactly one complete cache
//! entry; a tier that fails commits nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gantry_sdk::{Assembly, HostType, HostTypeBuilder, TypeIdentity, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::host::HostEnvironment;
use crate::resolve::cache::{self, TypeCache};

/// Which tier satisfied a resolution
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionTier {
    /// Cache hit
    Cache,
    /// Curated registered-assembly scan
    Registered,
    /// Broader scan of all loaded assemblies
    Loaded,
    /// Identity activation table
    Activation,
    /// Synthesized from the handle's own metadata
    Synthesized,
}

/// Snapshot of resolver activity counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverStats {
    /// Resolutions answered from the cache
    pub cache_hits: u64,
    /// Resolutions that had to scan assemblies
    pub scans: u64,
    /// Resolutions answered by the activation table
    pub activations: u64,
    /// Resolutions synthesized from late-binding metadata
    pub synthesized: u64,
}

#[derive(Default)]
struct StatsCells {
    cache_hits: AtomicU64,
    scans: AtomicU64,
    activations: AtomicU64,
    synthesized: AtomicU64,
}

/// Outcome of one assembly-set scan
enum Scan {
    /// Matching interface whose assembly also exports its companion class
    Companioned(HostType),
    /// First matching interface seen; no companion anywhere in the set
    Candidate(HostType),
    /// No matching type in the set
    Missed,
}

/// Tiered resolver from late-binding type identities to host types
pub struct Resolver {
    env: Arc<HostEnvironment>,
    cache: Arc<TypeCache>,
    stats: StatsCells,
}

impl Resolver {
    /// Resolver over `env` sharing the process-wide cache
    pub fn new(env: Arc<HostEnvironment>) -> Self {
        Self::with_cache(env, cache::global())
    }

    /// Resolver over `env` with its own cache (test isolation)
    pub fn with_cache(env: Arc<HostEnvironment>, cache: Arc<TypeCache>) -> Self {
        Resolver {
            env,
            cache,
            stats: StatsCells::default(),
        }
    }

    /// The cache this resolver publishes into
    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Snapshot of the activity counters
    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            cache_hits: self.stats.cache_hits.load(Ordering::Relaxed),
            scans: self.stats.scans.load(Ordering::Relaxed),
            activations: self.stats.activations.load(Ordering::Relaxed),
            synthesized: self.stats.synthesized.load(Ordering::Relaxed),
        }
    }

    /// Resolve a late-binding type description to a host type.
    ///
    /// Never fails; the final tier synthesizes a descriptor from the
    /// handle's own metadata.
    pub fn resolve(&self, info: &dyn TypeInfo) -> HostType {
        let identity = info.identity();
        if let Some(ty) = self.cache.get(&identity) {
            self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("cache hit for {}", identity);
            return ty;
        }

        let (ty, tier) = self.resolve_uncached(identity, info);
        tracing::debug!(
            "resolved {} as {} via {:?}",
            identity,
            ty.qualified_name(),
            tier
        );
        self.cache.insert(identity, ty.clone());
        ty
    }

    /// Tiers 2-5, in order. The scans share one candidate rule; a
    /// companioned match anywhere stops everything, otherwise the first
    /// candidate in enumeration order (registered set first) wins.
    fn resolve_uncached(
        &self,
        identity: TypeIdentity,
        info: &dyn TypeInfo,
    ) -> (HostType, ResolutionTier) {
        self.stats.scans.fetch_add(1, Ordering::Relaxed);

        let registered = match scan_assemblies(
            &self.env.registered_assemblies().snapshot(),
            identity,
        ) {
            Scan::Companioned(ty) => return (ty, ResolutionTier::Registered),
            Scan::Candidate(ty) => Some(ty),
            Scan::Missed => None,
        };

        let loaded = match scan_assemblies(&self.env.loaded_assemblies().snapshot(), identity) {
            Scan::Companioned(ty) => return (ty, ResolutionTier::Loaded),
            Scan::Candidate(ty) => Some(ty),
            Scan::Missed => None,
        };

        if let Some(ty) = registered {
            return (ty, ResolutionTier::Registered);
        }
        if let Some(ty) = loaded {
            return (ty, ResolutionTier::Loaded);
        }

        if let Some(ty) = self.env.activate(identity) {
            self.stats.activations.fetch_add(1, Ordering::Relaxed);
            return (ty, ResolutionTier::Activation);
        }

        self.stats.synthesized.fetch_add(1, Ordering::Relaxed);
        (synthesize(identity, info), ResolutionTier::Synthesized)
    }
}

/// Candidate rule shared by both scan tiers: an exported interface,
/// marked imported, with the target identity, whose name does not begin
/// with an underscore.
fn is_candidate(ty: &HostType, identity: TypeIdentity) -> bool {
    ty.is_interface()
        && ty.is_imported()
        && ty.identity() == Some(identity)
        && !ty.name().starts_with('_')
}

fn scan_assemblies(assemblies: &[Assembly], identity: TypeIdentity) -> Scan {
    let mut first: Option<HostType> = None;
    for assembly in assemblies {
        for ty in assembly.exported_types() {
            if !is_candidate(ty, identity) {
                continue;
            }
            let companion_name = format!("{}Class", ty.qualified_name());
            if assembly.find_type(&companion_name).is_some() {
                tracing::debug!(
                    "candidate {} has companion {} in {}",
                    ty.qualified_name(),
                    companion_name,
                    assembly.name()
                );
                return Scan::Companioned(ty.clone());
            }
            if first.is_none() {
                first = Some(ty.clone());
            }
        }
    }
    match first {
        Some(ty) => Scan::Candidate(ty),
        None => Scan::Missed,
    }
}

/// Guaranteed tier: a descriptor built purely from the handle's own
/// metadata, bypassing identity matching.
fn synthesize(identity: TypeIdentity, info: &dyn TypeInfo) -> HostType {
    HostTypeBuilder::new(&info.name())
        .namespace(&info.library())
        .interface()
        .identity(identity)
        .imported()
        .build()
}
