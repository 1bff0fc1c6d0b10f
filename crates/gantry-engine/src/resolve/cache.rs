//! Identity-keyed cache of resolved host types
//!
//! Populated lazily, never evicted. Values are fully constructed before
//! insertion, so concurrent readers never observe a partial entry; a
//! racing duplicate insert is benign because the value is deterministic
//! per identity.

use std::sync::Arc;

use dashmap::DashMap;
use gantry_sdk::{HostType, TypeIdentity};
use once_cell::sync::Lazy;

/// Cache from type identity to resolved host type
pub struct TypeCache {
    entries: DashMap<TypeIdentity, HostType>,
}

impl TypeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        TypeCache {
            entries: DashMap::new(),
        }
    }

    /// Look up a cached resolution
    pub fn get(&self, identity: &TypeIdentity) -> Option<HostType> {
        self.entries.get(identity).map(|entry| entry.clone())
    }

    /// Publish a resolution.
    ///
    /// Last writer wins; both writers hold the same deterministic value.
    pub fn insert(&self, identity: TypeIdentity, ty: HostType) {
        self.entries.insert(identity, ty);
    }

    /// Number of cached resolutions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached resolutions
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for TypeCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CACHE: Lazy<Arc<TypeCache>> = Lazy::new(|| Arc::new(TypeCache::new()));

/// The process-wide cache shared by resolvers that don't bring their own
pub fn global() -> Arc<TypeCache> {
    GLOBAL_CACHE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_sdk::HostTypeBuilder;

    fn identity(last: u8) -> TypeIdentity {
        let mut bytes = [0u8; 16];
        bytes[15] = last;
        TypeIdentity::from_bytes(bytes)
    }

    #[test]
    fn test_insert_and_get() {
        let cache = TypeCache::new();
        let ty = HostTypeBuilder::new("IStream").namespace("Acme").build();

        assert!(cache.get(&identity(1)).is_none());
        cache.insert(identity(1), ty.clone());
        assert_eq!(cache.get(&identity(1)).unwrap(), ty);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_is_last_writer_wins() {
        let cache = TypeCache::new();
        let first = HostTypeBuilder::new("First").build();
        let second = HostTypeBuilder::new("Second").build();

        cache.insert(identity(1), first);
        cache.insert(identity(1), second.clone());
        assert_eq!(cache.get(&identity(1)).unwrap(), second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = TypeCache::new();
        cache.insert(identity(1), HostTypeBuilder::new("A").build());
        cache.insert(identity(2), HostTypeBuilder::new("B").build());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_global_cache_is_shared() {
        let a = global();
        let b = global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
