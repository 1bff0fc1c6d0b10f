//! Late-binding adapter
//!
//! Interrogates objects that expose the optional late-binding capability
//! and degrades to a caller-supplied fallback whenever any step of the
//! interrogation is unavailable. Only name-to-slot translation can fail
//! with an error; everything else falls back silently.

use gantry_sdk::{DispatchId, HostInstance, HostType, LateBound, DEFAULT_LOCALE};

use crate::error::{ProjectionError, ProjectionResult};
use crate::resolve::Resolver;

/// Adapter over the late-binding capability of host objects
pub struct DispatchAdapter<'a> {
    resolver: &'a Resolver,
    locale: u32,
}

impl<'a> DispatchAdapter<'a> {
    /// Adapter using the neutral locale
    pub fn new(resolver: &'a Resolver) -> Self {
        Self::with_locale(resolver, DEFAULT_LOCALE)
    }

    /// Adapter using an explicit locale for metadata queries
    pub fn with_locale(resolver: &'a Resolver, locale: u32) -> Self {
        DispatchAdapter { resolver, locale }
    }

    /// Refine `fallback` to the object's concrete runtime type.
    ///
    /// Every gate degrades silently: no instance, no late-binding
    /// capability, zero type descriptions, or a failed description fetch
    /// all yield the fallback unchanged. A fetched description goes
    /// through full tiered resolution.
    pub fn concrete_type(&self, instance: Option<&HostInstance>, fallback: &HostType) -> HostType {
        let Some(instance) = instance else {
            return fallback.clone();
        };
        let Some(late_bound) = instance.as_late_bound() else {
            return fallback.clone();
        };
        if late_bound.type_info_count() == 0 {
            return fallback.clone();
        }
        match late_bound.type_info(0, self.locale) {
            Ok(info) => self.resolver.resolve(info.as_ref()),
            Err(status) => {
                tracing::debug!("type description fetch failed with {}", status);
                fallback.clone()
            }
        }
    }

    /// Translate a member name to its dispatch slot.
    ///
    /// A missing member is an ordinary `Ok(None)`; any other failure
    /// status is a dispatch error carrying the status verbatim.
    pub fn member_id(
        &self,
        object: &dyn LateBound,
        name: &str,
    ) -> ProjectionResult<Option<DispatchId>> {
        match object.dispatch_id(name, self.locale) {
            Ok(id) => Ok(Some(id)),
            Err(status) if status.is_unknown_name() => Ok(None),
            Err(status) => Err(ProjectionError::Dispatch(status)),
        }
    }
}
