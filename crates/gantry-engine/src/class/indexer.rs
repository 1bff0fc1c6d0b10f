//! Indexer marshaling
//!
//! Converts guest subscript syntax into host indexer invocations. A bare
//! index becomes a one-element argument list; a tuple index spreads its
//! elements. Writes append binding-time defaults for trailing optional
//! parameters and the assigned value last; reads never synthesize.

use std::borrow::Cow;

use gantry_sdk::{DefaultValue, GuestValue, HostInstance, IndexerSpec};

use crate::error::{ProjectionError, ProjectionResult};

/// Indexer metadata bound to a proxy class, defaults converted once
#[derive(Debug)]
pub struct IndexerBinding {
    spec: IndexerSpec,
    defaults: Vec<Option<GuestValue>>,
}

impl IndexerBinding {
    pub(crate) fn new(spec: &IndexerSpec) -> Self {
        let defaults = spec
            .params
            .iter()
            .map(|param| param.default.as_ref().map(guest_default))
            .collect();
        IndexerBinding {
            spec: spec.clone(),
            defaults,
        }
    }

    /// Whether reads are supported
    pub fn can_get(&self) -> bool {
        self.spec.getter.is_some()
    }

    /// Whether writes are supported
    pub fn can_set(&self) -> bool {
        self.spec.setter.is_some()
    }

    /// Read through the indexer.
    ///
    /// The caller's index arguments pass through exactly as given; a
    /// short argument list is the host binder's problem to report.
    pub fn get(&self, instance: &HostInstance, index: &GuestValue) -> ProjectionResult<GuestValue> {
        let Some(getter) = self.spec.getter.as_ref() else {
            return Err(ProjectionError::Unindexable);
        };
        let args = index_args(index);
        Ok(getter(instance, &args)?)
    }

    /// Write through the indexer: explicit index arguments, synthesized
    /// defaults for the trailing optional parameters, assigned value last.
    pub fn set(
        &self,
        instance: &HostInstance,
        index: &GuestValue,
        value: GuestValue,
    ) -> ProjectionResult<()> {
        let Some(setter) = self.spec.setter.as_ref() else {
            return Err(ProjectionError::ItemAssignment);
        };
        let explicit = index_args(index);
        let tail = self.synthesized_defaults(explicit.len()).unwrap_or_default();
        let mut assembled = Vec::with_capacity(explicit.len() + tail.len() + 1);
        assembled.extend_from_slice(&explicit);
        assembled.extend(tail);
        assembled.push(value);
        Ok(setter(instance, &assembled)?)
    }

    /// Defaults for the parameters after `explicit_count`. Any parameter
    /// in that range without a declared default disables synthesis
    /// entirely, leaving the arity error to the host binder.
    fn synthesized_defaults(&self, explicit_count: usize) -> Option<Vec<GuestValue>> {
        if explicit_count >= self.defaults.len() {
            return Some(Vec::new());
        }
        let mut tail = Vec::with_capacity(self.defaults.len() - explicit_count);
        for slot in &self.defaults[explicit_count..] {
            tail.push(slot.clone()?);
        }
        Some(tail)
    }
}

/// Guest subscript to host argument list. A tuple spreads into one
/// argument per element; anything else is a single argument.
fn index_args(index: &GuestValue) -> Cow<'_, [GuestValue]> {
    match index {
        GuestValue::Tuple(items) => Cow::Borrowed(&items[..]),
        single => Cow::Owned(vec![single.clone()]),
    }
}

fn guest_default(default: &DefaultValue) -> GuestValue {
    match default {
        DefaultValue::Null => GuestValue::Null,
        DefaultValue::Bool(value) => GuestValue::Bool(*value),
        DefaultValue::Int(value) => GuestValue::Int(*value),
        DefaultValue::Float(value) => GuestValue::Float(*value),
        DefaultValue::Str(value) => GuestValue::str(value),
    }
}
