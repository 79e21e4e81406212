//! Reactive wrapper around `ChildRegistry`.
//!
//! The parent creates a `RegistryHandle`, keeps it and hands it to its children
//! (as a prop or inside its own typed context). Children call `register` from
//! their component body, `update` from an effect over their props and
//! `unregister` from `on_cleanup`.

use contracts::shared::registry::{ChildRegistry, Registration, RegistryState, Step};
use leptos::prelude::*;

pub struct RegistryHandle<R: Send + Sync + 'static> {
    inner: RwSignal<ChildRegistry<R>>,
}

impl<R: Send + Sync + 'static> Clone for RegistryHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for RegistryHandle<R> {}

impl<R> RegistryHandle<R>
where
    R: Registration + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(ChildRegistry::new()),
        }
    }

    pub fn register(&self, registration: R) {
        log::debug!("registry: register '{}'", registration.id());
        self.inner.update(|r| r.register(registration));
    }

    pub fn update(&self, id: &str, registration: R) {
        // Unknown ids are skipped without notifying subscribers.
        if !self.inner.with_untracked(|r| r.contains(id)) {
            log::debug!("registry: update of unknown '{}' ignored", id);
            return;
        }
        self.inner.update(|r| r.update(id, registration));
    }

    pub fn unregister(&self, id: &str) {
        if !self.inner.with_untracked(|r| r.contains(id)) {
            return;
        }
        log::debug!("registry: unregister '{}'", id);
        self.inner.update(|r| r.unregister(id));
    }

    /// Explicit selection (header click, keyboard). Returns whether it was accepted.
    pub fn select(&self, id: &str) -> bool {
        let accepted = self
            .inner
            .with_untracked(|r| r.get(id).is_some_and(|e| !e.disabled()));
        if accepted {
            self.inner.update(|r| {
                r.select(id);
            });
        }
        accepted
    }

    /// Drops the explicit selection; the default policy picks the active child again.
    pub fn clear_selection(&self) {
        if self.inner.with_untracked(|r| r.selected_id().is_none()) {
            return;
        }
        log::debug!("registry: selection cleared");
        self.inner.update(|r| r.clear_selection());
    }

    /// Neighbour of `from` in the given direction, untracked.
    pub fn step(&self, from: Option<&str>, step: Step) -> Option<String> {
        self.inner
            .with_untracked(|r| r.step(from, step).map(str::to_string))
    }

    pub fn entries(&self) -> Vec<R> {
        self.inner.with(|r| r.entries().to_vec())
    }

    pub fn ids(&self) -> Vec<String> {
        self.inner.with(|r| r.ids().map(str::to_string).collect())
    }

    pub fn get(&self, id: &str) -> Option<R> {
        self.inner.with(|r| r.get(id).cloned())
    }

    pub fn get_untracked(&self, id: &str) -> Option<R> {
        self.inner.with_untracked(|r| r.get(id).cloned())
    }

    pub fn active_id(&self) -> Option<String> {
        self.inner.with(|r| r.active_id().map(str::to_string))
    }

    pub fn active_id_untracked(&self) -> Option<String> {
        self.inner
            .with_untracked(|r| r.active_id().map(str::to_string))
    }

    pub fn active(&self) -> Option<R> {
        self.inner.with(|r| r.active().cloned())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.inner.with(|r| r.is_active(id))
    }

    pub fn state(&self) -> RegistryState {
        self.inner.with(|r| r.state())
    }

    pub fn len(&self) -> usize {
        self.inner.with(|r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.with(|r| r.is_empty())
    }
}

impl<R> Default for RegistryHandle<R>
where
    R: Registration + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Generates an id for a child that was not given one.
pub fn generate_child_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
