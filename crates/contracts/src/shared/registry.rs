//! Child registry - parent-side bookkeeping for composite components.
//!
//! A parent (tab panel, toolbar) owns one `ChildRegistry`. Each child reports
//! itself with `register` on mount, `update` when its displayed props change and
//! `unregister` on unmount. The registry keeps entries in mount order and
//! recomputes the active id after every mutation.
//!
//! Misuse is tolerated rather than reported: `update` on an unknown id and
//! `unregister` of an absent id do nothing, a second `register` with the same id
//! replaces the first one.

use serde::{Deserialize, Serialize};

/// What a child has to tell its parent for the registry to work.
pub trait Registration {
    fn id(&self) -> &str;

    fn disabled(&self) -> bool {
        false
    }

    fn default_active(&self) -> bool {
        false
    }
}

/// Display metadata reported by a child (tab header, toolbar item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RegistrationMeta {
    pub id: String,
    pub title: String,
    pub color: Option<String>,
    pub disabled: bool,
    pub default_active: bool,
}

impl RegistrationMeta {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_default_active(mut self, default_active: bool) -> Self {
        self.default_active = default_active;
        self
    }
}

impl Registration for RegistrationMeta {
    fn id(&self) -> &str {
        &self.id
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn default_active(&self) -> bool {
        self.default_active
    }
}

/// Observable state of a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryState {
    Empty,
    HasActive(String),
    AllDisabled,
}

/// Direction for keyboard navigation across registered children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
    First,
    Last,
}

/// Default active-id policy over an ordered snapshot.
///
/// First entry marked `default_active` and not disabled, else the first entry
/// that is not disabled, else nothing.
pub fn resolve_active_id<R: Registration>(entries: &[R]) -> Option<&str> {
    entries
        .iter()
        .find(|r| r.default_active() && !r.disabled())
        .or_else(|| entries.iter().find(|r| !r.disabled()))
        .map(|r| r.id())
}

/// Insertion-ordered registry keyed by child id.
#[derive(Debug, Clone)]
pub struct ChildRegistry<R> {
    entries: Vec<R>,
    selected: Option<String>,
    active: Option<String>,
}

impl<R> Default for ChildRegistry<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            active: None,
        }
    }
}

impl<R: Registration> ChildRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child in mount order. An id that is already present is replaced
    /// in place; an empty id is ignored.
    pub fn register(&mut self, registration: R) {
        if registration.id().is_empty() {
            return;
        }
        match self.position(registration.id()) {
            Some(idx) => self.entries[idx] = registration,
            None => self.entries.push(registration),
        }
        self.recompute();
    }

    /// Replaces the record stored under `id`. Unknown ids are a no-op, as is a
    /// replacement whose id already belongs to another entry.
    pub fn update(&mut self, id: &str, registration: R) {
        let Some(idx) = self.position(id) else {
            return;
        };
        let new_id = registration.id();
        if new_id.is_empty() {
            return;
        }
        if new_id != id {
            if self.contains(new_id) {
                return;
            }
            if self.selected.as_deref() == Some(id) {
                self.selected = Some(new_id.to_string());
            }
        }
        self.entries[idx] = registration;
        self.recompute();
    }

    /// Removes a child. Absent ids are a no-op.
    pub fn unregister(&mut self, id: &str) {
        let Some(idx) = self.position(id) else {
            return;
        };
        self.entries.remove(idx);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.recompute();
    }

    /// Records an explicit selection. Returns `false` for unknown or disabled
    /// ids, leaving the registry untouched.
    pub fn select(&mut self, id: &str) -> bool {
        match self.get(id) {
            Some(r) if !r.disabled() => {
                self.selected = Some(id.to_string());
                self.recompute();
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.recompute();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&R> {
        self.active_id().and_then(|id| self.get(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn state(&self) -> RegistryState {
        match (&self.active, self.entries.is_empty()) {
            (_, true) => RegistryState::Empty,
            (Some(id), false) => RegistryState::HasActive(id.clone()),
            (None, false) => RegistryState::AllDisabled,
        }
    }

    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.id())
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.entries.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enabled neighbour of `from` in registration order, wrapping around.
    /// With an unknown `from`, `Next`/`Prev` behave like `First`/`Last`.
    pub fn step(&self, from: Option<&str>, step: Step) -> Option<&str> {
        let enabled = |r: &&R| !r.disabled();
        let start = from.and_then(|id| self.position(id));
        let found = match (step, start) {
            (Step::First, _) | (Step::Next, None) => self.entries.iter().find(enabled),
            (Step::Last, _) | (Step::Prev, None) => self.entries.iter().rev().find(enabled),
            (Step::Next, Some(idx)) => self
                .entries
                .iter()
                .skip(idx + 1)
                .chain(self.entries.iter().take(idx + 1))
                .find(enabled),
            (Step::Prev, Some(idx)) => self
                .entries
                .iter()
                .take(idx)
                .rev()
                .chain(self.entries.iter().skip(idx).rev())
                .find(enabled),
        };
        found.map(|r| r.id())
    }

    fn recompute(&mut self) {
        let selected = self
            .selected
            .as_deref()
            .and_then(|id| self.get(id))
            .filter(|r| !r.disabled())
            .map(|r| r.id().to_string());
        self.active = selected.or_else(|| resolve_active_id(&self.entries).map(str::to_string));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn meta(id: &str) -> RegistrationMeta {
        RegistrationMeta::new(id, id.to_uppercase())
    }

    fn ids(registry: &ChildRegistry<RegistrationMeta>) -> Vec<&str> {
        registry.ids().collect()
    }

    #[test]
    fn test_default_active_wins() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_default_active(true));
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_first_enabled_without_default() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a").with_disabled(true));
        registry.register(meta("b"));
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_disabled_default_is_skipped() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_default_active(true).with_disabled(true));
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_all_disabled_and_empty() {
        let mut registry: ChildRegistry<RegistrationMeta> = ChildRegistry::new();
        assert_eq!(registry.state(), RegistryState::Empty);
        assert_eq!(registry.active_id(), None);

        registry.register(meta("a").with_disabled(true));
        registry.register(meta("b").with_disabled(true));
        assert_eq!(registry.active_id(), None);
        assert_eq!(registry.state(), RegistryState::AllDisabled);
    }

    #[test]
    fn test_duplicate_register_replaces_in_place() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b"));
        registry.register(RegistrationMeta::new("a", "Renamed"));

        assert_eq!(ids(&registry), vec!["a", "b"]);
        assert_eq!(registry.get("a").map(|r| r.title.as_str()), Some("Renamed"));
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let mut registry = ChildRegistry::new();
        registry.register(meta(""));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_then_unregister_round_trip() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_default_active(true));
        let before_ids: Vec<String> = registry.ids().map(str::to_string).collect();
        let before_state = registry.state();

        registry.register(meta("x").with_default_active(true));
        registry.unregister("x");

        let after_ids: Vec<String> = registry.ids().map(str::to_string).collect();
        assert_eq!(after_ids, before_ids);
        assert_eq!(registry.state(), before_state);
    }

    #[test]
    fn test_unregister_active_reresolves() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a").with_disabled(true));
        registry.register(meta("b").with_default_active(true));
        registry.register(meta("c"));

        registry.unregister("b");
        assert_eq!(registry.active_id(), Some("c"));

        registry.unregister("c");
        assert_eq!(registry.active_id(), None);
        assert_eq!(registry.state(), RegistryState::AllDisabled);

        registry.unregister("a");
        assert_eq!(registry.state(), RegistryState::Empty);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.unregister("a");
        registry.unregister("a");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b"));
        registry.unregister("b");

        registry.update("b", meta("b").with_default_active(true));

        assert_eq!(ids(&registry), vec!["a"]);
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_update_recomputes_active() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b"));
        assert_eq!(registry.active_id(), Some("a"));

        registry.update("a", meta("a").with_disabled(true));
        assert_eq!(registry.active_id(), Some("b"));

        registry.update("a", meta("a").with_default_active(true));
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_update_cannot_create_duplicate() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b"));

        registry.update("a", meta("b"));
        assert_eq!(ids(&registry), vec!["a", "b"]);

        registry.update("a", meta("c"));
        assert_eq!(ids(&registry), vec!["c", "b"]);
    }

    #[test]
    fn test_selection_is_sticky_until_ineligible() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a").with_default_active(true));
        registry.register(meta("b"));
        registry.register(meta("c"));

        assert!(registry.select("c"));
        assert_eq!(registry.active_id(), Some("c"));

        registry.register(meta("d").with_default_active(true));
        assert_eq!(registry.active_id(), Some("c"));

        registry.update("c", meta("c").with_disabled(true));
        assert_eq!(registry.active_id(), Some("a"));

        registry.update("c", meta("c"));
        assert_eq!(registry.active_id(), Some("c"));

        registry.unregister("c");
        assert_eq!(registry.selected_id(), None);
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_clear_selection_restores_policy() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_default_active(true));
        assert!(registry.select("a"));

        registry.clear_selection();
        assert_eq!(registry.selected_id(), None);
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_select_rejects_unknown_and_disabled() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_disabled(true));

        assert!(!registry.select("b"));
        assert!(!registry.select("zzz"));
        assert_eq!(registry.selected_id(), None);
        assert_eq!(registry.active_id(), Some("a"));
    }

    #[test]
    fn test_rename_keeps_selection() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b"));
        registry.select("b");

        registry.update("b", meta("b2"));
        assert_eq!(registry.active_id(), Some("b2"));
    }

    #[test]
    fn test_step_skips_disabled_and_wraps() {
        let mut registry = ChildRegistry::new();
        registry.register(meta("a"));
        registry.register(meta("b").with_disabled(true));
        registry.register(meta("c"));
        registry.register(meta("d").with_disabled(true));

        assert_eq!(registry.step(Some("a"), Step::Next), Some("c"));
        assert_eq!(registry.step(Some("c"), Step::Next), Some("a"));
        assert_eq!(registry.step(Some("a"), Step::Prev), Some("c"));
        assert_eq!(registry.step(Some("c"), Step::Prev), Some("a"));
        assert_eq!(registry.step(None, Step::Next), Some("a"));
        assert_eq!(registry.step(Some("a"), Step::Last), Some("c"));
        assert_eq!(registry.step(Some("c"), Step::First), Some("a"));
    }

    #[test]
    fn test_step_single_and_empty() {
        let mut registry = ChildRegistry::new();
        assert_eq!(registry.step(None, Step::Next), None);

        registry.register(meta("only"));
        assert_eq!(registry.step(Some("only"), Step::Next), Some("only"));
        assert_eq!(registry.step(Some("only"), Step::Prev), Some("only"));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Register { id: usize, disabled: bool, default_active: bool },
        Update { id: usize, new_id: usize, disabled: bool },
        Unregister { id: usize },
        Select { id: usize },
    }

    const POOL: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn arb_op() -> impl Strategy<Value = Op> {
        let id = 0..POOL.len();
        prop_oneof![
            (id.clone(), any::<bool>(), any::<bool>()).prop_map(|(id, disabled, default_active)| {
                Op::Register { id, disabled, default_active }
            }),
            (id.clone(), id.clone(), any::<bool>())
                .prop_map(|(id, new_id, disabled)| Op::Update { id, new_id, disabled }),
            id.clone().prop_map(|id| Op::Unregister { id }),
            id.prop_map(|id| Op::Select { id }),
        ]
    }

    fn apply(registry: &mut ChildRegistry<RegistrationMeta>, op: &Op) {
        match *op {
            Op::Register { id, disabled, default_active } => registry.register(
                meta(POOL[id])
                    .with_disabled(disabled)
                    .with_default_active(default_active),
            ),
            Op::Update { id, new_id, disabled } => {
                registry.update(POOL[id], meta(POOL[new_id]).with_disabled(disabled))
            }
            Op::Unregister { id } => registry.unregister(POOL[id]),
            Op::Select { id } => {
                registry.select(POOL[id]);
            }
        }
    }

    fn observable(registry: &ChildRegistry<RegistrationMeta>) -> (Vec<RegistrationMeta>, Option<String>) {
        (registry.entries().to_vec(), registry.active_id().map(str::to_string))
    }

    proptest! {
        #[test]
        fn prop_ids_stay_unique_and_active_is_eligible(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut registry = ChildRegistry::new();
            for op in &ops {
                apply(&mut registry, op);

                let mut seen: Vec<&str> = registry.ids().collect();
                let total = seen.len();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), total);

                match registry.active() {
                    Some(active) => prop_assert!(!active.disabled),
                    None => prop_assert!(registry.entries().iter().all(|r| r.disabled)),
                }
            }
        }

        #[test]
        fn prop_register_then_unregister_restores_state(
            ops in prop::collection::vec(arb_op(), 0..50),
            disabled in any::<bool>(),
            default_active in any::<bool>(),
        ) {
            let mut registry = ChildRegistry::new();
            for op in &ops {
                apply(&mut registry, op);
            }
            let before = observable(&registry);

            registry.register(
                meta("fresh")
                    .with_disabled(disabled)
                    .with_default_active(default_active),
            );
            registry.unregister("fresh");
            prop_assert_eq!(observable(&registry), before);
        }

        #[test]
        fn prop_update_of_unregistered_id_changes_nothing(
            ops in prop::collection::vec(arb_op(), 0..50),
            new_id in 0..POOL.len(),
        ) {
            let mut registry = ChildRegistry::new();
            for op in &ops {
                apply(&mut registry, op);
            }
            let before = observable(&registry);

            registry.update("ghost", meta(POOL[new_id]).with_default_active(true));
            prop_assert_eq!(observable(&registry), before);
        }
    }
}
