//! Accordion: stacked sections with collapsible bodies.
//!
//! Items register with the `Accordion` they belong to (headers are walked with
//! Up/Down/Home/End); which sections are open is kept separately in
//! `AccordionContext::open`.

use crate::shared::dom::{child_dom_id, focus_element};
use crate::shared::icons::icon_sized;
use crate::shared::registry_handle::{generate_child_id, RegistryHandle};
use contracts::enums::Orientation;
use contracts::shared::registry::RegistrationMeta;
use leptos::ev;
use leptos::prelude::*;

const ACCORDION_DOM_SCOPE: &str = "accordion-header";

/// New open set after toggling `id`. Single mode keeps at most one section open.
pub(crate) fn toggle_open(open: &[String], id: &str, multiple: bool) -> Vec<String> {
    if open.iter().any(|o| o == id) {
        return open.iter().filter(|o| *o != id).cloned().collect();
    }
    if multiple {
        let mut next = open.to_vec();
        next.push(id.to_string());
        next
    } else {
        vec![id.to_string()]
    }
}

#[derive(Clone, Copy)]
pub struct AccordionContext {
    pub registry: RegistryHandle<RegistrationMeta>,
    pub open: RwSignal<Vec<String>>,
    pub multiple: Signal<bool>,
}

impl AccordionContext {
    pub fn new(multiple: Signal<bool>) -> Self {
        Self {
            registry: RegistryHandle::new(),
            open: RwSignal::new(Vec::new()),
            multiple,
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.with(|open| open.iter().any(|o| o == id))
    }

    /// Opens or closes a section; disabled sections stay as they are.
    pub fn toggle(&self, id: &str) {
        if self.registry.get_untracked(id).is_some_and(|meta| meta.disabled) {
            return;
        }
        let multiple = self.multiple.get_untracked();
        self.open.update(|open| *open = toggle_open(open, id, multiple));
    }

    fn forget(&self, id: &str) {
        if self.open.with_untracked(|open| open.iter().any(|o| o == id)) {
            self.open.update(|open| open.retain(|o| o != id));
        }
    }
}

#[component]
pub fn Accordion(
    /// Allow several sections open at once
    #[prop(optional, into)]
    multiple: MaybeProp<bool>,
    #[prop(optional)]
    handle: Option<AccordionContext>,
    /// Ids of the open sections after every change
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let ctx = handle.unwrap_or_else(|| {
        AccordionContext::new(Signal::derive(move || multiple.get().unwrap_or(false)))
    });
    provide_context(ctx);

    Effect::new(move |prev: Option<Vec<String>>| {
        let open = ctx.open.get();
        if let (Some(prev), Some(handler)) = (prev, on_change) {
            if prev != open {
                handler.run(open.clone());
            }
        }
        open
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(step) = Orientation::Vertical.step_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let current = ctx.registry.active_id_untracked();
        if let Some(next) = ctx.registry.step(current.as_deref(), step) {
            ctx.registry.select(&next);
            focus_element(&child_dom_id(ACCORDION_DOM_SCOPE, &next));
        }
    };

    view! {
        <div
            class=move || format!("accordion {}", class.get().unwrap_or_default())
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}

#[component]
pub fn AccordionItem(
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(into)]
    title: Signal<String>,
    /// Start expanded
    #[prop(optional)]
    default_open: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Explicit accordion handle; falls back to the enclosing `Accordion`
    #[prop(optional)]
    accordion: Option<AccordionContext>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(ctx) = accordion.or_else(use_context::<AccordionContext>) else {
        log::warn!("AccordionItem rendered outside of an Accordion");
        return ().into_any();
    };
    let id = id.unwrap_or_else(|| generate_child_id("section"));
    let is_disabled = move || disabled.get().unwrap_or(false);

    let build = {
        let id = id.clone();
        move || RegistrationMeta::new(id.clone(), title.get()).with_disabled(is_disabled())
    };
    ctx.registry.register(untrack(&build));
    if default_open && !untrack(is_disabled) {
        ctx.toggle(&id);
    }

    let id_for_effect = id.clone();
    Effect::new(move |_| ctx.registry.update(&id_for_effect, build()));

    let id_for_cleanup = id.clone();
    on_cleanup(move || {
        ctx.registry.unregister(&id_for_cleanup);
        ctx.forget(&id_for_cleanup);
    });

    let open = {
        let id = id.clone();
        Memo::new(move |_| ctx.is_open(&id))
    };
    let focus_target = {
        let id = id.clone();
        move || ctx.registry.is_active(&id)
    };
    let panel_id = child_dom_id("accordion-panel", &id);
    let id_for_click = id.clone();
    let id_for_focus = id.clone();

    view! {
        <section
            class="accordion__item"
            class:accordion__item--open=move || open.get()
            class:accordion__item--disabled=is_disabled
        >
            <h3 class="accordion__heading">
                <button
                    id=child_dom_id(ACCORDION_DOM_SCOPE, &id)
                    type="button"
                    class="accordion__header"
                    aria-expanded=move || open.get().to_string()
                    aria-controls=panel_id.clone()
                    tabindex=move || if focus_target() { "0" } else { "-1" }
                    disabled=is_disabled
                    on:focus=move |_| {
                        ctx.registry.select(&id_for_focus);
                    }
                    on:click=move |_| ctx.toggle(&id_for_click)
                >
                    <span class="accordion__title">{move || title.get()}</span>
                    {move || icon_sized(if open.get() { "chevron-up" } else { "chevron-down" }, 16)}
                </button>
            </h3>
            <Show when=move || open.get()>
                <div id=panel_id.clone() class="accordion__panel" role="region">
                    {children()}
                </div>
            </Show>
        </section>
    }
    .into_any()
}
