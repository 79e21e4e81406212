//! Toolbar with orientation propagation and roving focus.
//!
//! `Toolbar` provides a `ToolbarContext`; items read the orientation from it
//! and register themselves so that exactly one enabled item sits in the tab
//! order. Arrow keys along the toolbar axis move between items.

use crate::shared::dom::{child_dom_id, focus_element};
use crate::shared::icons::icon;
use crate::shared::registry_handle::{generate_child_id, RegistryHandle};
use contracts::enums::Orientation;
use contracts::shared::registry::RegistrationMeta;
use leptos::ev;
use leptos::prelude::*;

const TOOLBAR_DOM_SCOPE: &str = "toolbar-item";

#[derive(Clone, Copy)]
pub struct ToolbarContext {
    pub orientation: Signal<Orientation>,
    pub registry: RegistryHandle<RegistrationMeta>,
}

impl ToolbarContext {
    pub fn new(orientation: Signal<Orientation>) -> Self {
        Self {
            orientation,
            registry: RegistryHandle::new(),
        }
    }
}

/// Toolbar context of the enclosing toolbar; explicit handle wins.
pub fn use_toolbar(explicit: Option<ToolbarContext>) -> Option<ToolbarContext> {
    explicit.or_else(use_context::<ToolbarContext>)
}

pub(crate) fn item_class(orientation: Orientation, active: bool, pressed: bool) -> String {
    let mut class = format!("toolbar__item toolbar__item--{}", orientation.as_str());
    if active {
        class.push_str(" toolbar__item--focus-target");
    }
    if pressed {
        class.push_str(" toolbar__item--pressed");
    }
    class
}

/// The given handle as is, or a fresh context following `orientation`.
/// A handle carries its own orientation, so the prop is ignored next to it.
pub(crate) fn toolbar_context(
    handle: Option<ToolbarContext>,
    orientation: MaybeProp<Orientation>,
) -> ToolbarContext {
    match handle {
        Some(ctx) => {
            if orientation.get_untracked().is_some() {
                log::warn!("Toolbar: `orientation` is ignored when `handle` is given");
            }
            ctx
        }
        None => ToolbarContext::new(Signal::derive(move || orientation.get().unwrap_or_default())),
    }
}

/// Separators run across the toolbar axis.
pub(crate) fn separator_orientation(toolbar: Orientation) -> Orientation {
    match toolbar {
        Orientation::Horizontal => Orientation::Vertical,
        Orientation::Vertical => Orientation::Horizontal,
    }
}

#[component]
pub fn Toolbar(
    /// Layout direction, propagated to every item. Ignored when `handle` is
    /// given: the handle's own orientation applies.
    #[prop(optional, into)]
    orientation: MaybeProp<Orientation>,
    /// Accessible name
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Externally owned context
    #[prop(optional)]
    handle: Option<ToolbarContext>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let ctx = toolbar_context(handle, orientation);
    provide_context(ctx);

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(step) = ctx.orientation.get_untracked().step_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let current = ctx.registry.active_id_untracked();
        if let Some(next) = ctx.registry.step(current.as_deref(), step) {
            ctx.registry.select(&next);
            focus_element(&child_dom_id(TOOLBAR_DOM_SCOPE, &next));
        }
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div
            class=move || format!(
                "toolbar toolbar--{} {}",
                ctx.orientation.get().as_str(),
                additional_class()
            )
            role="toolbar"
            aria-orientation=move || ctx.orientation.get().aria()
            aria-label=move || label.get()
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}

#[component]
pub fn ToolbarButton(
    /// Stable id; generated when omitted
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label, also the tooltip
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon set
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Toggle state for toggle buttons (bold, filter on, ...)
    #[prop(optional, into)]
    pressed: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// Explicit toolbar handle; falls back to the enclosing `Toolbar`
    #[prop(optional)]
    toolbar: Option<ToolbarContext>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let ctx = use_toolbar(toolbar);
    let id = id.unwrap_or_else(|| generate_child_id("tb"));
    let is_disabled = move || disabled.get().unwrap_or(false);

    if let Some(ctx) = ctx {
        let build = {
            let id = id.clone();
            move || RegistrationMeta::new(id.clone(), label.get()).with_disabled(is_disabled())
        };
        ctx.registry.register(untrack(&build));

        let id_for_effect = id.clone();
        Effect::new(move |_| ctx.registry.update(&id_for_effect, build()));

        let id_for_cleanup = id.clone();
        on_cleanup(move || ctx.registry.unregister(&id_for_cleanup));
    } else {
        log::warn!("ToolbarButton '{}' rendered outside of a Toolbar", id);
    }

    let orientation = move || ctx.map(|c| c.orientation.get()).unwrap_or_default();
    let is_target = {
        let id = id.clone();
        move || ctx.is_some_and(|c| c.registry.is_active(&id))
    };
    let is_pressed = move || pressed.get();

    let id_for_focus = id.clone();

    view! {
        <button
            id=child_dom_id(TOOLBAR_DOM_SCOPE, &id)
            type="button"
            class={
                let is_target = is_target.clone();
                move || item_class(orientation(), is_target(), is_pressed().unwrap_or(false))
            }
            tabindex=move || if ctx.is_none() || is_target() { "0" } else { "-1" }
            aria-label=move || label.get()
            aria-pressed=move || is_pressed().map(|p| p.to_string())
            title=move || label.get()
            disabled=is_disabled
            on:focus=move |_| {
                if let Some(c) = ctx {
                    c.registry.select(&id_for_focus);
                }
            }
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || icon_name.get().map(|name| icon(&name))}
            {children.map(|c| view! { <span class="toolbar__text">{c()}</span> })}
        </button>
    }
}

#[component]
pub fn ToolbarSeparator(
    #[prop(optional)]
    toolbar: Option<ToolbarContext>,
) -> impl IntoView {
    let ctx = use_toolbar(toolbar);
    let orientation = move || {
        separator_orientation(ctx.map(|c| c.orientation.get()).unwrap_or_default())
    };

    view! {
        <div
            class=move || format!("toolbar__separator toolbar__separator--{}", orientation().as_str())
            role="separator"
            aria-orientation=move || orientation().aria()
        />
    }
}

/// Visual group of related items, laid out along the toolbar axis.
#[component]
pub fn ToolbarGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional)]
    toolbar: Option<ToolbarContext>,
    children: Children,
) -> impl IntoView {
    let ctx = use_toolbar(toolbar);
    let orientation = move || ctx.map(|c| c.orientation.get()).unwrap_or_default();

    view! {
        <div
            class=move || format!("toolbar__group toolbar__group--{}", orientation().as_str())
            role="group"
            aria-label=move || label.get()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_orientation_wins_over_prop() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = ToolbarContext::new(Signal::derive(|| Orientation::Vertical));
            let ctx = toolbar_context(Some(handle), MaybeProp::from(Orientation::Horizontal));
            assert_eq!(ctx.orientation.get_untracked(), Orientation::Vertical);

            let own = toolbar_context(None, MaybeProp::from(Orientation::Vertical));
            assert_eq!(own.orientation.get_untracked(), Orientation::Vertical);

            let fallback = toolbar_context(None, MaybeProp::default());
            assert_eq!(fallback.orientation.get_untracked(), Orientation::Horizontal);
        });
    }

    #[test]
    fn test_item_class() {
        assert_eq!(
            item_class(Orientation::Vertical, false, false),
            "toolbar__item toolbar__item--vertical"
        );
        assert_eq!(
            item_class(Orientation::Horizontal, true, true),
            "toolbar__item toolbar__item--horizontal toolbar__item--focus-target toolbar__item--pressed"
        );
    }

    #[test]
    fn test_separator_runs_across_axis() {
        assert_eq!(separator_orientation(Orientation::Horizontal), Orientation::Vertical);
        assert_eq!(separator_orientation(Orientation::Vertical), Orientation::Horizontal);
    }

    #[test]
    fn test_context_propagates_orientation() {
        let owner = Owner::new();
        owner.with(|| {
            let orientation = RwSignal::new(Orientation::Horizontal);
            let ctx = ToolbarContext::new(orientation.into());
            provide_context(ctx);

            let seen = use_toolbar(None).map(|c| c.orientation.get());
            assert_eq!(seen, Some(Orientation::Horizontal));

            orientation.set(Orientation::Vertical);
            assert_eq!(ctx.orientation.get(), Orientation::Vertical);
        });
    }
}
