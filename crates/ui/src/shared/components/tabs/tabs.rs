use crate::shared::dom::{child_dom_id, focus_element};
use crate::shared::registry_handle::RegistryHandle;
use contracts::enums::Orientation;
use contracts::shared::registry::{Registration, RegistrationMeta};
use leptos::prelude::*;

/// What a `Tab` reports to its `Tabs` parent: header metadata plus slots.
#[derive(Clone)]
pub struct TabRegistration {
    pub meta: RegistrationMeta,
    pub icon: Option<ViewFn>,
    pub content: Option<ChildrenFn>,
}

impl Registration for TabRegistration {
    fn id(&self) -> &str {
        &self.meta.id
    }

    fn disabled(&self) -> bool {
        self.meta.disabled
    }

    fn default_active(&self) -> bool {
        self.meta.default_active
    }
}

/// Handle owned by a `Tabs` instance. Passed to `Tab` explicitly via its
/// `tabs` prop, or picked up from context when the tab is a direct child.
#[derive(Clone, Copy)]
pub struct TabsContext {
    pub registry: RegistryHandle<TabRegistration>,
}

impl TabsContext {
    pub fn new() -> Self {
        Self {
            registry: RegistryHandle::new(),
        }
    }

    pub fn active_id(&self) -> Option<String> {
        self.registry.active_id()
    }

    pub fn select(&self, id: &str) -> bool {
        self.registry.select(id)
    }
}

impl Default for TabsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) const TAB_DOM_SCOPE: &str = "tab";

pub(crate) fn tab_header_class(active: bool, disabled: bool) -> String {
    let mut class = String::from("tabs__header");
    if active {
        class.push_str(" tabs__header--active");
    }
    if disabled {
        class.push_str(" tabs__header--disabled");
    }
    class
}

/// Tab panel. Renders headers in registration order and the content of the
/// single active tab only.
#[component]
pub fn Tabs(
    /// Externally owned handle; a fresh one is created when omitted
    #[prop(optional)]
    handle: Option<TabsContext>,
    /// Fired with the tab id after the user switches tabs
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `Tab` children
    children: Children,
) -> impl IntoView {
    let ctx = handle.unwrap_or_default();
    provide_context(ctx);

    // Tab bodies run here and register themselves before the headers render.
    let registered = children();

    let active_id = Memo::new(move |_| ctx.registry.active_id());

    let select = move |id: String| {
        let changed = ctx.registry.active_id_untracked().as_deref() != Some(id.as_str());
        if ctx.registry.select(&id) && changed {
            if let Some(handler) = on_change {
                handler.run(id);
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(step) = Orientation::Horizontal.step_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let current = ctx.registry.active_id_untracked();
        if let Some(next) = ctx.registry.step(current.as_deref(), step) {
            focus_element(&child_dom_id(TAB_DOM_SCOPE, &next));
            select(next);
        }
    };

    let active_content = move || {
        let id = active_id.get()?;
        let content = ctx.registry.get_untracked(&id).and_then(|t| t.content)?;
        Some(content())
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs {}", additional_class())>
            <div class="tabs__list" role="tablist" on:keydown=on_keydown>
                <For
                    each=move || ctx.registry.entries()
                    key=|tab| tab.meta.clone()
                    children=move |tab| {
                        let id = tab.meta.id.clone();
                        let id_for_active = id.clone();
                        let disabled = tab.meta.disabled;
                        let is_active = move || active_id.get().as_deref() == Some(id_for_active.as_str());
                        let color_style = tab.meta.color.clone().map(|c| format!("--tab-color: {}", c));
                        view! {
                            <button
                                id=child_dom_id(TAB_DOM_SCOPE, &id)
                                type="button"
                                role="tab"
                                class={ let is_active = is_active.clone(); move || tab_header_class(is_active(), disabled) }
                                aria-selected={ let is_active = is_active.clone(); move || is_active().to_string() }
                                tabindex=move || if is_active() { "0" } else { "-1" }
                                disabled=disabled
                                style=color_style
                                on:click=move |_| select(id.clone())
                            >
                                {tab.icon.as_ref().map(|icon| view! {
                                    <span class="tabs__icon">{icon.run()}</span>
                                })}
                                <span class="tabs__title">{tab.meta.title.clone()}</span>
                            </button>
                        }
                    }
                />
            </div>
            <div class="tabs__panel" role="tabpanel">
                {active_content}
            </div>
            {registered}
        </div>
    }
}
