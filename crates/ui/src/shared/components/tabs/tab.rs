use super::tabs::{TabRegistration, TabsContext};
use crate::shared::registry_handle::generate_child_id;
use contracts::shared::registry::RegistrationMeta;
use leptos::prelude::*;

/// A single tab. Renders nothing in place: it registers its header metadata
/// and content slot with the parent `Tabs`, which does the rendering.
#[component]
pub fn Tab(
    /// Stable id; generated when omitted
    #[prop(optional, into)]
    id: Option<String>,
    /// Header text (reactive)
    #[prop(into)]
    title: Signal<String>,
    /// Accent color for the header, any CSS color
    #[prop(optional, into)]
    color: MaybeProp<String>,
    /// Disabled tabs cannot be selected
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Preferred initial tab
    #[prop(optional)]
    default_active: bool,
    /// Header icon slot
    #[prop(optional, into)]
    icon: Option<ViewFn>,
    /// Explicit parent handle; falls back to the enclosing `Tabs`
    #[prop(optional)]
    tabs: Option<TabsContext>,
    /// Tab content, rendered by the parent while this tab is active
    children: ChildrenFn,
) -> impl IntoView {
    let Some(ctx) = tabs.or_else(use_context::<TabsContext>) else {
        log::warn!("Tab rendered outside of Tabs and without a `tabs` handle");
        return;
    };
    let id = id.unwrap_or_else(|| generate_child_id("tab"));

    let build = {
        let id = id.clone();
        move || TabRegistration {
            meta: RegistrationMeta {
                id: id.clone(),
                title: title.get(),
                color: color.get(),
                disabled: disabled.get().unwrap_or(false),
                default_active,
            },
            icon: icon.clone(),
            content: Some(children.clone()),
        }
    };

    ctx.registry.register(untrack(&build));

    // Re-report on prop changes.
    {
        let id = id.clone();
        let build = build.clone();
        Effect::new(move |_| ctx.registry.update(&id, build()));
    }

    on_cleanup(move || ctx.registry.unregister(&id));
}
