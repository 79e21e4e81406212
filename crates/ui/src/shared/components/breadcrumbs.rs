use crate::shared::icons::icon_sized;
use contracts::shared::breadcrumbs::{collapse_breadcrumbs, BreadcrumbItem, Crumb};
use leptos::prelude::*;

/// Breadcrumb trail. The last item is the current page; long trails collapse
/// their middle into an ellipsis that expands on click.
#[component]
pub fn Breadcrumbs(
    #[prop(into)]
    items: Signal<Vec<BreadcrumbItem>>,
    /// Maximum number of visible items, 0 or unset shows all
    #[prop(optional, into)]
    max_visible: MaybeProp<usize>,
    /// Called with the item's href instead of following the link
    #[prop(optional)]
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let crumbs = move || {
        let limit = if expanded.get() { 0 } else { max_visible.get().unwrap_or(0) };
        items.with(|items| collapse_breadcrumbs(items, limit))
    };

    let render = move |crumb: Crumb, first: bool| {
        let separator = (!first).then(|| {
            view! { <span class="breadcrumbs__separator" aria-hidden="true">{icon_sized("chevron-right", 14)}</span> }
        });
        let body = match crumb {
            Crumb::Ellipsis { hidden } => view! {
                <button
                    type="button"
                    class="breadcrumbs__ellipsis"
                    title=format!("Show {} more", hidden)
                    on:click=move |_| expanded.set(true)
                >
                    "…"
                </button>
            }
            .into_any(),
            Crumb::Item { item, current: true } => view! {
                <span class="breadcrumbs__current" aria-current="page">{item.label}</span>
            }
            .into_any(),
            Crumb::Item { item: BreadcrumbItem { label, href: Some(href) }, .. } => {
                let link = href.clone();
                view! {
                    <a
                        class="breadcrumbs__link"
                        href=link
                        on:click=move |ev| {
                            if let Some(handler) = on_navigate {
                                ev.prevent_default();
                                handler.run(href.clone());
                            }
                        }
                    >
                        {label}
                    </a>
                }
                .into_any()
            }
            Crumb::Item { item, .. } => view! {
                <span class="breadcrumbs__text">{item.label}</span>
            }
            .into_any(),
        };
        view! {
            <li class="breadcrumbs__item">
                {separator}
                {body}
            </li>
        }
    };

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol class="breadcrumbs__list">
                {move || {
                    crumbs()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, crumb)| render(crumb, idx == 0))
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
