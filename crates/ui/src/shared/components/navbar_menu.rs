use crate::shared::icons;
use contracts::shared::nav::{active_trail, NavItem};
use leptos::prelude::*;

fn grid_class(count: usize) -> &'static str {
    match count {
        0..=3 => "navbar-panel-grid-1",
        4..=8 => "navbar-panel-grid-2",
        _ => "navbar-panel-grid-3",
    }
}

/// Top-level navigation bar. Entries with children open a panel on hover or
/// click; the active entry and its ancestors are highlighted.
#[component]
pub fn NavbarMenu(
    #[prop(into)]
    items: Signal<Vec<NavItem>>,
    /// Key of the current page
    #[prop(optional, into)]
    active_key: MaybeProp<String>,
    /// Called with the key of a clicked leaf entry
    on_navigate: Callback<String>,
) -> impl IntoView {
    let trail = Memo::new(move |_| match active_key.get() {
        Some(key) => items.with(|items| active_trail(items, &key)),
        None => Vec::new(),
    });

    view! {
        <nav class="navbar-menu">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        if item.has_children() {
                            view! { <NavbarCategory item=item trail=trail on_navigate=on_navigate /> }
                                .into_any()
                        } else {
                            view! { <NavbarLink item=item trail=trail on_navigate=on_navigate /> }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn NavbarLink(
    item: NavItem,
    #[prop(into)] trail: Signal<Vec<String>>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    let key = StoredValue::new(item.key.clone());
    let disabled = item.disabled;
    let is_active = move || key.with_value(|k| trail.with(|t| t.last() == Some(k)));

    view! {
        <button
            class="navbar-btn"
            class:navbar-btn-active=is_active
            aria-current=move || is_active().then_some("page")
            disabled=disabled
            on:click=move |_| on_navigate.run(key.get_value())
        >
            {item.icon.as_deref().map(icons::icon)}
            <span>{item.label}</span>
        </button>
    }
}

#[component]
fn NavbarCategory(
    item: NavItem,
    #[prop(into)] trail: Signal<Vec<String>>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let key = StoredValue::new(item.key.clone());
    let in_trail = move || key.with_value(|k| trail.with(|t| t.contains(k)));
    let grid = grid_class(item.children.len());

    view! {
        <div
            class="navbar-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="navbar-btn"
                class:navbar-btn-active=move || is_open.get() || in_trail()
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                disabled=item.disabled
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {item.icon.as_deref().map(icons::icon)}
                <span>{item.label}</span>
                <span class="navbar-chevron" class:navbar-chevron-open=move || is_open.get()>
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div class="navbar-panel" class:navbar-panel-open=move || is_open.get()>
                <div class=format!("navbar-panel-content {}", grid)>
                    {item
                        .children
                        .into_iter()
                        .map(|child| {
                            let child_key = StoredValue::new(child.key.clone());
                            let is_current = move || child_key.with_value(|k| trail.with(|t| t.contains(k)));
                            let icon_name = child.icon.clone().unwrap_or_else(|| "chevron-right".to_string());
                            view! {
                                <button
                                    class="navbar-card"
                                    class:navbar-card-active=is_current
                                    disabled=child.disabled
                                    on:click=move |_| {
                                        on_navigate.run(child_key.get_value());
                                        set_is_open.set(false);
                                    }
                                >
                                    <div class="navbar-card-icon">{icons::icon(&icon_name)}</div>
                                    <div class="navbar-card-title">{child.label}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_class() {
        assert_eq!(grid_class(2), "navbar-panel-grid-1");
        assert_eq!(grid_class(6), "navbar-panel-grid-2");
        assert_eq!(grid_class(12), "navbar-panel-grid-3");
    }
}
