use crate::shared::components::accordion::{Accordion, AccordionItem};
use crate::shared::components::toolbar::{Toolbar, ToolbarButton, ToolbarGroup, ToolbarSeparator};
use crate::shared::components::ui::{Dropdown, DropdownOption};
use crate::shared::components::{Breadcrumbs, NavbarMenu};
use crate::showcase::fixtures::fixtures;
use contracts::enums::Orientation;
use contracts::shared::breadcrumbs::BreadcrumbItem;
use contracts::shared::format::format_money;
use contracts::shared::nav::find_nav_item;
use leptos::prelude::*;
use thaw::{Flex, FlexGap};

/// Orientation from the dropdown value; unknown values fall back to horizontal.
pub(crate) fn parse_orientation(value: &str) -> Orientation {
    value.parse().unwrap_or_else(|err| {
        log::warn!("ToolbarStory: {}", err);
        Orientation::default()
    })
}

/// Navbar and breadcrumbs for the budget pages.
#[component]
pub fn NavigationStory() -> impl IntoView {
    let active_key = RwSignal::new("budget.categories".to_string());
    let followed = RwSignal::new(None::<String>);
    let items = Signal::derive(|| fixtures().nav.clone());

    let on_navigate = Callback::new(move |key: String| {
        log::info!("navigate: {}", key);
        active_key.set(key);
    });

    let trail = Signal::derive(move || {
        let mut crumbs = fixtures().breadcrumbs.clone();
        let key = active_key.get();
        if let Some(item) = find_nav_item(&fixtures().nav, &key) {
            crumbs.pop();
            crumbs.push(BreadcrumbItem::new(item.label.clone()));
        }
        crumbs
    });

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <NavbarMenu items=items active_key=Signal::derive(move || Some(active_key.get())) on_navigate=on_navigate />
            <Breadcrumbs
                items=trail
                max_visible=3usize
                on_navigate=Callback::new(move |href: String| followed.set(Some(href)))
            />
            <Breadcrumbs items=trail />
            <p class="story__meta">
                {move || format!("active: {}", active_key.get())}
                {move || followed.get().map(|href| format!(", followed {}", href))}
            </p>
        </Flex>
    }
}

/// Transaction toolbar in both orientations.
#[component]
pub fn ToolbarStory() -> impl IntoView {
    let orientation = RwSignal::new(Orientation::Horizontal);
    let filter_on = RwSignal::new(false);
    let last_action = RwSignal::new(String::new());
    let act = move |name: &'static str| Callback::new(move |_: leptos::ev::MouseEvent| last_action.set(name.to_string()));

    let orientation_options = Signal::derive(|| {
        vec![
            DropdownOption::new("horizontal", "Horizontal"),
            DropdownOption::new("vertical", "Vertical"),
        ]
    });

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Dropdown
                options=orientation_options
                selected=Signal::derive(move || Some(orientation.get().as_str().to_string()))
                on_select=Callback::new(move |v: String| orientation.set(parse_orientation(&v)))
            />
            <Toolbar orientation=Signal::derive(move || Some(orientation.get())) label="Transactions">
                <ToolbarGroup label="Edit">
                    <ToolbarButton id="add" label="Add" icon_name="plus" on_click=act("add") />
                    <ToolbarButton id="edit" label="Edit" icon_name="edit" on_click=act("edit") />
                    <ToolbarButton id="delete" label="Delete" icon_name="trash" disabled=true />
                </ToolbarGroup>
                <ToolbarSeparator />
                <ToolbarButton
                    id="filter"
                    label="Filter"
                    icon_name="filter"
                    pressed=Signal::derive(move || Some(filter_on.get()))
                    on_click=Callback::new(move |_: leptos::ev::MouseEvent| filter_on.update(|f| *f = !*f))
                />
                <ToolbarButton id="export" label="Export" icon_name="download" on_click=act("export")>
                    "Export"
                </ToolbarButton>
            </Toolbar>
            <p class="story__meta">{move || format!("last action: {}", last_action.get())}</p>
        </Flex>
    }
}

/// Budget categories as accordion sections, single and multiple mode.
#[component]
pub fn AccordionStory() -> impl IntoView {
    let open_ids = RwSignal::new(Vec::<String>::new());

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Accordion on_change=Callback::new(move |ids: Vec<String>| open_ids.set(ids))>
                {fixtures()
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(idx, category)| {
                        let spent = format_money(category.spent);
                        let limit = format_money(category.limit);
                        view! {
                            <AccordionItem
                                id=format!("cat-{}", idx)
                                title=category.name.clone()
                                default_open={idx == 0}
                                disabled={category.limit <= 0.0}
                            >
                                <p>{format!("Spent {} of {}", spent, limit)}</p>
                            </AccordionItem>
                        }
                    })
                    .collect_view()}
            </Accordion>
            <p class="story__meta">{move || format!("open: {}", open_ids.get().join(", "))}</p>
            <Accordion multiple=true>
                <AccordionItem title="Income" default_open=true>
                    <p>"Salary and refunds."</p>
                </AccordionItem>
                <AccordionItem title="Fixed costs" default_open=true>
                    <p>"Rent, utilities, subscriptions."</p>
                </AccordionItem>
                <AccordionItem title="Archived" disabled=true>
                    <p>"Nothing here."</p>
                </AccordionItem>
            </Accordion>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orientation_falls_back() {
        assert_eq!(parse_orientation("vertical"), Orientation::Vertical);
        assert_eq!(parse_orientation("diagonal"), Orientation::Horizontal);
    }
}
