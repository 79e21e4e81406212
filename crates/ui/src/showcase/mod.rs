//! Component stories: one tab per component group, driven by budget fixtures.
//!
//! The selected story is mirrored into `?story=` so a reload reopens it.

pub mod fixtures;
pub mod stories;

use crate::shared::components::tabs::{Tab, Tabs, TabsContext};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use stories::*;
use thaw::{Flex, FlexAlign, FlexJustify};
use web_sys::window;

pub const STORIES: [(&str, &str, &str); 8] = [
    ("tabs", "Tabs", "credit-card"),
    ("toolbar", "Toolbar", "edit"),
    ("badges", "Badges & status", "check-circle"),
    ("forms", "Inputs", "tag"),
    ("table", "Table", "calendar"),
    ("navigation", "Navigation", "home"),
    ("accordion", "Accordion", "chevron-down"),
    ("chart", "Pie chart", "pie-chart"),
];

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryQuery {
    #[serde(default)]
    pub story: Option<String>,
}

/// Story id from a location search string; unknown ids are dropped.
pub fn story_from_search(search: &str) -> Option<String> {
    let query: StoryQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .story
        .filter(|id| STORIES.iter().any(|(known, _, _)| known == id))
}

pub fn story_search(id: &str) -> String {
    let query = StoryQuery {
        story: Some(id.to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn replace_search(search: &str) {
    if current_search() == search {
        return;
    }
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(search));
    }
}

fn story_view(id: &str) -> AnyView {
    match id {
        "tabs" => view! { <TabsStory /> }.into_any(),
        "toolbar" => view! { <ToolbarStory /> }.into_any(),
        "badges" => view! { <BadgesStory /> }.into_any(),
        "forms" => view! { <FormsStory /> }.into_any(),
        "table" => view! { <TableStory /> }.into_any(),
        "navigation" => view! { <NavigationStory /> }.into_any(),
        "accordion" => view! { <AccordionStory /> }.into_any(),
        _ => view! { <ChartStory /> }.into_any(),
    }
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let stories = TabsContext::new();
    let initial = story_from_search(&current_search());
    let initial = initial.unwrap_or_else(|| STORIES[0].0.to_string());

    Effect::new(move |_| {
        if let Some(id) = stories.active_id() {
            replace_search(&story_search(&id));
        }
    });

    let story_tab = move |id: &'static str, title: &'static str, icon_name: &'static str| {
        view! {
            <Tab
                id=id
                title=title
                default_active={initial == id}
                icon=move || icon(icon_name)
                tabs=stories
            >
                {story_view(id)}
            </Tab>
        }
    };

    view! {
        <div class="showcase">
            <Flex class="showcase__header" justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="showcase__title">"Budget UI"</h1>
                <ThemeSelector />
            </Flex>
            <Tabs
                handle=stories
                class="showcase__stories"
                on_change=Callback::new(|id: String| log::info!("story: {}", id))
            >
                {STORIES
                    .iter()
                    .map(|&(id, title, icon_name)| story_tab(id, title, icon_name))
                    .collect_view()}
            </Tabs>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_from_search() {
        assert_eq!(story_from_search("?story=table"), Some("table".to_string()));
        assert_eq!(story_from_search("story=chart&x=1"), Some("chart".to_string()));
        assert_eq!(story_from_search("?story=nope"), None);
        assert_eq!(story_from_search(""), None);
    }

    #[test]
    fn test_story_search_round_trips() {
        let search = story_search("navigation");
        assert_eq!(search, "?story=navigation");
        assert_eq!(story_from_search(&search), Some("navigation".to_string()));
    }

    #[test]
    fn test_story_ids_unique() {
        let mut ids: Vec<_> = STORIES.iter().map(|(id, _, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STORIES.len());
    }
}
