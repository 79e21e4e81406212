//! Dropdown - trigger button with an option menu.
//!
//! Closes on outside click, on Escape and after a selection.

use crate::shared::dom::event_within;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Trigger caption: explicit label, else the selected option's label, else the placeholder.
pub(crate) fn trigger_text(
    options: &[DropdownOption],
    selected: Option<&str>,
    label: Option<String>,
    placeholder: &str,
) -> String {
    label
        .or_else(|| {
            selected.and_then(|value| {
                options
                    .iter()
                    .find(|o| o.value == value)
                    .map(|o| o.label.clone())
            })
        })
        .unwrap_or_else(|| placeholder.to_string())
}

/// Window click handling: only an open menu clicked outside its own root
/// closes. Clicks inside are left to the trigger and the items.
pub(crate) fn closes_on_window_click(open: bool, inside: bool) -> bool {
    open && !inside
}

#[component]
pub fn Dropdown(
    #[prop(into)]
    options: Signal<Vec<DropdownOption>>,
    /// Currently selected value, highlighted in the menu
    #[prop(optional, into)]
    selected: MaybeProp<String>,
    /// Fixed trigger caption (otherwise the selected label is shown)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Caption when nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Icon name rendered before the caption
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    /// Fired with the option value
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let root = NodeRef::<html::Div>::new();

    // Clicks are not stopped, so every other open dropdown sees them too.
    let listener = window_event_listener(ev::click, move |ev| {
        let inside = root
            .get_untracked()
            .is_some_and(|el| event_within(&ev, &el));
        if closes_on_window_click(is_open.get_untracked(), inside) {
            is_open.set(false);
        }
    });
    on_cleanup(move || listener.remove());

    let caption = move || {
        options.with(|opts| {
            trigger_text(
                opts,
                selected.get().as_deref(),
                label.get(),
                &placeholder.get().unwrap_or_else(|| "Select…".to_string()),
            )
        })
    };

    let choose = move |option: DropdownOption| {
        if option.disabled {
            return;
        }
        is_open.set(false);
        if let Some(handler) = on_select {
            handler.run(option.value);
        }
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div
            node_ref=root
            class=move || format!("dropdown {}", additional_class())
            class:dropdown--open=move || is_open.get()
            on:keydown=move |ev: ev::KeyboardEvent| {
                if ev.key() == "Escape" {
                    is_open.set(false);
                }
            }
        >
            <button
                type="button"
                class="dropdown__trigger"
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || icon_name.get().map(|name| icon(&name))}
                <span class="dropdown__caption">{caption}</span>
                {move || if is_open.get() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>

            <Show when=move || is_open.get()>
                <ul class="dropdown__menu" role="listbox">
                    {move || {
                        let current = selected.get();
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let is_selected = current.as_deref() == Some(option.value.as_str());
                                let is_disabled = option.disabled;
                                let text = option.label.clone();
                                view! {
                                    <li
                                        class="dropdown__item"
                                        class:dropdown__item--selected=is_selected
                                        class:dropdown__item--disabled=is_disabled
                                        role="option"
                                        aria-selected=is_selected.to_string()
                                        aria-disabled=is_disabled.to_string()
                                        on:click=move |_| choose(option.clone())
                                    >
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("m", "Monthly"),
            DropdownOption::new("y", "Yearly").disabled(),
        ]
    }

    #[test]
    fn test_trigger_text() {
        assert_eq!(trigger_text(&options(), Some("m"), None, "Pick"), "Monthly");
        assert_eq!(trigger_text(&options(), Some("zzz"), None, "Pick"), "Pick");
        assert_eq!(trigger_text(&options(), None, None, "Pick"), "Pick");
        assert_eq!(
            trigger_text(&options(), Some("m"), Some("Period".into()), "Pick"),
            "Period"
        );
    }

    #[test]
    fn test_trigger_click_closes_other_open_dropdowns() {
        // "period" is open; the user clicks the trigger of "theme".
        let mut period_open = true;
        let mut theme_open = false;

        if closes_on_window_click(period_open, false) {
            period_open = false;
        }
        theme_open = !theme_open;
        if closes_on_window_click(theme_open, true) {
            theme_open = false;
        }

        assert!(!period_open);
        assert!(theme_open);
    }

    #[test]
    fn test_window_click_rules() {
        assert!(closes_on_window_click(true, false));
        assert!(!closes_on_window_click(true, true));
        assert!(!closes_on_window_click(false, false));
    }
}
