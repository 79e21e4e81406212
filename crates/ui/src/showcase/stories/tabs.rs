use crate::shared::components::tabs::{Tab, Tabs, TabsContext};
use crate::shared::components::ui::StatusIcon;
use crate::shared::icons::icon;
use crate::showcase::fixtures::{fixtures, Account};
use contracts::enums::StatusKind;
use contracts::shared::format::format_money_with_currency;
use contracts::shared::registry::RegistryState;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

fn registry_summary(state: &RegistryState, count: usize) -> String {
    match state {
        RegistryState::Empty => "No tabs registered".to_string(),
        RegistryState::AllDisabled => format!("{} tabs, all disabled", count),
        RegistryState::HasActive(id) => format!("{} tabs, active: {}", count, id),
    }
}

/// Account tabs: static fixtures plus tabs added and removed at runtime, all
/// wired through a handle owned by the story.
#[component]
pub fn TabsStory() -> impl IntoView {
    let handle = TabsContext::new();
    let accounts = RwSignal::new(fixtures().accounts.clone());
    let next_number = RwSignal::new(1u32);
    let last_change = RwSignal::new(None::<String>);

    let add_account = move |_| {
        let n = next_number.get_untracked();
        next_number.set(n + 1);
        accounts.update(|list| {
            list.push(Account {
                id: format!("envelope-{}", n),
                title: format!("Envelope {}", n),
                color: None,
                balance: 0.0,
                disabled: false,
                default_active: false,
            })
        });
    };
    let remove_last = move |_| {
        accounts.update(|list| {
            list.pop();
        });
    };
    let toggle_first = move |_| {
        accounts.update(|list| {
            if let Some(first) = list.first_mut() {
                first.disabled = !first.disabled;
            }
        });
    };

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Flex gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Primary on_click=add_account>
                    {icon("plus")} " Add envelope"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=remove_last>
                    {icon("trash")} " Remove last"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=toggle_first>
                    "Toggle first"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| handle.registry.clear_selection()
                >
                    "Reset selection"
                </Button>
            </Flex>
            <p class="story__meta">
                {move || registry_summary(&handle.registry.state(), handle.registry.len())}
                {move || last_change.get().map(|id| format!(" (last change: {})", id))}
            </p>
            <Tabs
                handle=handle
                on_change=Callback::new(move |id: String| last_change.set(Some(id)))
            >
                <For
                    each=move || accounts.get()
                    key=|account| account.id.clone()
                    children=move |account| {
                        let balance = account.balance;
                        let (status, money_class) = if balance < 0.0 {
                            (StatusKind::Warning, "money money--negative")
                        } else {
                            (StatusKind::Success, "money money--positive")
                        };
                        let title = account.title.clone();
                        let id = account.id.clone();
                        let disabled = Signal::derive(move || {
                            accounts.with(|list| list.iter().find(|a| a.id == id).map(|a| a.disabled))
                        });
                        view! {
                            <Tab
                                id=account.id.clone()
                                title=account.title.clone()
                                color=account.color.clone()
                                disabled=disabled
                                default_active=account.default_active
                                tabs=handle
                            >
                                <Flex gap=FlexGap::Small clone:title>
                                    <StatusIcon kind=status />
                                    <span>{title.clone()}</span>
                                    <span class=money_class>
                                        {format_money_with_currency(balance, "₽")}
                                    </span>
                                </Flex>
                            </Tab>
                        }
                    }
                />
            </Tabs>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_summary() {
        assert_eq!(registry_summary(&RegistryState::Empty, 0), "No tabs registered");
        assert_eq!(registry_summary(&RegistryState::AllDisabled, 2), "2 tabs, all disabled");
        assert_eq!(
            registry_summary(&RegistryState::HasActive("savings".into()), 3),
            "3 tabs, active: savings"
        );
    }
}
