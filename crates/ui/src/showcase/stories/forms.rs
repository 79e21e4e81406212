use crate::shared::components::ui::{AmountInput, Badge, CountBadge, Dropdown, DropdownOption, Input, StatusIcon};
use crate::showcase::fixtures::fixtures;
use contracts::enums::{BadgeVariant, StatusKind};
use contracts::shared::format::{format_money, format_percent};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

/// Status badges, count badges and per-category budget status.
#[component]
pub fn BadgesStory() -> impl IntoView {
    let unread = RwSignal::new(7u32);

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Flex gap=FlexGap::Small>
                {BadgeVariant::all()
                    .into_iter()
                    .map(|kind| view! { <Badge kind=kind>{kind.as_str()}</Badge> })
                    .collect_view()}
                // Unknown string variants fall back to neutral.
                <Badge variant="sparkly">"fallback"</Badge>
            </Flex>
            <Flex gap=FlexGap::Small>
                <span>"Uncategorised"</span>
                <CountBadge count=unread />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| unread.update(|n| *n += 40)>
                    "+40"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| unread.set(0)>
                    "Clear"
                </Button>
            </Flex>
            <Flex gap=FlexGap::Small>
                {StatusKind::all()
                    .into_iter()
                    .map(|kind| view! { <StatusIcon kind=kind show_label=true /> })
                    .collect_view()}
            </Flex>
            <ul class="story__categories">
                {fixtures()
                    .categories
                    .iter()
                    .map(|category| {
                        let status = category.status();
                        let usage = if category.limit > 0.0 { category.spent / category.limit } else { 0.0 };
                        let variant = BadgeVariant::for_amount(category.limit - category.spent);
                        view! {
                            <li class="story__category">
                                <StatusIcon kind=status />
                                <span class="story__category-name">{category.name.clone()}</span>
                                <span>{format!("{} / {}", format_money(category.spent), format_money(category.limit))}</span>
                                <Badge kind=variant>{format_percent(usage)}</Badge>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Flex>
    }
}

fn period_options() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("week", "This week"),
        DropdownOption::new("month", "This month"),
        DropdownOption::new("quarter", "This quarter"),
        DropdownOption::new("year", "This year").disabled(),
    ]
}

/// Text, amount and dropdown inputs for a new transaction.
#[component]
pub fn FormsStory() -> impl IntoView {
    let payee = RwSignal::new(String::new());
    let amount = RwSignal::new(None::<f64>);
    let period = RwSignal::new(Some("month".to_string()));

    let payee_error = Signal::derive(move || {
        let value = payee.get();
        (!value.is_empty() && value.trim().len() < 2).then(|| "Payee is too short".to_string())
    });

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Input
                label="Payee"
                value=payee
                on_input=Callback::new(move |v: String| payee.set(v))
                placeholder="Who was paid?"
                hint="At least two characters"
                error=payee_error
                required=true
            />
            <AmountInput
                label="Amount"
                currency="₽"
                initial=12.5
                on_change=Callback::new(move |v: Option<f64>| amount.set(v))
            />
            <AmountInput label="Monthly limit" currency="₽" non_negative=true />
            <Dropdown
                options=Signal::derive(period_options)
                selected=Signal::derive(move || period.get())
                placeholder="Period"
                icon_name="calendar"
                on_select=Callback::new(move |v: String| period.set(Some(v)))
            />
            <p class="story__meta">
                {move || format!(
                    "payee: {:?}, amount: {}, period: {}",
                    payee.get(),
                    amount.get().map(format_money).unwrap_or_else(|| "—".to_string()),
                    period.get().unwrap_or_default()
                )}
            </p>
        </Flex>
    }
}
