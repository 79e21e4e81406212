use crate::shared::components::{DataTable, PieChart};
use crate::showcase::fixtures::{fixtures, spending_slices, transaction_columns, transaction_rows};
use contracts::shared::pie::PieSlice;
use contracts::shared::table::{SortState, TableRow};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

/// Transactions table with header sorting and a totals row.
#[component]
pub fn TableStory() -> impl IntoView {
    let sort = RwSignal::new(SortState::default().toggle("date"));
    let selected = RwSignal::new(None::<String>);
    let rows = Signal::derive(|| transaction_rows(&fixtures().transactions));

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <p class="story__meta">
                {move || {
                    let sort = sort.get();
                    let column = sort.column.unwrap_or_else(|| "none".to_string());
                    let dir = if sort.ascending { "asc" } else { "desc" };
                    format!("sorted by {} {}", column, dir)
                }}
                {move || selected.get().map(|id| format!(", row {} clicked", id))}
            </p>
            <DataTable
                columns=Signal::derive(transaction_columns)
                rows=rows
                show_totals=true
                sort=sort
                on_row_click=Callback::new(move |id: String| selected.set(Some(id)))
            />
            <DataTable
                columns=Signal::derive(transaction_columns)
                rows=Signal::derive(Vec::<TableRow>::new)
                empty_text="No transactions this month"
            />
        </Flex>
    }
}

/// Spending breakdown: pie, donut, single category and empty state.
#[component]
pub fn ChartStory() -> impl IntoView {
    let slices = RwSignal::new(spending_slices(&fixtures().categories));
    let only_rent = Signal::derive(|| vec![PieSlice::new("Rent", 1200.0), PieSlice::new("Gifts", 0.0)]);

    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| slices.update(|s| {
                        s.pop();
                    })
                >
                    "Drop a category"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| slices.set(spending_slices(&fixtures().categories))
                >
                    "Reset"
                </Button>
            </Flex>
            <Flex gap=FlexGap::Large>
                <PieChart slices=slices title="May spending" />
                <PieChart slices=slices hole=0.6 size=160.0 show_legend=false />
                <PieChart slices=only_rent size=120.0 hole=0.5 />
                <PieChart slices=Signal::derive(Vec::<PieSlice>::new) size=120.0 empty_text="Nothing spent yet" />
            </Flex>
        </Flex>
    }
}
