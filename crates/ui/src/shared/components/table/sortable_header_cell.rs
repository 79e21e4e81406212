//! Сортируемая ячейка заголовка таблицы

use contracts::shared::table::{ColumnAlign, SortState, TableColumn};
use leptos::prelude::*;
use thaw::*;

/// Класс индикатора: активная колонка подсвечивается
pub(crate) fn sort_class(sort: &SortState, column: &str) -> &'static str {
    if sort.column.as_deref() == Some(column) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

pub(crate) fn aria_sort(sort: &SortState, column: &str) -> &'static str {
    match (sort.column.as_deref() == Some(column), sort.ascending) {
        (true, true) => "ascending",
        (true, false) => "descending",
        (false, _) => "none",
    }
}

/// Заголовок колонки с индикатором сортировки (▲▼).
/// Клик по несортируемой колонке ничего не делает.
#[component]
pub fn SortableHeaderCell(
    column: TableColumn,

    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let min_width = column.min_width.unwrap_or(100.0);
    let sortable = column.sortable;
    let key = StoredValue::new(column.key.clone());

    let header_style = if column.align == ColumnAlign::Right {
        "justify-content: flex-end; padding-right: 12px;"
    } else {
        "padding-right: 12px;"
    };

    let handle_click = move |_| {
        if sortable {
            on_sort.run(key.get_value());
        }
    };

    view! {
        <TableHeaderCell resizable=resizable min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                class:table__sortable-header--clickable=sortable
                style=header_style
                aria-sort=move || sortable.then(|| key.with_value(|k| sort.with(|s| aria_sort(s, k))))
                on:click=handle_click
            >
                {column.label}
                {sortable.then(|| view! {
                    <span class=move || key.with_value(|k| sort.with(|s| sort_class(s, k)))>
                        {move || key.with_value(|k| sort.with(|s| s.indicator(k)))}
                    </span>
                })}
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_class_and_aria() {
        let sort = SortState::default().toggle("amount");
        assert_eq!(sort_class(&sort, "amount"), "table__sort-indicator table__sort-indicator--active");
        assert_eq!(sort_class(&sort, "date"), "table__sort-indicator");
        assert_eq!(aria_sort(&sort, "amount"), "ascending");
        assert_eq!(aria_sort(&sort.toggle("amount"), "amount"), "descending");
        assert_eq!(aria_sort(&sort, "date"), "none");
    }
}
