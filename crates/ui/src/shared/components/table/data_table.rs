//! Таблица с сортировкой по клику на заголовок и строкой итогов.
//!
//! Колонки и строки приходят из `contracts::shared::table`; денежные ячейки
//! рендерятся через `TableCellMoney`, остальные как текст.

use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_money::TableCellMoney;
use contracts::shared::table::{self as model, column_totals, sort_rows, CellValue, SortState, TableColumn};
use leptos::prelude::*;
use thaw::*;

/// Строки в порядке текущей сортировки
pub(crate) fn sorted_rows(
    columns: &[TableColumn],
    rows: &[model::TableRow],
    sort: &SortState,
) -> Vec<model::TableRow> {
    let mut rows = rows.to_vec();
    sort_rows(columns, &mut rows, sort);
    rows
}

#[component]
pub fn DataTable(
    #[prop(into)]
    columns: Signal<Vec<TableColumn>>,
    #[prop(into)]
    rows: Signal<Vec<model::TableRow>>,
    /// Строка итогов по денежным колонкам
    #[prop(optional)]
    show_totals: bool,
    /// Состояние сортировки, если им управляет родитель
    #[prop(optional)]
    sort: Option<RwSignal<SortState>>,
    /// Клик по строке (id строки)
    #[prop(optional)]
    on_row_click: Option<Callback<String>>,
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView {
    let sort = sort.unwrap_or_else(|| RwSignal::new(SortState::default()));

    let visible_rows = Memo::new(move |_| {
        columns.with(|cols| rows.with(|rows| sort.with(|s| sorted_rows(cols, rows, s))))
    });

    let on_sort = Callback::new(move |key: String| {
        sort.update(|s| *s = s.toggle(&key));
        log::debug!("DataTable: sort by '{}'", key);
    });

    let render_cell = move |column: &TableColumn, value: &CellValue| match value {
        CellValue::Money(v) => {
            let v = *v;
            view! { <TableCellMoney value=Signal::derive(move || Some(v)) /> }.into_any()
        }
        other => {
            let class = column.align.css_class();
            let text = other.display();
            view! {
                <TableCell class=class>
                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    };

    view! {
        <Table class="data-table">
            <TableHeader>
                <TableRow>
                    {move || {
                        columns
                            .get()
                            .into_iter()
                            .map(|column| view! {
                                <SortableHeaderCell column=column sort=sort on_sort=on_sort />
                            })
                            .collect_view()
                    }}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let cols = columns.get();
                    let rows = visible_rows.get();
                    if rows.is_empty() {
                        let text = empty_text.get().unwrap_or_else(|| "No data".to_string());
                        return view! {
                            <TableRow>
                                <TableCell class="data-table__empty">{text}</TableCell>
                            </TableRow>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|row| {
                            let row_id = row.id.clone();
                            let cells = cols
                                .iter()
                                .enumerate()
                                .map(|(idx, column)| render_cell(column, row.cell(idx)))
                                .collect_view();
                            view! {
                                <TableRow
                                    class="data-table__row"
                                    on:click=move |_| {
                                        if let Some(handler) = on_row_click {
                                            handler.run(row_id.clone());
                                        }
                                    }
                                >
                                    {cells}
                                </TableRow>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                {move || show_totals.then(|| {
                    let cols = columns.get();
                    let totals = rows.with(|rows| column_totals(&cols, rows));
                    totals
                        .into_iter()
                        .enumerate()
                        .map(|(idx, total)| match total {
                            Some(sum) => view! {
                                <TableCellMoney value=Signal::derive(move || Some(sum)) bold=true />
                            }
                            .into_any(),
                            None => {
                                let label = if idx == 0 { "Total" } else { "" };
                                view! { <TableCell class="data-table__total-label">{label}</TableCell> }
                                    .into_any()
                            }
                        })
                        .collect_view()
                })
                .map(|cells| view! { <TableRow class="data-table__totals">{cells}</TableRow> })}
            </TableBody>
        </Table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::ColumnAlign;

    fn sample() -> (Vec<TableColumn>, Vec<model::TableRow>) {
        let columns = vec![
            TableColumn::new("category", "Category").sortable(),
            TableColumn::new("amount", "Amount").align(ColumnAlign::Right).sortable(),
        ];
        let rows = vec![
            model::TableRow {
                id: "1".into(),
                cells: vec![CellValue::Text("Rent".into()), CellValue::Money(-900.0)],
            },
            model::TableRow {
                id: "2".into(),
                cells: vec![CellValue::Text("Salary".into()), CellValue::Money(3000.0)],
            },
            model::TableRow {
                id: "3".into(),
                cells: vec![CellValue::Text("coffee".into()), CellValue::Money(-4.5)],
            },
        ];
        (columns, rows)
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let (columns, rows) = sample();
        let ids: Vec<_> = sorted_rows(&columns, &rows, &SortState::default())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_header_toggle_sequence() {
        let (columns, rows) = sample();
        let sort = SortState::default().toggle("amount");
        let ids: Vec<_> = sorted_rows(&columns, &rows, &sort).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);

        let sort = sort.toggle("amount");
        let ids: Vec<_> = sorted_rows(&columns, &rows, &sort).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
