//! Модель данных таблицы: колонки, значения ячеек, сортировка и итоги

use super::format::{format_date, format_money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColumnAlign::Left => "text-left",
            ColumnAlign::Center => "text-center",
            ColumnAlign::Right => "text-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub align: ColumnAlign,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub min_width: Option<f64>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: ColumnAlign::Left,
            sortable: false,
            min_width: None,
        }
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Text(String),
    Money(f64),
    Date(NaiveDate),
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Money(v) => format_money(*v),
            CellValue::Date(d) => format_date(*d),
            CellValue::Empty => "—".to_string(),
        }
    }

    pub fn as_money(&self) -> Option<f64> {
        match self {
            CellValue::Money(v) => Some(*v),
            _ => None,
        }
    }

    /// Пустые значения всегда в конце, разнотипные по порядку вариантов
    fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (CellValue::Money(a), CellValue::Money(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    /// Нет значения: пустая ячейка или сумма NaN
    fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Money(v) => v.is_nan(),
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Text(_) => 0,
            CellValue::Money(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Empty => 3,
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<CellValue>,
}

impl TableRow {
    pub fn cell(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Клик по заголовку: та же колонка меняет направление, новая сортируется по возрастанию
    pub fn toggle(&self, column: &str) -> SortState {
        if self.column.as_deref() == Some(column) {
            SortState {
                column: self.column.clone(),
                ascending: !self.ascending,
            }
        } else {
            SortState {
                column: Some(column.to_string()),
                ascending: true,
            }
        }
    }

    /// Индикатор сортировки для заголовка
    pub fn indicator(&self, column: &str) -> &'static str {
        match (self.column.as_deref() == Some(column), self.ascending) {
            (true, true) => " ▲",
            (true, false) => " ▼",
            (false, _) => " ⇅",
        }
    }
}

/// Сортирует строки по состоянию сортировки. Пустые ячейки и суммы NaN
/// остаются внизу в обоих направлениях; сортировка стабильная.
pub fn sort_rows(columns: &[TableColumn], rows: &mut [TableRow], sort: &SortState) {
    let Some(idx) = sort
        .column
        .as_deref()
        .and_then(|key| columns.iter().position(|c| c.key == key))
    else {
        return;
    };

    rows.sort_by(|a, b| {
        let (ca, cb) = (a.cell(idx), b.cell(idx));
        match (ca.is_blank(), cb.is_blank()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ if sort.ascending => ca.compare(cb),
            _ => ca.compare(cb).reverse(),
        }
    });
}

/// Итоги по денежным колонкам; для остальных `None`
pub fn column_totals(columns: &[TableColumn], rows: &[TableRow]) -> Vec<Option<f64>> {
    (0..columns.len())
        .map(|idx| {
            let mut values = rows.iter().filter_map(|r| r.cell(idx).as_money()).peekable();
            values.peek()?;
            Some(values.sum())
        })
        .collect()
}
