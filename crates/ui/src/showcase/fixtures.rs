//! Demo budget data for the stories, parsed once from `fixtures.json`.

use chrono::NaiveDate;
use contracts::enums::StatusKind;
use contracts::shared::breadcrumbs::BreadcrumbItem;
use contracts::shared::nav::NavItem;
use contracts::shared::pie::PieSlice;
use contracts::shared::table::{CellValue, ColumnAlign, TableColumn, TableRow};
use once_cell::sync::Lazy;
use serde::Deserialize;

const RAW_FIXTURES: &str = include_str!("fixtures.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    pub accounts: Vec<Account>,
    pub categories: Vec<CategorySpend>,
    pub transactions: Vec<Transaction>,
    pub nav: Vec<NavItem>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    pub balance: f64,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub default_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySpend {
    pub name: String,
    pub spent: f64,
    pub limit: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl CategorySpend {
    pub fn status(&self) -> StatusKind {
        budget_status(self.spent, self.limit)
    }
}

/// Over the limit is an error, from 80% of it a warning.
pub fn budget_status(spent: f64, limit: f64) -> StatusKind {
    if limit <= 0.0 {
        return if spent > 0.0 { StatusKind::Error } else { StatusKind::Info };
    }
    let ratio = spent / limit;
    if ratio > 1.0 {
        StatusKind::Error
    } else if ratio >= 0.8 {
        StatusKind::Warning
    } else {
        StatusKind::Success
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub payee: String,
    pub category: Option<String>,
    pub amount: Option<f64>,
}

static FIXTURES: Lazy<Fixtures> = Lazy::new(|| {
    serde_json::from_str(RAW_FIXTURES).unwrap_or_else(|err| {
        log::error!("showcase fixtures: {}", err);
        Fixtures::default()
    })
});

pub fn fixtures() -> &'static Fixtures {
    &FIXTURES
}

pub fn transaction_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("date", "Date").sortable(),
        TableColumn::new("payee", "Payee").sortable(),
        TableColumn::new("category", "Category").sortable(),
        TableColumn::new("amount", "Amount").align(ColumnAlign::Right).sortable(),
    ]
}

pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TableRow> {
    transactions
        .iter()
        .map(|t| TableRow {
            id: t.id.clone(),
            cells: vec![
                CellValue::Date(t.date),
                CellValue::Text(t.payee.clone()),
                t.category.clone().map(CellValue::Text).unwrap_or(CellValue::Empty),
                t.amount.map(CellValue::Money).unwrap_or(CellValue::Empty),
            ],
        })
        .collect()
}

pub fn spending_slices(categories: &[CategorySpend]) -> Vec<PieSlice> {
    categories
        .iter()
        .map(|c| {
            let slice = PieSlice::new(c.name.clone(), c.spent);
            match &c.color {
                Some(color) => slice.with_color(color.clone()),
                None => slice,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{column_totals, sort_rows, SortState};

    fn parsed() -> Fixtures {
        serde_json::from_str(RAW_FIXTURES).expect("fixtures.json must parse")
    }

    #[test]
    fn test_fixtures_parse() {
        let f = parsed();
        assert_eq!(f.accounts.len(), 4);
        assert!(f.accounts.iter().any(|a| a.disabled));
        assert_eq!(f.nav.len(), 4);
        assert!(f.breadcrumbs.last().is_some_and(|b| b.href.is_none()));
    }

    #[test]
    fn test_budget_status_thresholds() {
        assert_eq!(budget_status(50.0, 100.0), StatusKind::Success);
        assert_eq!(budget_status(80.0, 100.0), StatusKind::Warning);
        assert_eq!(budget_status(100.0, 100.0), StatusKind::Warning);
        assert_eq!(budget_status(100.5, 100.0), StatusKind::Error);
        assert_eq!(budget_status(0.0, 0.0), StatusKind::Info);
        assert_eq!(budget_status(5.0, 0.0), StatusKind::Error);
    }

    #[test]
    fn test_transaction_rows_map_missing_values_to_empty() {
        let f = parsed();
        let rows = transaction_rows(&f.transactions);
        let pending = rows.iter().find(|r| r.id == "t7").expect("t7");
        assert_eq!(pending.cell(2), &CellValue::Empty);
        assert_eq!(pending.cell(3), &CellValue::Empty);
    }

    #[test]
    fn test_transactions_sort_and_total() {
        let f = parsed();
        let columns = transaction_columns();
        let mut rows = transaction_rows(&f.transactions);

        sort_rows(&columns, &mut rows, &SortState::default().toggle("amount"));
        assert_eq!(rows.first().map(|r| r.id.as_str()), Some("t2"));
        assert_eq!(rows.last().map(|r| r.id.as_str()), Some("t7"));

        let totals = column_totals(&columns, &rows);
        let amount_total = totals[3].expect("amount total");
        assert!((amount_total - 2522.31).abs() < 1e-6);
        assert_eq!(totals[1], None);
    }

    #[test]
    fn test_category_status() {
        let f = parsed();
        let status: Vec<_> = f.categories.iter().map(|c| c.status()).collect();
        assert_eq!(status[0], StatusKind::Warning);
        assert_eq!(status[3], StatusKind::Error);
        assert_eq!(status[5], StatusKind::Success);
    }
}
