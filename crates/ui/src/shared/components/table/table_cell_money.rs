//! Ячейка таблицы для денежных значений
//!
//! # Примеры
//!
//! ```text
//! // Базовое использование
//! <TableCellMoney value=amount />
//!
//! // С валютой
//! <TableCellMoney value=amount show_currency=true currency="$" />
//!
//! // Итоговая строка
//! <TableCellMoney value=total bold=true />
//! ```

use contracts::shared::format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Класс окраски суммы по знаку; ноль остается нейтральным
pub(crate) fn sign_class(value: Option<f64>, color_by_sign: bool) -> &'static str {
    match value {
        Some(v) if color_by_sign && v > 0.0 => "money money--positive",
        Some(v) if color_by_sign && v < 0.0 => "money money--negative",
        _ => "money",
    }
}

pub(crate) fn money_text(value: Option<f64>, currency: Option<&str>) -> String {
    match (value, currency) {
        (Some(v), Some(c)) => format!("{} {}", format_money(v), c),
        (Some(v), None) => format_money(v),
        (None, _) => "—".to_string(),
    }
}

/// Ячейка с денежным значением
///
/// Автоматически:
/// - Форматирует число с 2 знаками и разделителем тысяч
/// - Выравнивает по правому краю
/// - Окрашивает доходы и расходы по знаку
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Символ валюты (по умолчанию "₽")
    #[prop(optional, default = "₽")]
    currency: &'static str,

    #[prop(optional, default = false)]
    show_currency: bool,

    #[prop(optional, default = true)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let text = move || money_text(value.get(), show_currency.then_some(currency));
    let class = move || {
        let base = sign_class(value.get(), color_by_sign);
        if bold {
            format!("{} money--bold", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <TableCell class="text-right">
            <span class=class>{text}</span>
        </TableCell>
    }
}
