//! Утилиты форматирования сумм и дат для ячеек таблиц, бейджей и легенд

use chrono::NaiveDate;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(4) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let mut reversed = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            reversed.push(' ');
        }
        reversed.push(c);
    }
    let formatted_integer: String = reversed.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение: 2 знака после запятой и разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Денежное значение с символом валюты: `1 234.50 €`
pub fn format_money_with_currency(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_money(value)
    } else {
        format!("{} {}", format_money(value), currency)
    }
}

/// Процент с одним знаком: 0.1234 → "12.3%"
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Разбирает введённую пользователем сумму.
///
/// Допускает пробелы между разрядами и запятую вместо точки:
/// `"1 234,50"` → `1234.5`. Пустая строка и мусор → `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned.matches('.').count() > 1 {
        return None;
    }
    let digits = cleaned.trim_start_matches(['+', '-']);
    if digits.is_empty() || cleaned.len() - digits.len() > 1 {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') || digits == "." {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Дата в формате DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn test_format_money_with_currency() {
        assert_eq!(format_money_with_currency(42.0, "€"), "42.00 €");
        assert_eq!(format_money_with_currency(42.0, ""), "42.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.1234), "12.3%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 234,50"), Some(1234.5));
        assert_eq!(parse_amount("1234.5"), Some(1234.5));
        assert_eq!(parse_amount("-12"), Some(-12.0));
        assert_eq!(parse_amount("+5"), Some(5.0));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("--5"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2024");
    }
}
