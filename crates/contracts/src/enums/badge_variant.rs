use super::ParsePropError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Варианты оформления бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Neutral => "neutral",
        }
    }

    /// BEM modifier class, e.g. `badge--success`.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }

    /// Variant for a signed amount: income is green, spending red.
    pub fn for_amount(value: f64) -> Self {
        if value > 0.0 {
            BadgeVariant::Success
        } else if value < 0.0 {
            BadgeVariant::Error
        } else {
            BadgeVariant::Neutral
        }
    }

    pub fn all() -> [BadgeVariant; 5] {
        [
            BadgeVariant::Primary,
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Error,
            BadgeVariant::Neutral,
        ]
    }
}

impl FromStr for BadgeVariant {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeVariant::all()
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| ParsePropError::new("badge variant", s))
    }
}

/// Текст счётчика с ограничением сверху: 7 → "7", 120 при max=99 → "99+"
pub fn format_count(count: u32, max: u32) -> String {
    if max > 0 && count > max {
        format!("{}+", max)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("success".parse::<BadgeVariant>(), Ok(BadgeVariant::Success));
        assert!("purple".parse::<BadgeVariant>().is_err());
        assert_eq!(
            "purple".parse::<BadgeVariant>().unwrap_or_default(),
            BadgeVariant::Neutral
        );
    }

    #[test]
    fn test_for_amount() {
        assert_eq!(BadgeVariant::for_amount(10.0), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_amount(-0.01), BadgeVariant::Error);
        assert_eq!(BadgeVariant::for_amount(0.0), BadgeVariant::Neutral);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7, 99), "7");
        assert_eq!(format_count(99, 99), "99");
        assert_eq!(format_count(120, 99), "99+");
        assert_eq!(format_count(120, 0), "120");
    }
}
