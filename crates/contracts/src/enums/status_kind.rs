use super::ParsePropError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статусы для иконок состояния (бюджет превышен, платёж ожидается и т.д.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
    Pending,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
            StatusKind::Pending => "pending",
        }
    }

    /// Name understood by the icon helper in the ui crate.
    pub fn icon_name(&self) -> &'static str {
        match self {
            StatusKind::Success => "check-circle",
            StatusKind::Warning => "alert-triangle",
            StatusKind::Error => "x-circle",
            StatusKind::Info => "info",
            StatusKind::Pending => "clock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Success => "Success",
            StatusKind::Warning => "Warning",
            StatusKind::Error => "Error",
            StatusKind::Info => "Information",
            StatusKind::Pending => "Pending",
        }
    }

    pub fn all() -> [StatusKind; 5] {
        [
            StatusKind::Success,
            StatusKind::Warning,
            StatusKind::Error,
            StatusKind::Info,
            StatusKind::Pending,
        ]
    }
}

impl FromStr for StatusKind {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::all()
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| ParsePropError::new("status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip_names() {
        for kind in StatusKind::all() {
            assert_eq!(kind.as_str().parse::<StatusKind>(), Ok(kind));
        }
        assert!("ok".parse::<StatusKind>().is_err());
    }
}
