pub mod badge_variant;
pub mod orientation;
pub mod status_kind;

pub use badge_variant::BadgeVariant;
pub use orientation::Orientation;
pub use status_kind::StatusKind;

/// Ошибка разбора строкового значения пропса в enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {prop} value: '{value}'")]
pub struct ParsePropError {
    pub prop: &'static str,
    pub value: String,
}

impl ParsePropError {
    pub fn new(prop: &'static str, value: impl Into<String>) -> Self {
        Self {
            prop,
            value: value.into(),
        }
    }
}
