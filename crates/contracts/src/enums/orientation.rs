use super::ParsePropError;
use crate::shared::registry::Step;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Направление раскладки тулбара, передаётся от родителя детям
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Value for the `aria-orientation` attribute.
    pub fn aria(&self) -> &'static str {
        self.as_str()
    }

    /// Maps a `KeyboardEvent.key` to a navigation step. Only the arrow pair
    /// matching the orientation moves focus; Home/End work in both.
    pub fn step_for_key(&self, key: &str) -> Option<Step> {
        match (self, key) {
            (Orientation::Horizontal, "ArrowRight") | (Orientation::Vertical, "ArrowDown") => {
                Some(Step::Next)
            }
            (Orientation::Horizontal, "ArrowLeft") | (Orientation::Vertical, "ArrowUp") => {
                Some(Step::Prev)
            }
            (_, "Home") => Some(Step::First),
            (_, "End") => Some(Step::Last),
            _ => None,
        }
    }
}

impl FromStr for Orientation {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParsePropError::new("orientation", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!(" Horizontal ".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(ParsePropError::new("orientation", "diagonal"))
        );
    }

    #[test]
    fn test_step_for_key() {
        let h = Orientation::Horizontal;
        let v = Orientation::Vertical;
        assert_eq!(h.step_for_key("ArrowRight"), Some(Step::Next));
        assert_eq!(h.step_for_key("ArrowDown"), None);
        assert_eq!(v.step_for_key("ArrowDown"), Some(Step::Next));
        assert_eq!(v.step_for_key("ArrowUp"), Some(Step::Prev));
        assert_eq!(v.step_for_key("ArrowLeft"), None);
        assert_eq!(v.step_for_key("End"), Some(Step::Last));
        assert_eq!(h.step_for_key("Home"), Some(Step::First));
    }
}
