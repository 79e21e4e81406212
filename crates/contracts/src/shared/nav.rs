use serde::{Deserialize, Serialize};

/// Пункт навигационного меню; пункты с детьми открывают выпадающую панель
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            href: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Путь ключей от корня до активного пункта (включительно).
/// Пустой вектор, если ключ не найден.
pub fn active_trail(items: &[NavItem], active_key: &str) -> Vec<String> {
    for item in items {
        if item.key == active_key {
            return vec![item.key.clone()];
        }
        let nested = active_trail(&item.children, active_key);
        if !nested.is_empty() {
            let mut trail = Vec::with_capacity(nested.len() + 1);
            trail.push(item.key.clone());
            trail.extend(nested);
            return trail;
        }
    }
    Vec::new()
}

/// Поиск пункта по ключу в дереве
pub fn find_nav_item<'a>(items: &'a [NavItem], key: &str) -> Option<&'a NavItem> {
    items.iter().find_map(|item| {
        if item.key == key {
            Some(item)
        } else {
            find_nav_item(&item.children, key)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<NavItem> {
        vec![
            NavItem::new("overview", "Overview").icon("home"),
            NavItem::new("budgets", "Budgets").children(vec![
                NavItem::new("monthly", "Monthly"),
                NavItem::new("categories", "Categories")
                    .children(vec![NavItem::new("groceries", "Groceries")]),
            ]),
            NavItem::new("reports", "Reports"),
        ]
    }

    #[test]
    fn test_active_trail() {
        assert_eq!(active_trail(&menu(), "overview"), vec!["overview"]);
        assert_eq!(
            active_trail(&menu(), "groceries"),
            vec!["budgets", "categories", "groceries"]
        );
        assert!(active_trail(&menu(), "nope").is_empty());
    }

    #[test]
    fn test_find_nav_item() {
        let items = menu();
        assert_eq!(find_nav_item(&items, "monthly").map(|i| i.label.as_str()), Some("Monthly"));
        assert!(find_nav_item(&items, "budgets").is_some_and(NavItem::has_children));
        assert!(find_nav_item(&items, "nope").is_none());
    }

    #[test]
    fn test_nav_json_defaults() {
        let item: NavItem = serde_json::from_str(
            r#"{"key":"reports","label":"Reports","children":[{"key":"export","label":"Export","disabled":true}]}"#,
        )
        .unwrap();
        assert!(item.icon.is_none());
        assert!(!item.disabled);
        assert!(item.children[0].disabled);
        assert!(!item.children[0].has_children());
    }
}
