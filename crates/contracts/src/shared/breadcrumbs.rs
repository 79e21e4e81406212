use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// Элемент отображаемой цепочки: ссылка или свёрнутая середина
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crumb {
    Item {
        item: BreadcrumbItem,
        /// Last element of the trail, rendered as plain text.
        current: bool,
    },
    Ellipsis {
        hidden: usize,
    },
}

/// Сворачивает середину длинной цепочки.
///
/// При `max_visible` = 0 или если элементов не больше лимита, показывает всё.
/// Иначе оставляет первый элемент, многоточие и последние `max_visible - 1`
/// (но не меньше одного, текущая страница видна всегда).
pub fn collapse_breadcrumbs(items: &[BreadcrumbItem], max_visible: usize) -> Vec<Crumb> {
    let last = items.len().saturating_sub(1);
    let item = |idx: usize| Crumb::Item {
        item: items[idx].clone(),
        current: idx == last,
    };

    if max_visible == 0 || items.len() <= max_visible {
        return (0..items.len()).map(item).collect();
    }

    let tail = max_visible.saturating_sub(1).max(1);
    let hidden = items.len() - 1 - tail;
    let mut crumbs = Vec::with_capacity(tail + 2);
    crumbs.push(item(0));
    if hidden > 0 {
        crumbs.push(Crumb::Ellipsis { hidden });
    }
    crumbs.extend((items.len() - tail..items.len()).map(item));
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trail(n: usize) -> Vec<BreadcrumbItem> {
        (0..n).map(|i| BreadcrumbItem::link(format!("L{}", i), format!("/{}", i))).collect()
    }

    fn labels(crumbs: &[Crumb]) -> Vec<String> {
        crumbs
            .iter()
            .map(|c| match c {
                Crumb::Item { item, current: true } => format!("[{}]", item.label),
                Crumb::Item { item, .. } => item.label.clone(),
                Crumb::Ellipsis { hidden } => format!("…{}", hidden),
            })
            .collect()
    }

    #[test]
    fn test_short_trail_untouched() {
        assert_eq!(labels(&collapse_breadcrumbs(&trail(3), 4)), vec!["L0", "L1", "[L2]"]);
        assert_eq!(labels(&collapse_breadcrumbs(&trail(3), 0)), vec!["L0", "L1", "[L2]"]);
    }

    #[test]
    fn test_long_trail_collapses_middle() {
        assert_eq!(
            labels(&collapse_breadcrumbs(&trail(6), 3)),
            vec!["L0", "…3", "L4", "[L5]"]
        );
    }

    #[test]
    fn test_max_one_keeps_first_and_current() {
        assert_eq!(labels(&collapse_breadcrumbs(&trail(4), 1)), vec!["L0", "…2", "[L3]"]);
    }

    #[test]
    fn test_empty() {
        assert!(collapse_breadcrumbs(&[], 3).is_empty());
    }
}
