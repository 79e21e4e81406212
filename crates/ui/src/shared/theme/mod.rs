//! Theme management for the component library.
//!
//! Provides a context-based theme system with light, dark and high-contrast
//! themes. The preference is persisted in localStorage.

pub mod theme_select;

pub use theme_select::ThemeSelector;

use contracts::enums::ParsePropError;
use leptos::prelude::*;
use std::str::FromStr;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Contrast,
}

impl Theme {
    /// Theme name (CSS hook and localStorage value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Contrast => "contrast",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Contrast => "High contrast",
        }
    }

    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light.css",
            Theme::Dark => "/static/themes/dark.css",
            Theme::Contrast => "/static/themes/contrast.css",
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::Contrast]
    }
}

impl FromStr for Theme {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "contrast" => Ok(Theme::Contrast),
            _ => Err(ParsePropError::new("theme", s)),
        }
    }
}

const THEME_STORAGE_KEY: &str = "budget-ui-theme";

/// Stored value to theme; missing or unknown values give the default.
pub(crate) fn theme_from_stored(value: Option<String>) -> Theme {
    match value {
        None => Theme::default(),
        Some(v) => v.parse().unwrap_or_else(|err| {
            log::warn!("ThemeProvider: {}", err);
            Theme::default()
        }),
    }
}

fn load_theme_from_storage() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    theme_from_stored(stored)
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Swaps the theme stylesheet and sets `data-theme` on the body.
fn apply_theme_css(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", theme.css_path());
        let _ = head.append_child(&link);
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme, persist it and apply the stylesheet.
    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme: {}", theme.as_str());
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_css(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);
    apply_theme_css(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("contrast".parse::<Theme>(), Ok(Theme::Contrast));
        assert!("forest".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_from_stored_falls_back() {
        assert_eq!(theme_from_stored(None), Theme::Light);
        assert_eq!(theme_from_stored(Some("sepia".into())), Theme::Light);
        assert_eq!(theme_from_stored(Some("dark".into())), Theme::Dark);
    }
}
