use super::{use_theme, Theme};
use crate::shared::components::ui::{Dropdown, DropdownOption};
use leptos::prelude::*;

pub(crate) fn theme_options() -> Vec<DropdownOption> {
    Theme::all()
        .into_iter()
        .map(|theme| DropdownOption::new(theme.as_str(), theme.display_name()))
        .collect()
}

/// Theme picker for the header, built on `Dropdown`.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();

    let on_select = Callback::new(move |value: String| match value.parse::<Theme>() {
        Ok(theme) => ctx.set_theme(theme),
        Err(err) => log::warn!("ThemeSelector: {}", err),
    });

    view! {
        <div class="theme-selector" title="Theme">
            <Dropdown
                options=Signal::derive(theme_options)
                selected=Signal::derive(move || Some(ctx.theme.get().as_str().to_string()))
                icon_name="palette"
                on_select=on_select
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_options_match_themes() {
        let values: Vec<_> = theme_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["light", "dark", "contrast"]);
    }
}
