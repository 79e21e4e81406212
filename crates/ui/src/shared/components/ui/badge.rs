use contracts::enums::badge_variant::format_count;
use contracts::enums::BadgeVariant;
use leptos::prelude::*;

/// Resolves a variant prop given as a string, falling back to neutral.
pub(crate) fn parse_variant(value: Option<String>) -> BadgeVariant {
    match value {
        None => BadgeVariant::default(),
        Some(v) => v.parse().unwrap_or_else(|err| {
            log::warn!("Badge: {}", err);
            BadgeVariant::default()
        }),
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Typed variant, takes precedence over `variant`
    #[prop(optional, into)]
    kind: MaybeProp<BadgeVariant>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || {
        kind.get()
            .unwrap_or_else(|| parse_variant(variant.get()))
            .css_class()
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Numeric badge (unread notifications, uncategorised transactions).
/// Hidden when the count is zero unless `show_zero` is set.
#[component]
pub fn CountBadge(
    #[prop(into)]
    count: Signal<u32>,
    /// Display cap: counts above it render as "99+"
    #[prop(optional, default = 99)]
    max: u32,
    #[prop(optional)]
    show_zero: bool,
    #[prop(optional, into)]
    kind: MaybeProp<BadgeVariant>,
) -> impl IntoView {
    let variant_class = move || kind.get().unwrap_or(BadgeVariant::Primary).css_class();

    view! {
        <Show when=move || { show_zero || count.get() > 0 }>
            <span class=move || format!("badge badge--count {}", variant_class())>
                {move || format_count(count.get(), max)}
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant_fallback() {
        assert_eq!(parse_variant(None), BadgeVariant::Neutral);
        assert_eq!(parse_variant(Some("warning".into())), BadgeVariant::Warning);
        assert_eq!(parse_variant(Some("sparkly".into())), BadgeVariant::Neutral);
    }
}
