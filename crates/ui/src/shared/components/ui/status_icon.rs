use crate::shared::icons::icon_sized;
use contracts::enums::StatusKind;
use leptos::prelude::*;

pub(crate) fn status_class(kind: StatusKind) -> String {
    format!("status-icon status-icon--{}", kind.as_str())
}

/// Status icon with an accessible label; optional visible caption.
#[component]
pub fn StatusIcon(
    #[prop(into)]
    kind: Signal<StatusKind>,
    /// Icon size in px
    #[prop(optional, default = 18)]
    size: u32,
    /// Overrides the default label ("Warning", "Pending", ...)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Render the label next to the icon instead of only as a tooltip
    #[prop(optional)]
    show_label: bool,
) -> impl IntoView {
    let text = move || label.get().unwrap_or_else(|| kind.get().label().to_string());

    view! {
        <span
            class=move || status_class(kind.get())
            role="img"
            aria-label=text
            title=text
        >
            {move || icon_sized(kind.get().icon_name(), size)}
            {move || show_label.then(|| view! {
                <span class="status-icon__label">{text()}</span>
            })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusKind::Pending), "status-icon status-icon--pending");
    }
}
