//! Outline icons (24x24 stroke set) used across the components.
//!
//! Unknown names render a neutral circle so a typo never breaks layout.

use leptos::prelude::*;

fn outline<V: IntoView + 'static>(size: u32, body: V) -> AnyView {
    let size = size.to_string();
    view! {
        <svg
            class="icon"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
    .into_any()
}

/// Icon at the default 20px size.
pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 20)
}

pub fn icon_sized(name: &str, size: u32) -> AnyView {
    match name {
        "home" => outline(size, view! {
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
            <path d="M9 22V12h6v10"/>
        }),
        "wallet" => outline(size, view! {
            <path d="M20 7H5a2 2 0 0 1 0-4h13v4"/>
            <path d="M3 5v14a2 2 0 0 0 2 2h15V7"/>
            <circle cx="16" cy="14" r="1.5"/>
        }),
        "pie-chart" => outline(size, view! {
            <path d="M21.21 15.89A10 10 0 1 1 8 2.83"/>
            <path d="M22 12A10 10 0 0 0 12 2v10z"/>
        }),
        "tag" => outline(size, view! {
            <path d="M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/>
            <circle cx="7" cy="7" r="1"/>
        }),
        "calendar" => outline(size, view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }),
        "credit-card" => outline(size, view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M2 10h20"/>
        }),
        "trending-up" => outline(size, view! {
            <path d="M23 6l-9.5 9.5-5-5L1 18"/>
            <path d="M17 6h6v6"/>
        }),
        "trending-down" => outline(size, view! {
            <path d="M23 18l-9.5-9.5-5 5L1 6"/>
            <path d="M17 18h6v-6"/>
        }),
        "check-circle" => outline(size, view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
            <path d="M22 4L12 14.01l-3-3"/>
        }),
        "alert-triangle" => outline(size, view! {
            <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/>
            <path d="M12 9v4"/>
            <path d="M12 17h.01"/>
        }),
        "x-circle" => outline(size, view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M15 9l-6 6"/>
            <path d="M9 9l6 6"/>
        }),
        "info" => outline(size, view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 16v-4"/>
            <path d="M12 8h.01"/>
        }),
        "clock" => outline(size, view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 6v6l4 2"/>
        }),
        "plus" => outline(size, view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }),
        "edit" => outline(size, view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }),
        "trash" => outline(size, view! {
            <path d="M3 6h18"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
        }),
        "filter" => outline(size, view! {
            <path d="M22 3H2l8 9.46V19l4 2v-8.54z"/>
        }),
        "download" => outline(size, view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="M7 10l5 5 5-5"/>
            <path d="M12 15V3"/>
        }),
        "palette" => outline(size, view! {
            <circle cx="13.5" cy="6.5" r="1"/>
            <circle cx="17.5" cy="10.5" r="1"/>
            <circle cx="8.5" cy="7.5" r="1"/>
            <circle cx="6.5" cy="12.5" r="1"/>
            <path d="M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 9.9C22 5.5 17.5 2 12 2z"/>
        }),
        "more-horizontal" => outline(size, view! {
            <circle cx="12" cy="12" r="1"/>
            <circle cx="19" cy="12" r="1"/>
            <circle cx="5" cy="12" r="1"/>
        }),
        "chevron-right" => outline(size, view! { <path d="M9 18l6-6-6-6"/> }),
        "chevron-down" => outline(size, view! { <path d="M6 9l6 6 6-6"/> }),
        "chevron-up" => outline(size, view! { <path d="M18 15l-6-6-6 6"/> }),
        "x" => outline(size, view! {
            <path d="M18 6L6 18"/>
            <path d="M6 6l12 12"/>
        }),
        _ => outline(size, view! {
            <circle cx="12" cy="12" r="10"/>
        }),
    }
}
