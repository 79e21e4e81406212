//! SVG pie/donut chart with an optional legend.

use contracts::shared::format::{format_money, format_percent};
use contracts::shared::pie::{layout_pie, pie_total, PieGeometry, PieSegment, PieSlice};
use leptos::prelude::*;

/// Ring (stroke) parameters for a full-circle segment or the empty state:
/// returns `(radius, stroke_width)` of the circle to draw.
pub(crate) fn ring(g: &PieGeometry) -> (f64, f64) {
    let width = g.radius - g.inner_radius;
    (g.inner_radius + width / 2.0, width)
}

fn segment_view(
    segment: PieSegment,
    idx: usize,
    geometry: PieGeometry,
    hovered: RwSignal<Option<usize>>,
) -> AnyView {
    let title = format!(
        "{}: {} ({})",
        segment.label,
        format_money(segment.value),
        format_percent(segment.fraction)
    );
    let class = move || {
        if hovered.get() == Some(idx) {
            "pie-chart__segment pie-chart__segment--hover"
        } else {
            "pie-chart__segment"
        }
    };
    let on_enter = move |_| hovered.set(Some(idx));
    let on_leave = move |_| hovered.set(None);

    if segment.full {
        let (r, width) = ring(&geometry);
        view! {
            <circle
                class=class
                cx=geometry.cx.to_string()
                cy=geometry.cy.to_string()
                r=r.to_string()
                fill="none"
                stroke=segment.color
                stroke-width=width.to_string()
                on:mouseenter=on_enter
                on:mouseleave=on_leave
            >
                <title>{title}</title>
            </circle>
        }
        .into_any()
    } else {
        view! {
            <path
                class=class
                d=segment.path
                fill=segment.color
                on:mouseenter=on_enter
                on:mouseleave=on_leave
            >
                <title>{title}</title>
            </path>
        }
        .into_any()
    }
}

#[component]
pub fn PieChart(
    #[prop(into)]
    slices: Signal<Vec<PieSlice>>,
    /// Side of the square viewport in px
    #[prop(optional, default = 200.0)]
    size: f64,
    /// Donut hole as a fraction of the radius (0 = full pie)
    #[prop(optional, default = 0.0)]
    hole: f64,
    #[prop(optional, default = true)]
    show_legend: bool,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView {
    let geometry = PieGeometry::square(size, hole);
    let hovered = RwSignal::new(None::<usize>);
    let segments = Memo::new(move |_| slices.with(|s| layout_pie(s, geometry)));
    let total = Memo::new(move |_| slices.with(|s| pie_total(s)));

    let chart = move || {
        let segments = segments.get();
        if segments.is_empty() {
            let (r, width) = ring(&geometry);
            return view! {
                <circle
                    class="pie-chart__empty"
                    cx=geometry.cx.to_string()
                    cy=geometry.cy.to_string()
                    r=r.to_string()
                    fill="none"
                    stroke-width=width.to_string()
                />
            }
            .into_any();
        }
        segments
            .into_iter()
            .enumerate()
            .map(|(idx, segment)| segment_view(segment, idx, geometry, hovered))
            .collect_view()
            .into_any()
    };

    let legend = move || {
        let segments = segments.get();
        if segments.is_empty() {
            let text = empty_text.get().unwrap_or_else(|| "No data".to_string());
            return view! { <p class="pie-chart__empty-text">{text}</p> }.into_any();
        }
        view! {
            <ul class="pie-chart__legend">
                {segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, segment)| view! {
                        <li
                            class="pie-chart__legend-item"
                            class:pie-chart__legend-item--hover=move || hovered.get() == Some(idx)
                            on:mouseenter=move |_| hovered.set(Some(idx))
                            on:mouseleave=move |_| hovered.set(None)
                        >
                            <span class="pie-chart__swatch" style=format!("background: {}", segment.color)></span>
                            <span class="pie-chart__label">{segment.label}</span>
                            <span class="pie-chart__percent">{format_percent(segment.fraction)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <figure class="pie-chart">
            <svg
                class="pie-chart__svg"
                width=size.to_string()
                height=size.to_string()
                viewBox=format!("0 0 {} {}", size, size)
                role="img"
                aria-label=move || title.get().unwrap_or_else(|| format!("Total {}", format_money(total.get())))
            >
                {chart}
            </svg>
            {move || title.get().map(|t| view! { <figcaption class="pie-chart__title">{t}</figcaption> })}
            {show_legend.then_some(legend)}
        </figure>
    }
}
