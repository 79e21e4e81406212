//! Геометрия круговой диаграммы: доли, углы и SVG-пути секторов.
//!
//! Углы считаются в радианах от 12 часов по часовой стрелке.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Палитра по умолчанию для срезов без явного цвета
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#4f7cff", "#22b07d", "#f5a524", "#e5484d", "#8e4ec6", "#12a5b8", "#f76b15", "#7c8a99",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// 0 for a full pie, > 0 for a donut.
    pub inner_radius: f64,
}

impl PieGeometry {
    /// Square viewport of `size`, optional donut hole as a fraction of the radius.
    pub fn square(size: f64, hole: f64) -> Self {
        let radius = size / 2.0;
        Self {
            cx: radius,
            cy: radius,
            radius,
            inner_radius: radius * hole.clamp(0.0, 0.95),
        }
    }

    fn point(&self, r: f64, angle: f64) -> (f64, f64) {
        let a = angle - FRAC_PI_2;
        (self.cx + r * a.cos(), self.cy + r * a.sin())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// The only positive slice: render as a circle/ring, an arc path cannot close on itself.
    pub full: bool,
    pub path: String,
}

/// Сумма положительных значений
pub fn pie_total(slices: &[PieSlice]) -> f64 {
    slices
        .iter()
        .map(|s| s.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum()
}

/// Раскладывает срезы по кругу. Неположительные значения пропускаются,
/// пустой результат означает "нечего рисовать".
pub fn layout_pie(slices: &[PieSlice], geometry: PieGeometry) -> Vec<PieSegment> {
    let total = pie_total(slices);
    if total <= 0.0 {
        return Vec::new();
    }

    let positive: Vec<(usize, &PieSlice)> = slices
        .iter()
        .enumerate()
        .filter(|(_, s)| s.value.is_finite() && s.value > 0.0)
        .collect();
    let full = positive.len() == 1;

    let mut angle = 0.0;
    positive
        .into_iter()
        .map(|(idx, slice)| {
            let fraction = slice.value / total;
            let start = angle;
            let end = start + fraction * TAU;
            angle = end;
            PieSegment {
                label: slice.label.clone(),
                value: slice.value,
                fraction,
                color: slice
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PALETTE[idx % DEFAULT_PALETTE.len()].to_string()),
                start_angle: start,
                end_angle: end,
                full,
                path: if full {
                    String::new()
                } else {
                    arc_path(&geometry, start, end)
                },
            }
        })
        .collect()
}

fn arc_path(g: &PieGeometry, start: f64, end: f64) -> String {
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (x0, y0) = g.point(g.radius, start);
    let (x1, y1) = g.point(g.radius, end);

    if g.inner_radius > 0.0 {
        let (ix0, iy0) = g.point(g.inner_radius, end);
        let (ix1, iy1) = g.point(g.inner_radius, start);
        format!(
            "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3} Z",
            x0, y0, g.radius, g.radius, large, x1, y1,
            ix0, iy0, g.inner_radius, g.inner_radius, large, ix1, iy1
        )
    } else {
        format!(
            "M {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} Z",
            g.cx, g.cy, x0, y0, g.radius, g.radius, large, x1, y1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PieGeometry {
        PieGeometry::square(200.0, 0.0)
    }

    #[test]
    fn test_fractions_cover_full_turn() {
        let slices = vec![
            PieSlice::new("Rent", 1200.0),
            PieSlice::new("Food", 450.0),
            PieSlice::new("Transport", 150.0),
        ];
        let segments = layout_pie(&slices, geometry());

        assert_eq!(segments.len(), 3);
        let sum: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(segments[0].start_angle, 0.0);
        assert!((segments[2].end_angle - TAU).abs() < 1e-9);
        assert!(segments.iter().all(|s| !s.full && s.path.starts_with("M ")));
    }

    #[test]
    fn test_skips_non_positive_values() {
        let slices = vec![
            PieSlice::new("Rent", 100.0),
            PieSlice::new("Refund", -20.0),
            PieSlice::new("Nothing", 0.0),
            PieSlice::new("Food", 100.0),
        ];
        let segments = layout_pie(&slices, geometry());
        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Food"]);
        // palette index follows the original position
        assert_eq!(segments[1].color, DEFAULT_PALETTE[3]);
    }

    #[test]
    fn test_single_slice_is_full() {
        let slices = vec![PieSlice::new("All", 10.0).with_color("#000")];
        let segments = layout_pie(&slices, geometry());
        assert_eq!(segments.len(), 1);
        assert!(segments[0].full);
        assert_eq!(segments[0].color, "#000");
        assert_eq!(segments[0].fraction, 1.0);
    }

    #[test]
    fn test_empty_and_zero_total() {
        assert!(layout_pie(&[], geometry()).is_empty());
        assert!(layout_pie(&[PieSlice::new("x", 0.0)], geometry()).is_empty());
    }

    #[test]
    fn test_large_arc_flag_and_donut() {
        let slices = vec![PieSlice::new("big", 3.0), PieSlice::new("small", 1.0)];
        let pie = layout_pie(&slices, geometry());
        assert!(pie[0].path.contains(" 0 1 1 "));
        assert!(pie[1].path.contains(" 0 0 1 "));

        let donut = layout_pie(&slices, PieGeometry::square(200.0, 0.5));
        assert_eq!(donut[0].path.matches('A').count(), 2);
    }

    #[test]
    fn test_first_segment_starts_at_top() {
        let slices = vec![PieSlice::new("a", 1.0), PieSlice::new("b", 1.0)];
        let segments = layout_pie(&slices, geometry());
        assert!(segments[0].path.starts_with("M 100.000 100.000 L 100.000 0.000"));
    }
}
