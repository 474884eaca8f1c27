use std::f64::consts::{FRAC_PI_2, PI, TAU};

use dioxus::prelude::*;

use crate::core::classification::ChartSlice;

const VIEWBOX: f64 = 200.0;
const RADIUS: f64 = 90.0;

/// One drawable pie segment in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Lay out slices clockwise from twelve o'clock.
///
/// Segment sizes are shares of the drawn total, so a payload whose
/// probabilities do not sum to 1 still fills the circle; labels keep the raw
/// probability. Slices with a non-positive or non-finite fraction are not
/// drawn.
pub fn pie_arcs(slices: &[ChartSlice], cx: f64, cy: f64, r: f64) -> Vec<PieArc> {
    let drawable = |s: &&ChartSlice| s.fraction.is_finite() && s.fraction > 0.0;
    let total: f64 = slices.iter().filter(drawable).map(|s| s.fraction).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut arcs = Vec::new();
    for slice in slices.iter().filter(drawable) {
        let sweep = slice.fraction / total * TAU;
        let end = start + sweep;
        let full_circle = sweep >= TAU - 1e-9;

        let path = if full_circle {
            let (left, right) = (cx - r, cx + r);
            format!(
                "M {left:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {right:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {left:.2} {cy:.2} Z"
            )
        } else {
            let (x0, y0) = point(cx, cy, r, start);
            let (x1, y1) = point(cx, cy, r, end);
            let large_arc = u8::from(sweep > PI);
            format!(
                "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
            )
        };

        let (label_x, label_y) = if full_circle {
            (cx, cy)
        } else {
            point(cx, cy, r * 0.6, start + sweep / 2.0)
        };

        arcs.push(PieArc {
            path,
            color: slice.color,
            label: slice.percent_label(),
            label_x,
            label_y,
        });
        start = end;
    }
    arcs
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

#[component]
pub fn PieChart(slices: Vec<ChartSlice>, height: u32, label_style: String) -> Element {
    let center = VIEWBOX / 2.0;
    let arcs = pie_arcs(&slices, center, center, RADIUS);

    rsx! {
        div { class: "results-chart",
            svg {
                class: "results-chart__svg",
                view_box: "0 0 {VIEWBOX} {VIEWBOX}",
                height: "{height}",
                role: "img",
                "aria-label": crate::t!("result-chart-label"),
                for arc in arcs.into_iter() {
                    g { class: "results-chart__segment",
                        path { d: "{arc.path}", fill: "{arc.color}" }
                        text {
                            class: "results-chart__label",
                            x: "{arc.label_x:.2}",
                            y: "{arc.label_y:.2}",
                            text_anchor: "middle",
                            dominant_baseline: "middle",
                            style: "{label_style}",
                            "{arc.label}"
                        }
                    }
                }
            }
        }
    }
}
