//! SVG bar chart comparing predicted and average salary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `ChartSlot` currently owns. Rebuilds and theme restyles
//! happen on the state side; this component only draws.

use leptos::prelude::*;

use crate::state::chart::{CHART_TITLE, SalaryChart};
use crate::state::ui::UiState;
use crate::util::format::format_currency;

#[cfg(test)]
#[path = "salary_chart_test.rs"]
mod salary_chart_test;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Y coordinate of a value at `ratio` of the axis height.
fn plot_y(ratio: f64) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - ratio)
}

/// `(x, width)` of bar `index` out of `count` equal slots.
#[allow(clippy::cast_precision_loss)]
fn bar_span(index: usize, count: usize) -> (f64, f64) {
    let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / count.max(1) as f64;
    let width = slot * 0.5;
    (MARGIN_LEFT + slot * index as f64 + (slot - width) / 2.0, width)
}

#[component]
pub fn ComparisonChart() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || ui.with(|u| u.chart.current().cloned()).map(render_chart)
}

fn render_chart(chart: SalaryChart) -> impl IntoView {
    let palette = chart.palette();
    let count = chart.bars().len();

    let grid = chart
        .ticks()
        .iter()
        .map(|tick| {
            let y = format!("{:.1}", plot_y(chart.height_ratio(tick.value)));
            view! {
                <g class="salary-chart__tick">
                    <line
                        x1=MARGIN_LEFT.to_string()
                        x2=(WIDTH - MARGIN_RIGHT).to_string()
                        y1=y.clone()
                        y2=y.clone()
                        stroke=palette.grid
                    ></line>
                    <text
                        x=(MARGIN_LEFT - 8.0).to_string()
                        y=y
                        fill=palette.text
                        text-anchor="end"
                        dominant-baseline="middle"
                        font-size="12"
                    >
                        {tick.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = chart
        .bars()
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let (x, width) = bar_span(index, count);
            let top = plot_y(chart.height_ratio(bar.value));
            let height = (MARGIN_TOP + plot_height() - top).max(0.0);
            view! {
                <g class="salary-chart__bar">
                    <rect
                        x=format!("{x:.1}")
                        y=format!("{top:.1}")
                        width=format!("{width:.1}")
                        height=format!("{height:.1}")
                        rx="8"
                        fill=bar.fill
                        stroke=bar.border
                        stroke-width="2"
                        aria-label=format_currency(bar.value)
                    ></rect>
                    <text
                        x=format!("{:.1}", x + width / 2.0)
                        y=(HEIGHT - MARGIN_BOTTOM / 2.0).to_string()
                        fill=palette.text
                        text-anchor="middle"
                        font-size="12"
                    >
                        {bar.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            id="salaryChart"
            class="salary-chart"
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            role="img"
            aria-label=CHART_TITLE
        >
            <text
                x=(WIDTH / 2.0).to_string()
                y="24"
                fill=palette.text
                text-anchor="middle"
                font-size="16"
                font-weight="bold"
            >
                {CHART_TITLE}
            </text>
            {grid}
            {bars}
        </svg>
    }
}
