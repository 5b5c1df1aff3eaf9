//! Two-series line chart drawn as inline SVG.

use leptos::prelude::*;

use crate::chart::{ChartLayout, ChartPoint, Series};

const SERIES: [Series; 2] = [Series::Anxiety, Series::Stability];

#[component]
pub fn MetricsChart(
    points: Vec<ChartPoint>,
    #[prop(default = 400.0)] width: f64,
    #[prop(default = 300.0)] height: f64,
) -> impl IntoView {
    let layout = ChartLayout::new(width, height, &points);
    let hovered = RwSignal::new(None::<usize>);
    let readouts: Vec<String> = points.iter().map(ChartPoint::readout).collect();
    let left = layout.plot_left().to_string();
    let right = layout.plot_right().to_string();
    let top = layout.plot_top().to_string();
    let bottom = layout.plot_bottom().to_string();
    let label_x = (layout.plot_left() - 8.0).to_string();
    let label_y = (layout.plot_bottom() + 18.0).to_string();

    let grid = layout
        .y_ticks
        .iter()
        .map(|(y, label)| {
            let line_y = y.to_string();
            let text_y = (y + 4.0).to_string();
            view! {
                <g class="chart-y-tick">
                    <line
                        x1=left.clone()
                        x2=right.clone()
                        y1=line_y.clone()
                        y2=line_y
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text x=label_x.clone() y=text_y text-anchor="end">{label.clone()}</text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let x_labels = layout
        .x_labels
        .iter()
        .map(|(x, label)| {
            let x = x.to_string();
            view! {
                <g class="chart-x-tick">
                    <line
                        x1=x.clone()
                        x2=x.clone()
                        y1=top.clone()
                        y2=bottom.clone()
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text x=x y=label_y.clone() text-anchor="middle">{label.clone()}</text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let lines = SERIES
        .iter()
        .map(|series| {
            let color = series.color();
            let dots = layout
                .coords(*series)
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    view! {
                        <circle
                            class="chart-dot"
                            class:active=move || hovered.get() == Some(i)
                            cx=x.to_string()
                            cy=y.to_string()
                            r=move || if hovered.get() == Some(i) { "8" } else { "3" }
                            fill=color
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g class="chart-series">
                    <polyline
                        points=layout.polyline(*series)
                        fill="none"
                        stroke=color
                        stroke-width="2"
                    />
                    {dots}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let legend = SERIES
        .iter()
        .map(|series| {
            view! {
                <span class="chart-legend-item">
                    <span class="chart-legend-swatch" style=format!("background:{}", series.color())></span>
                    {series.label()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="metrics-chart">
            <style>{include_str!("metrics_chart.css")}</style>
            <svg
                width=width.to_string()
                height=height.to_string()
                viewBox=format!("0 0 {} {}", width, height)
                role="img"
            >
                {grid}
                {x_labels}
                <line x1=left.clone() x2=left.clone() y1=top y2=bottom.clone() stroke="#9ca3af" />
                <line x1=left x2=right y1=bottom.clone() y2=bottom stroke="#9ca3af" />
                {lines}
            </svg>
            <div class="chart-readout">
                {move || hovered.get().and_then(|i| readouts.get(i).cloned())}
            </div>
            <div class="chart-legend">{legend}</div>
        </div>
    }
}
