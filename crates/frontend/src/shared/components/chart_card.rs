//! Лёгкие SVG-графики для дашборда: линия и столбцы по точкам
//! [`ChartPoint`]. Данных немного и они статичны, поэтому разметка
//! считается один раз при монтировании.

use contracts::projections::p901_kpi_summary::ChartPoint;
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 16.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;

/// Карточка с заголовком и областью графика
#[component]
pub fn ChartCard(title: String, children: Children) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3 class="chart-card-title">{title}</h3>
            <div class="chart-card-body">{children()}</div>
        </div>
    }
}

fn max_value(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(1.0, f64::max)
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn label_y() -> f64 {
    HEIGHT - 8.0
}

/// Линейный график с точками и подписями по оси X
#[component]
pub fn LineChart(points: Vec<ChartPoint>) -> impl IntoView {
    let max = max_value(&points);
    let step = (WIDTH - PAD_LEFT - PAD_RIGHT) / points.len().max(1) as f64;

    let coords: Vec<(f64, f64, String)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PAD_LEFT + step * (i as f64 + 0.5);
            let y = PAD_TOP + plot_height() * (1.0 - point.value / max);
            (x, y, point.name.clone())
        })
        .collect();

    let polyline = coords
        .iter()
        .map(|(x, y, _)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            <polyline class="chart-line" points=polyline fill="none" />
            {coords
                .iter()
                .map(|(x, y, name)| {
                    view! {
                        <circle class="chart-dot" cx={*x} cy={*y} r="4" />
                        <text class="chart-label" x={*x} y=label_y() text-anchor="middle">
                            {name.clone()}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Столбчатый график с подписями по оси X
#[component]
pub fn BarChart(points: Vec<ChartPoint>) -> impl IntoView {
    let max = max_value(&points);
    let step = (WIDTH - PAD_LEFT - PAD_RIGHT) / points.len().max(1) as f64;
    let bar_width = step * 0.6;

    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            {points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let center = PAD_LEFT + step * (i as f64 + 0.5);
                    let bar_height = plot_height() * point.value / max;
                    let top = PAD_TOP + plot_height() - bar_height;
                    view! {
                        <rect
                            class="chart-bar"
                            x={center - bar_width / 2.0}
                            y=top
                            width=bar_width
                            height=bar_height
                            rx="3"
                        />
                        <text class="chart-label" x=center y=label_y() text-anchor="middle">
                            {point.name.clone()}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Горизонтальный список распределения с полосами долей
#[component]
pub fn DistributionList(points: Vec<ChartPoint>) -> impl IntoView {
    let total: f64 = points.iter().map(|p| p.value).sum::<f64>().max(1.0);

    view! {
        <ul class="distribution-list">
            {points
                .iter()
                .map(|point| {
                    let share = point.value / total * 100.0;
                    view! {
                        <li class="distribution-item">
                            <span class="distribution-name">{point.name.clone()}</span>
                            <span class="distribution-bar">
                                <span
                                    class="distribution-fill"
                                    style=format!("width: {:.1}%", share)
                                ></span>
                            </span>
                            <span class="distribution-value">
                                {format!("{:.0}", point.value)}
                            </span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
