use crate::charts::{
    arc_path, bar_rects, line_points, points_attr, polar_slices, radar_points, slice_angles,
    ChartBundle, ChartKind, ChartSpec, Plot,
};
use yew::prelude::*;

const WIDTH: f64 = 240.0;
const HEIGHT: f64 = 180.0;
const PALETTE: [&str; 6] = ["#2563eb", "#dc2626", "#16a34a", "#d97706", "#7c3aed", "#0891b2"];

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Properties, PartialEq)]
pub struct ChartsPanelProps {
    pub charts: ChartBundle,
}

#[derive(Properties, PartialEq)]
pub struct ChartViewProps {
    pub spec: ChartSpec,
}

#[function_component(ChartsPanel)]
pub fn charts_panel(props: &ChartsPanelProps) -> Html {
    let generation = props.charts.generation;
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-6">
            { for props.charts.charts().into_iter().map(|spec| html! {
                <ChartView key={format!("{}-{}", generation, spec.id)} spec={spec.clone()} />
            })}
        </div>
    }
}

#[function_component(ChartView)]
pub fn chart_view(props: &ChartViewProps) -> Html {
    let spec = &props.spec;
    html! {
        <div class="bg-white rounded-lg shadow p-4" id={spec.id}>
            <h3 class="text-sm font-semibold text-gray-700 mb-2">{spec.title}</h3>
            <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} class="w-full h-auto" role="img" aria-label={spec.dataset_label}>
                { chart_body(spec) }
            </svg>
            <div class="flex flex-wrap gap-3 mt-2 text-xs text-gray-600">
                { for spec.labels.iter().enumerate().map(|(i, label)| html! {
                    <span class="flex items-center gap-1">
                        <span class="inline-block w-3 h-3 rounded-sm" style={format!("background:{}", legend_color(spec.kind, i))}></span>
                        {*label}
                    </span>
                })}
            </div>
        </div>
    }
}

// Single-series charts share one colour; sliced charts colour each label.
fn legend_color(kind: ChartKind, index: usize) -> &'static str {
    match kind {
        ChartKind::Line | ChartKind::Bar | ChartKind::Radar => color(0),
        ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea => color(index),
    }
}

fn chart_body(spec: &ChartSpec) -> Html {
    let plot = Plot {
        width: WIDTH,
        height: HEIGHT,
        padding: 16.0,
    };
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let radius = HEIGHT / 2.0 - 12.0;

    match spec.kind {
        ChartKind::Line => {
            let points = line_points(&spec.data, plot);
            html! {
                <>
                    <line x1={plot.padding.to_string()} y1={(HEIGHT - plot.padding).to_string()}
                          x2={(WIDTH - plot.padding).to_string()} y2={(HEIGHT - plot.padding).to_string()}
                          stroke="#d1d5db" />
                    <polyline points={points_attr(&points)} fill="none" stroke={color(0)} stroke-width="2" />
                    { for points.iter().map(|(x, y)| html! {
                        <circle cx={format!("{x:.2}")} cy={format!("{y:.2}")} r="3" fill={color(0)} />
                    })}
                </>
            }
        }
        ChartKind::Bar => html! {
            <>
                { for bar_rects(&spec.data, plot).into_iter().map(|rect| html! {
                    <rect x={format!("{:.2}", rect.x)} y={format!("{:.2}", rect.y)}
                          width={format!("{:.2}", rect.width)} height={format!("{:.2}", rect.height)}
                          fill={color(0)} />
                })}
            </>
        },
        ChartKind::Pie | ChartKind::Doughnut => {
            let inner = if spec.kind == ChartKind::Doughnut { radius * 0.5 } else { 0.0 };
            html! {
                <>
                    { for slice_angles(&spec.data).into_iter().enumerate().map(|(i, (start, end))| html! {
                        <path d={arc_path(cx, cy, radius, inner, start, end)} fill={color(i)} stroke="#ffffff" />
                    })}
                </>
            }
        }
        ChartKind::PolarArea => html! {
            <>
                { for polar_slices(&spec.data).into_iter().enumerate().map(|(i, (start, end, fraction))| html! {
                    <path d={arc_path(cx, cy, radius * fraction, 0.0, start, end)} fill={color(i)} fill-opacity="0.7" stroke="#ffffff" />
                })}
            </>
        },
        ChartKind::Radar => {
            let outline = radar_points(&vec![1.0; spec.data.len()], cx, cy, radius);
            let values = radar_points(&spec.data, cx, cy, radius);
            html! {
                <>
                    <polygon points={points_attr(&outline)} fill="none" stroke="#d1d5db" />
                    { for outline.iter().map(|(x, y)| html! {
                        <line x1={cx.to_string()} y1={cy.to_string()} x2={format!("{x:.2}")} y2={format!("{y:.2}")} stroke="#e5e7eb" />
                    })}
                    <polygon points={points_attr(&values)} fill={color(0)} fill-opacity="0.3" stroke={color(0)} stroke-width="2" />
                </>
            }
        }
    }
}
