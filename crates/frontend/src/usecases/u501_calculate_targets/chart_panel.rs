use crate::layout::global_context::PlannerContext;
use crate::shared::icons::icon;
use contracts::shared::config::DisplaySettings;
use contracts::shared::number_format::format_number;
use contracts::usecases::u501_calculate_targets::{chart_points, ChartPoint, ChartScale};
use leptos::prelude::*;
use thaw::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 380.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 90.0;
const MARGIN_LEFT: f64 = 70.0;
const Y_TICKS: usize = 5;

const UNITS_COLOR: &str = "#667eea";
const LEADS_COLOR: &str = "#48bb78";

fn px(v: f64) -> String {
    format!("{:.1}", v)
}

/// Grouped bars: units to sell next to leads required, per product
fn bar_chart(
    points: Vec<ChartPoint>,
    display: DisplaySettings,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let scale = ChartScale::for_values(points.iter().flat_map(|p| [p.units, p.leads]), Y_TICKS);
    let band = plot_w / points.len().max(1) as f64;
    let bar_w = (band * 0.35).min(48.0);

    let grid = scale
        .ticks
        .iter()
        .map(|tick| {
            let y = baseline - scale.ratio(*tick) * plot_h;
            view! {
                <line
                    x1=px(MARGIN_LEFT)
                    x2=px(WIDTH - MARGIN_RIGHT)
                    y1=px(y)
                    y2=px(y)
                    stroke="#e2e8f0"
                    stroke-dasharray="3 3"
                />
                <text
                    x=px(MARGIN_LEFT - 8.0)
                    y=px(y + 4.0)
                    text-anchor="end"
                    font-size="12"
                    fill="#4a5568"
                >
                    {format_number(*tick, 0)}
                </text>
            }
        })
        .collect_view();

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let center = MARGIN_LEFT + band * (i as f64 + 0.5);
            let units_h = scale.ratio(p.units) * plot_h;
            let leads_h = scale.ratio(p.leads) * plot_h;
            let label_y = baseline + 16.0;
            let hover = p.tooltip(&display);

            view! {
                <g
                    class="chart__group"
                    on:mouseenter=move |_| hovered.set(Some(hover.clone()))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <rect
                        x=px(center - bar_w - 2.0)
                        y=px(baseline - units_h)
                        width=px(bar_w)
                        height=px(units_h)
                        rx="4"
                        fill=UNITS_COLOR
                    />
                    <text
                        x=px(center - bar_w / 2.0 - 2.0)
                        y=px(baseline - units_h - 4.0)
                        text-anchor="middle"
                        font-size="10"
                        fill="#4a5568"
                    >
                        {format_number(p.units, 0)}
                    </text>
                    <rect
                        x=px(center + 2.0)
                        y=px(baseline - leads_h)
                        width=px(bar_w)
                        height=px(leads_h)
                        rx="4"
                        fill=LEADS_COLOR
                    />
                    <text
                        x=px(center + bar_w / 2.0 + 2.0)
                        y=px(baseline - leads_h - 4.0)
                        text-anchor="middle"
                        font-size="10"
                        fill="#4a5568"
                    >
                        {format_number(p.leads, 0)}
                    </text>
                    <text
                        x=px(center)
                        y=px(label_y)
                        text-anchor="end"
                        font-size="13"
                        fill="#4a5568"
                        transform=format!("rotate(-40 {} {})", px(center), px(label_y))
                    >
                        {p.name}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart__svg"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
            role="img"
            aria-label="Units vs Leads Required"
        >
            {grid}
            <line
                x1=px(MARGIN_LEFT)
                x2=px(WIDTH - MARGIN_RIGHT)
                y1=px(baseline)
                y2=px(baseline)
                stroke="#4a5568"
            />
            {bars}
        </svg>
        {move || {
            hovered.get().map(|text| {
                let mut lines = text.lines().map(str::to_string);
                let title = lines.next().unwrap_or_default();
                let figures = lines
                    .map(|line| view! { <p class="chart__tooltip-line">{line}</p> })
                    .collect_view();
                view! {
                    <div class="chart__tooltip">
                        <p class="chart__tooltip-title">{title}</p>
                        {figures}
                    </div>
                }
            })
        }}
        <div class="chart__legend">
            <span class="chart__legend-item">
                <span class="chart__swatch" style=format!("background:{}", UNITS_COLOR)></span>
                "Units to Sell"
            </span>
            <span class="chart__legend-item">
                <span class="chart__swatch" style=format!("background:{}", LEADS_COLOR)></span>
                "Leads Required"
            </span>
        </div>
    }
}

#[component]
pub fn ChartPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let shown = move || ctx.show_charts.get();
    let hovered = RwSignal::new(None::<String>);

    let chart = move || {
        ctx.results
            .with(|r| r.as_ref().map(|results| chart_points(results.rows())))
            .map(|points| {
                view! {
                    <div class="chart">
                        <h3 class="chart__title">"Units vs Leads Required"</h3>
                        {bar_chart(points, ctx.display(), hovered)}
                    </div>
                }
            })
    };

    view! {
        <div class="card planner-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="planner-panel__title">
                    {icon("chart-bar")}
                    " Data Visualization"
                </h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| ctx.toggle_charts()
                >
                    {move || if shown() { icon("eye-off") } else { icon("eye") }}
                    {move || if shown() { " Hide Charts" } else { " Show Charts" }}
                </Button>
            </Flex>
            <Show
                when=shown
                fallback=|| view! {
                    <div class="planner-panel__placeholder">
                        "Click \"Show Charts\" to visualize your sales targets"
                    </div>
                }
            >
                {chart}
            </Show>
        </div>
    }
}
