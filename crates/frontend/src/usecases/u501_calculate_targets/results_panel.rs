use crate::layout::global_context::PlannerContext;
use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use contracts::shared::config::DisplaySettings;
use contracts::shared::number_format::{format_number, format_raw_number};
use contracts::usecases::u501_calculate_targets::{ResultRow, Totals};
use leptos::prelude::*;
use thaw::*;

fn summary_view(totals: Totals, display: &DisplaySettings) -> impl IntoView {
    view! {
        <div class="summary-card">
            <h3 class="summary-card__title">"Summary Overview"</h3>
            <div class="summary-card__grid">
                <StatCard
                    label="Total Revenue Goal"
                    value=display.currency(totals.revenue_goal)
                    warning=!totals.revenue_goal.is_finite()
                />
                <StatCard
                    label="Total Units to Sell"
                    value=display.number(totals.units_to_sell)
                    warning=!totals.units_to_sell.is_finite()
                />
                <StatCard
                    label="Total Leads Required"
                    value=display.number(totals.leads_required)
                    warning=!totals.leads_required.is_finite()
                />
                <StatCard
                    label="Double Leads Strategy"
                    value=display.number(totals.double_leads)
                    warning=!totals.double_leads.is_finite()
                />
            </div>
        </div>
    }
}

/// Formatted cell strings of one results row
#[derive(Debug, Clone, PartialEq)]
struct RowCells {
    name: String,
    share: String,
    issues: Option<String>,
    revenue: String,
    units: String,
    target_units: String,
    buffer: String,
    leads: String,
    conversion: String,
    double_leads: String,
}

impl RowCells {
    fn new(row: &ResultRow, display: &DisplaySettings, buffer_percent: f64) -> Self {
        let issues = row
            .issues()
            .iter()
            .map(|issue| issue.message())
            .collect::<Vec<_>>();

        Self {
            name: row.product.name.clone(),
            share: format!("{}% of revenue", format_raw_number(row.product.product_value)),
            issues: (!issues.is_empty()).then(|| issues.join("; ")),
            revenue: display.currency(row.revenue_goal_product),
            units: display.number(row.units_to_sell),
            target_units: display.number(row.target_units),
            buffer: format!("+{}% buffer", format_number(buffer_percent, 1)),
            leads: display.number(row.leads_required),
            conversion: format!("{}% conversion", format_raw_number(row.product.conversion_ratio)),
            double_leads: display.number(row.double_leads),
        }
    }
}

fn results_table(cells: Vec<RowCells>) -> impl IntoView {
    let rows = cells
        .into_iter()
        .map(|cells| {
            view! {
                <TableRow>
                    <TableCell>
                        <div class="results__product">{cells.name}</div>
                        <div class="results__caption">{cells.share}</div>
                        {cells.issues.map(|text| view! { <div class="results__issue">{text}</div> })}
                    </TableCell>
                    <TableCell>
                        <div class="results__value">{cells.revenue}</div>
                    </TableCell>
                    <TableCell>
                        <div class="results__value">{cells.units}</div>
                    </TableCell>
                    <TableCell>
                        <div class="results__value">{cells.target_units}</div>
                        <div class="results__caption">{cells.buffer}</div>
                    </TableCell>
                    <TableCell>
                        <div class="results__value">{cells.leads}</div>
                        <div class="results__caption">{cells.conversion}</div>
                    </TableCell>
                    <TableCell>
                        <div class="results__value">{cells.double_leads}</div>
                        <div class="results__caption">"Conservative target"</div>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="results__table">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Revenue Goal"</TableHeaderCell>
                        <TableHeaderCell>"Units to Sell"</TableHeaderCell>
                        <TableHeaderCell>"Target Units"</TableHeaderCell>
                        <TableHeaderCell>"Leads Required"</TableHeaderCell>
                        <TableHeaderCell>"Double Leads"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let buffer_percent = ctx
        .config
        .with_value(|c| (c.planner.target_multiplier - 1.0) * 100.0);

    let content = move || {
        let display = ctx.display();
        let computed = ctx.results.with(|results| {
            results.as_ref().map(|results| {
                let cells = results
                    .iter()
                    .map(|row| RowCells::new(row, &display, buffer_percent))
                    .collect::<Vec<_>>();
                (results.totals(), cells)
            })
        });

        match computed {
            None => view! {
                <div class="planner-panel__placeholder">
                    "Fill in the input parameters and click \"Calculate\" to see results"
                </div>
            }
            .into_any(),
            Some((totals, cells)) => view! {
                {summary_view(totals, &display)}
                {results_table(cells)}
            }
            .into_any(),
        }
    };

    view! {
        <div class="card planner-panel">
            <h2 class="planner-panel__title">
                {icon("chart-bar")}
                " Sales Target Results"
            </h2>
            {content}
        </div>
    }
}
