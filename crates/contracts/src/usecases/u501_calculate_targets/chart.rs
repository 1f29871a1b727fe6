//! Series for the "Units vs Leads Required" bar chart

use serde::{Deserialize, Serialize};

use super::response::ResultRow;
use crate::shared::config::DisplaySettings;

/// One bar group of the chart. Values are rounded to whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub units: f64,
    pub leads: f64,
    pub double_leads: f64,
    pub revenue: f64,
}

impl ChartPoint {
    /// Hover text of a bar group, one line per figure
    pub fn tooltip(&self, display: &DisplaySettings) -> String {
        [
            self.name.clone(),
            format!("Units to Sell: {}", display.number(self.units)),
            format!("Leads Required: {}", display.number(self.leads)),
            format!("Double Leads: {}", display.number(self.double_leads)),
            format!("Revenue Goal: {}", display.currency(self.revenue)),
        ]
        .join("\n")
    }
}

/// Round half up, as chart labels expect (2.5 -> 3, -2.5 -> -2)
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn chart_points(rows: &[ResultRow]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| ChartPoint {
            name: row.product.name.clone(),
            units: round_half_up(row.units_to_sell),
            leads: round_half_up(row.leads_required),
            double_leads: round_half_up(row.double_leads),
            revenue: round_half_up(row.revenue_goal_product),
        })
        .collect()
}

/// Y axis of the chart: rounded maximum and evenly spaced ticks from 0
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScale {
    pub max: f64,
    pub ticks: Vec<f64>,
}

/// 1, 2, 5 or 10 times a power of ten, not below `value`
fn nice_step(value: f64) -> f64 {
    let exponent = value.log10().floor();
    let magnitude = 10f64.powi(exponent as i32);
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl ChartScale {
    /// Scale covering the largest finite value with about `target_ticks` steps.
    /// Non-finite values are ignored.
    pub fn for_values(values: impl IntoIterator<Item = f64>, target_ticks: usize) -> Self {
        let largest = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        if largest <= 0.0 {
            return Self {
                max: 1.0,
                ticks: vec![0.0, 1.0],
            };
        }

        let step = nice_step(largest / target_ticks.max(1) as f64);
        let steps = (largest / step).ceil() as usize;
        let ticks = (0..=steps).map(|i| i as f64 * step).collect();

        Self {
            max: steps as f64 * step,
            ticks,
        }
    }

    /// Position of `value` on the axis, 0.0..=1.0. Non-finite or negative values map to 0.
    pub fn ratio(&self, value: f64) -> f64 {
        if !value.is_finite() || value <= 0.0 {
            return 0.0;
        }
        (value / self.max).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_plan::ProductId;
    use crate::usecases::u501_calculate_targets::request::ProductSnapshot;

    fn row(name: &str, units: f64, leads: f64) -> ResultRow {
        ResultRow {
            product: ProductSnapshot {
                id: ProductId::new(1),
                name: name.to_string(),
                product_value: 100.0,
                sales_ratio: 0.0,
                price: 1.0,
                conversion_ratio: 1.0,
            },
            revenue_goal_product: units * 10.0,
            units_to_sell: units,
            target_units: units * 1.1,
            leads_required: leads,
            double_leads: leads * 2.0,
        }
    }

    #[test]
    fn test_chart_points_round_values() {
        let points = chart_points(&[row("Product A", 333.5, 1333.3), row("Product B", 2.4, 9.99)]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Product A");
        assert_eq!(points[0].units, 334.0);
        assert_eq!(points[0].leads, 1333.0);
        assert_eq!(points[0].double_leads, 2667.0);
        assert_eq!(points[0].revenue, 3335.0);
        assert_eq!(points[1].units, 2.0);
        assert_eq!(points[1].leads, 10.0);
    }

    #[test]
    fn test_tooltip_lists_every_figure() {
        let points = chart_points(&[row("Product A", 1000.0, 6666.7)]);
        let text = points[0].tooltip(&DisplaySettings::default());
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Product A",
                "Units to Sell: 1,000",
                "Leads Required: 6,667",
                "Double Leads: 13,333",
                "Revenue Goal: ₹10,000",
            ]
        );
    }

    #[test]
    fn test_chart_points_keep_non_finite() {
        let points = chart_points(&[row("Product A", f64::INFINITY, f64::INFINITY)]);
        assert!(points[0].units.is_infinite());
    }

    #[test]
    fn test_scale_uses_round_steps() {
        let scale = ChartScale::for_values([1000.0, 10_000.0], 5);
        assert_eq!(scale.max, 10_000.0);
        assert_eq!(
            scale.ticks,
            vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]
        );

        let scale = ChartScale::for_values([730.0], 5);
        assert_eq!(scale.max, 800.0);
        assert_eq!(scale.ticks.len(), 5);
    }

    #[test]
    fn test_scale_ignores_non_finite_and_empty() {
        let scale = ChartScale::for_values([f64::INFINITY, 50.0], 5);
        assert_eq!(scale.max, 50.0);
        assert_eq!(scale.ratio(f64::INFINITY), 0.0);
        assert_eq!(scale.ratio(25.0), 0.5);

        let empty = ChartScale::for_values(Vec::<f64>::new(), 5);
        assert_eq!(empty.max, 1.0);
        assert_eq!(empty.ticks, vec![0.0, 1.0]);
    }
}
