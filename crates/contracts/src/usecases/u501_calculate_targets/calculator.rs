//! Chunking method: split the revenue goal by product share, then back-solve
//! units and leads.

use super::request::{PlanSnapshot, ProductSnapshot};
use super::response::{ResultRow, ResultSet};
use crate::shared::config::PlannerSettings;

/// Stateless calculator. Callers are expected to obtain the snapshot through
/// [`ValidationGate::snapshot`](super::validation::ValidationGate::snapshot);
/// the calculator does not validate again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCalculator {
    target_multiplier: f64,
    lead_multiplier: f64,
}

impl Default for TargetCalculator {
    fn default() -> Self {
        Self {
            target_multiplier: 1.10,
            lead_multiplier: 2.0,
        }
    }
}

impl TargetCalculator {
    pub fn new(target_multiplier: f64, lead_multiplier: f64) -> Self {
        Self {
            target_multiplier,
            lead_multiplier,
        }
    }

    pub fn from_settings(settings: &PlannerSettings) -> Self {
        Self::new(settings.target_multiplier, settings.lead_multiplier)
    }

    /// One row per product, in input order.
    ///
    /// A zero price or conversion ratio yields non-finite metrics for that row
    /// (see [`ResultRow::issues`]); it never panics.
    pub fn calculate(&self, snapshot: &PlanSnapshot) -> ResultSet {
        ResultSet {
            revenue_goal: snapshot.revenue_goal,
            rows: snapshot
                .products
                .iter()
                .map(|p| self.calculate_row(snapshot.revenue_goal, p))
                .collect(),
        }
    }

    pub fn calculate_row(&self, revenue_goal: f64, product: &ProductSnapshot) -> ResultRow {
        let revenue_goal_product = (revenue_goal * product.product_value) / 100.0;
        let units_to_sell = revenue_goal_product / product.price;
        let target_units = units_to_sell * self.target_multiplier;
        let leads_required = units_to_sell / (product.conversion_ratio / 100.0);
        let double_leads = leads_required * self.lead_multiplier;

        ResultRow {
            product: product.clone(),
            revenue_goal_product,
            units_to_sell,
            target_units,
            leads_required,
            double_leads,
        }
    }
}
