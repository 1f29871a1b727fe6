use serde::{Deserialize, Serialize};

use super::response::ResultRow;

/// Summary sums over a result set.
///
/// Never stored alongside the rows: every place that shows a total calls
/// [`Totals::from_rows`] so the numbers always agree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub revenue_goal: f64,
    pub units_to_sell: f64,
    pub leads_required: f64,
    pub double_leads: f64,
}

impl Totals {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            revenue_goal: acc.revenue_goal + row.revenue_goal_product,
            units_to_sell: acc.units_to_sell + row.units_to_sell,
            leads_required: acc.leads_required + row.leads_required,
            double_leads: acc.double_leads + row.double_leads,
        })
    }
}
