use serde::{Deserialize, Serialize};

use super::request::ProductSnapshot;
use super::totals::Totals;

/// Divisor that was zero when a row was calculated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowIssue {
    /// `units_to_sell` divides by price
    ZeroPrice,
    /// `leads_required` divides by conversion ratio
    ZeroConversion,
}

impl RowIssue {
    pub fn message(&self) -> &'static str {
        match self {
            RowIssue::ZeroPrice => "Price is 0: units cannot be derived",
            RowIssue::ZeroConversion => "Conversion ratio is 0: leads cannot be derived",
        }
    }
}

/// Calculated targets for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(flatten)]
    pub product: ProductSnapshot,
    /// Share of the revenue goal carried by this product
    pub revenue_goal_product: f64,
    pub units_to_sell: f64,
    /// Units with the safety buffer applied
    pub target_units: f64,
    pub leads_required: f64,
    /// Conservative leads target
    pub double_leads: f64,
}

impl ResultRow {
    /// Zero divisors behind non-finite metrics of this row
    pub fn issues(&self) -> Vec<RowIssue> {
        let mut issues = Vec::new();
        if self.product.price == 0.0 {
            issues.push(RowIssue::ZeroPrice);
        }
        if self.product.conversion_ratio == 0.0 {
            issues.push(RowIssue::ZeroConversion);
        }
        issues
    }

    pub fn is_finite(&self) -> bool {
        [
            self.revenue_goal_product,
            self.units_to_sell,
            self.target_units,
            self.leads_required,
            self.double_leads,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Output of one calculation run, in the order of the input products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Revenue goal the rows were calculated from
    pub revenue_goal: f64,
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    /// Same reduction as [`Totals::from_rows`]
    pub fn totals(&self) -> Totals {
        Totals::from_rows(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_plan::ProductId;

    fn row(price: f64, conversion_ratio: f64) -> ResultRow {
        ResultRow {
            product: ProductSnapshot {
                id: ProductId::new(4),
                name: "Product D".to_string(),
                product_value: 25.0,
                sales_ratio: 30.0,
                price,
                conversion_ratio,
            },
            revenue_goal_product: 2500.0,
            units_to_sell: 25.0,
            target_units: 27.5,
            leads_required: 125.0,
            double_leads: 250.0,
        }
    }

    #[test]
    fn test_row_serializes_flat_camel_case() {
        let json = serde_json::to_value(row(100.0, 20.0)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["name"], "Product D");
        assert_eq!(json["productValue"], 25.0);
        assert_eq!(json["conversionRatio"], 20.0);
        assert_eq!(json["revenueGoalProduct"], 2500.0);
        assert_eq!(json["doubleLeads"], 250.0);
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_issues_name_zero_divisors() {
        assert!(row(100.0, 20.0).issues().is_empty());
        assert_eq!(row(0.0, 20.0).issues(), vec![RowIssue::ZeroPrice]);
        assert_eq!(row(100.0, 0.0).issues(), vec![RowIssue::ZeroConversion]);
        assert!(RowIssue::ZeroPrice.message().starts_with("Price is 0"));
    }
}
