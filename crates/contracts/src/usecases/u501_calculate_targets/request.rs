use serde::{Deserialize, Serialize};

use crate::domain::a001_sales_plan::ProductId;

/// Strictly numeric copy of one product, as handed to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub product_value: f64,
    pub sales_ratio: f64,
    pub price: f64,
    pub conversion_ratio: f64,
}

/// Input of a single calculation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub revenue_goal: f64,
    pub products: Vec<ProductSnapshot>,
}
