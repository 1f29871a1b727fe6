//! Gate deciding whether the planner form can be calculated

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::request::{PlanSnapshot, ProductSnapshot};
use crate::domain::a001_sales_plan::{PlanSession, ProductInput};
use crate::shared::config::PlannerSettings;

/// Advisory state of the product value total, shown next to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    /// No product value entered yet
    NotStarted,
    /// Some product value entered, total is not 100
    Unbalanced,
    /// Total is 100
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_product_value: f64,
    pub is_product_value_valid: bool,
    pub has_all_required_fields: bool,
    pub can_calculate: bool,
    pub status: AllocationStatus,
}

/// Why a session could not be turned into a [`PlanSnapshot`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationBlocked {
    #[error("no products to calculate")]
    NoProducts,

    #[error("revenue goal is not set")]
    MissingRevenueGoal,

    #[error("{product} has empty fields")]
    MissingFields { product: String },

    #[error("product values total {total}%, expected 100%")]
    Unbalanced { total: f64 },
}

/// Sum of all product values; unset fields count as 0
pub fn total_product_value(products: &[ProductInput]) -> f64 {
    products
        .iter()
        .fold(0.0, |sum, p| sum + p.product_value.value_or_zero())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationGate {
    tolerance: f64,
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

impl ValidationGate {
    /// `tolerance` is the allowed distance of the total from 100; 0 is exact equality
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn from_settings(settings: &PlannerSettings) -> Self {
        Self::new(settings.percent_tolerance)
    }

    pub fn is_total_valid(&self, total: f64) -> bool {
        (total - 100.0).abs() <= self.tolerance
    }

    pub fn evaluate(&self, session: &PlanSession) -> ValidationReport {
        let products = session.products();
        let total = total_product_value(products);
        let is_product_value_valid = self.is_total_valid(total);
        let has_all_required_fields = session.revenue_goal().is_set()
            && products.iter().all(ProductInput::has_all_required_fields);

        let any_value_entered = products.iter().any(|p| p.product_value.is_set());
        let status = match (any_value_entered, is_product_value_valid) {
            (false, _) => AllocationStatus::NotStarted,
            (true, false) => AllocationStatus::Unbalanced,
            (true, true) => AllocationStatus::Balanced,
        };

        ValidationReport {
            total_product_value: total,
            is_product_value_valid,
            has_all_required_fields,
            can_calculate: has_all_required_fields && is_product_value_valid,
            status,
        }
    }

    pub fn can_calculate(&self, session: &PlanSession) -> bool {
        self.evaluate(session).can_calculate
    }

    /// Numeric copy of `session`, or the first reason it cannot be calculated
    pub fn snapshot(&self, session: &PlanSession) -> Result<PlanSnapshot, CalculationBlocked> {
        let products = session.products();
        if products.is_empty() {
            return Err(CalculationBlocked::NoProducts);
        }

        let revenue_goal = session
            .revenue_goal()
            .value()
            .ok_or(CalculationBlocked::MissingRevenueGoal)?;

        let snapshots = products
            .iter()
            .map(product_snapshot)
            .collect::<Result<Vec<_>, _>>()?;

        let total = total_product_value(products);
        if !self.is_total_valid(total) {
            return Err(CalculationBlocked::Unbalanced { total });
        }

        Ok(PlanSnapshot {
            revenue_goal,
            products: snapshots,
        })
    }
}

fn product_snapshot(product: &ProductInput) -> Result<ProductSnapshot, CalculationBlocked> {
    let missing = || CalculationBlocked::MissingFields {
        product: product.name.clone(),
    };
    Ok(ProductSnapshot {
        id: product.id,
        name: product.name.clone(),
        product_value: product.product_value.value().ok_or_else(missing)?,
        sales_ratio: product.sales_ratio.value().ok_or_else(missing)?,
        price: product.price.value().ok_or_else(missing)?,
        conversion_ratio: product.conversion_ratio.value().ok_or_else(missing)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_plan::ProductField;

    fn filled_session(values: &[&str]) -> PlanSession {
        let mut session = PlanSession::new(values.len());
        session.set_revenue_goal("1000000").unwrap();
        let ids: Vec<_> = session.products().iter().map(|p| p.id).collect();
        for (id, value) in ids.into_iter().zip(values) {
            session.update_field(id, ProductField::ProductValue, value).unwrap();
            session.update_field(id, ProductField::SalesRatio, "30").unwrap();
            session.update_field(id, ProductField::Price, "1000").unwrap();
            session.update_field(id, ProductField::ConversionRatio, "10").unwrap();
        }
        session
    }

    #[test]
    fn test_filled_and_balanced_can_calculate() {
        let gate = ValidationGate::default();
        for values in [&["100"][..], &["40", "60"][..], &["25", "25", "50"][..], &["0", "100"][..]] {
            let report = gate.evaluate(&filled_session(values));
            assert!(report.can_calculate, "values {:?}", values);
            assert_eq!(report.status, AllocationStatus::Balanced);
        }
    }

    #[test]
    fn test_unbalanced_total_never_calculates() {
        let gate = ValidationGate::default();
        for values in [&["99"][..], &["40", "59"][..], &["50", "50", "1"][..], &["0"][..]] {
            let report = gate.evaluate(&filled_session(values));
            assert!(report.has_all_required_fields);
            assert!(!report.can_calculate, "values {:?}", values);
            assert_eq!(report.status, AllocationStatus::Unbalanced);
        }
    }

    #[test]
    fn test_total_of_99_9_is_rejected() {
        let gate = ValidationGate::default();
        let report = gate.evaluate(&filled_session(&["39.9", "60"]));
        assert!((report.total_product_value - 99.9).abs() < 1e-9);
        assert!(!report.is_product_value_valid);
        assert!(!report.can_calculate);
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let session = filled_session(&["39.9", "60"]);
        assert!(!ValidationGate::new(0.0).can_calculate(&session));
        assert!(ValidationGate::new(0.5).can_calculate(&session));
    }

    #[test]
    fn test_zero_products_is_never_valid() {
        let mut session = PlanSession::empty();
        session.set_revenue_goal("1000").unwrap();
        let report = ValidationGate::default().evaluate(&session);
        assert_eq!(report.total_product_value, 0.0);
        assert!(!report.is_product_value_valid);
        assert!(!report.can_calculate);
        assert_eq!(report.status, AllocationStatus::NotStarted);
        assert_eq!(
            ValidationGate::default().snapshot(&session),
            Err(CalculationBlocked::NoProducts)
        );
    }

    #[test]
    fn test_missing_fields_block_calculation() {
        let gate = ValidationGate::default();

        let mut session = filled_session(&["100"]);
        let id = session.products()[0].id;
        session.update_field(id, ProductField::SalesRatio, "").unwrap();
        let report = gate.evaluate(&session);
        assert!(report.is_product_value_valid);
        assert!(!report.has_all_required_fields);
        assert!(!report.can_calculate);
        assert_eq!(
            gate.snapshot(&session),
            Err(CalculationBlocked::MissingFields {
                product: "Product A".to_string()
            })
        );

        let mut session = filled_session(&["100"]);
        session.set_revenue_goal("").unwrap();
        assert!(!gate.can_calculate(&session));
        assert_eq!(
            gate.snapshot(&session),
            Err(CalculationBlocked::MissingRevenueGoal)
        );
    }

    #[test]
    fn test_unset_values_count_as_zero() {
        let mut session = PlanSession::new(3);
        let first = session.products()[0].id;
        session.update_field(first, ProductField::ProductValue, "100").unwrap();
        let report = ValidationGate::default().evaluate(&session);
        assert_eq!(report.total_product_value, 100.0);
        assert!(report.is_product_value_valid);
        assert!(!report.has_all_required_fields);
        assert_eq!(report.status, AllocationStatus::Balanced);
    }

    #[test]
    fn test_fresh_session_is_not_started() {
        let report = ValidationGate::default().evaluate(&PlanSession::new(3));
        assert_eq!(report.status, AllocationStatus::NotStarted);
        assert!(!report.can_calculate);
    }

    #[test]
    fn test_snapshot_preserves_order_and_values() {
        let session = filled_session(&["40", "60"]);
        let snapshot = ValidationGate::default().snapshot(&session).unwrap();
        assert_eq!(snapshot.revenue_goal, 1_000_000.0);
        let ids: Vec<_> = snapshot.products.iter().map(|p| p.id).collect();
        let expected: Vec<_> = session.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(snapshot.products[0].product_value, 40.0);
        assert_eq!(snapshot.products[1].product_value, 60.0);
        assert_eq!(snapshot.products[1].sales_ratio, 30.0);
    }

    #[test]
    fn test_snapshot_reports_unbalanced_total() {
        let session = filled_session(&["40", "50"]);
        assert_eq!(
            ValidationGate::default().snapshot(&session),
            Err(CalculationBlocked::Unbalanced { total: 90.0 })
        );
    }
}
