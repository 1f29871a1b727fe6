pub mod calculator;
pub mod chart;
pub mod request;
pub mod response;
pub mod totals;
pub mod validation;

pub use calculator::TargetCalculator;
pub use chart::{chart_points, ChartPoint, ChartScale};
pub use request::{PlanSnapshot, ProductSnapshot};
pub use response::{ResultRow, ResultSet, RowIssue};
pub use totals::Totals;
pub use validation::{
    total_product_value, AllocationStatus, CalculationBlocked, ValidationGate, ValidationReport,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CalculateTargets;

impl UseCaseMetadata for CalculateTargets {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "calculate_targets"
    }

    fn display_name() -> &'static str {
        "Sales Target Planner"
    }

    fn description() -> &'static str {
        "Professional sales planning using the Chunking Method"
    }
}
