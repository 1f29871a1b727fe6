use contracts::domain::a001_sales_plan::{InputError, PlanSession, ProductField, ProductId};
use contracts::shared::config::{load_config, DisplaySettings, PlannerConfig};
use contracts::usecases::u501_calculate_targets::{
    ResultSet, TargetCalculator, ValidationGate, ValidationReport,
};
use leptos::prelude::*;

/// Встроенная конфигурация планировщика
const PLANNER_TOML: &str = include_str!("../../planner.toml");

/// Session store shared by every panel of the page
#[derive(Clone, Copy)]
pub struct PlannerContext {
    pub config: StoredValue<PlannerConfig>,
    pub session: RwSignal<PlanSession>,
    pub results: RwSignal<Option<ResultSet>>,
    pub show_charts: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PlannerContext {
    pub fn new() -> Self {
        let config = match load_config(Some(PLANNER_TOML)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("planner.toml rejected, falling back to defaults: {}", e);
                PlannerConfig::default()
            }
        };
        let session = PlanSession::new(config.planner.initial_products);

        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(session),
            results: RwSignal::new(None),
            show_charts: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn gate(&self) -> ValidationGate {
        self.config
            .with_value(|c| ValidationGate::from_settings(&c.planner))
    }

    pub fn calculator(&self) -> TargetCalculator {
        self.config
            .with_value(|c| TargetCalculator::from_settings(&c.planner))
    }

    pub fn display(&self) -> DisplaySettings {
        self.config.with_value(|c| c.display.clone())
    }

    /// Reactive: re-evaluated on every session change
    pub fn report(&self) -> ValidationReport {
        let gate = self.gate();
        self.session.with(|s| gate.evaluate(s))
    }

    pub fn set_revenue_goal(&self, text: &str) -> Result<(), InputError> {
        let outcome = self
            .session
            .try_update(|s| s.set_revenue_goal(text))
            .unwrap_or(Ok(()));
        if let Err(e) = &outcome {
            log::debug!("revenue goal input rejected: {}", e);
        }
        outcome
    }

    pub fn update_field(
        &self,
        id: ProductId,
        field: ProductField,
        text: &str,
    ) -> Result<(), InputError> {
        let outcome = self
            .session
            .try_update(|s| s.update_field(id, field, text))
            .unwrap_or(Err(InputError::UnknownProduct(id)));
        if let Err(e) = &outcome {
            log::debug!("{} of product {} rejected: {}", field.label(), id, e);
        }
        outcome
    }

    pub fn add_product(&self) {
        if let Some(id) = self.session.try_update(|s| s.add_product()) {
            log::info!("product {} added", id);
        }
    }

    pub fn remove_product(&self, id: ProductId) {
        let removed = self
            .session
            .try_update(|s| s.remove_product(id))
            .unwrap_or(false);
        if removed {
            log::info!("product {} removed", id);
        } else {
            log::warn!("product {} not found for removal", id);
        }
    }

    pub fn rename_product(&self, id: ProductId, name: &str) {
        let outcome = self
            .session
            .try_update(|s| s.rename_product(id, name))
            .unwrap_or(Err(InputError::UnknownProduct(id)));
        if let Err(e) = outcome {
            log::error!("rename failed: {}", e);
            self.error.set(Some(e.to_string()));
        }
    }

    /// Gate the session and replace the results with a fresh calculation
    pub fn calculate(&self) {
        let gate = self.gate();
        let snapshot = self.session.with_untracked(|s| gate.snapshot(s));

        match snapshot {
            Ok(snapshot) => {
                let results = self.calculator().calculate(&snapshot);
                for row in results.iter() {
                    for issue in row.issues() {
                        log::warn!("{}: {}", row.product.name, issue.message());
                    }
                }
                log::info!(
                    "calculated targets for {} products, revenue goal {}",
                    results.len(),
                    results.revenue_goal
                );
                self.results.set(Some(results));
                self.error.set(None);
            }
            Err(blocked) => {
                log::error!("calculation blocked: {}", blocked);
                self.error.set(Some(blocked.to_string()));
            }
        }
    }

    /// Start over: blank products, no results
    pub fn reset(&self) {
        let initial = self.config.with_value(|c| c.planner.initial_products);
        self.session.update(|s| s.reset(initial));
        self.results.set(None);
        self.show_charts.set(false);
        self.error.set(None);
        log::info!("session reset");
    }

    pub fn toggle_charts(&self) {
        self.show_charts.update(|v| *v = !*v);
    }
}
