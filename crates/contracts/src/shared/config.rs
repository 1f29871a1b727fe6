//! Planner configuration.
//!
//! Loaded from TOML. Every key is optional; anything left out keeps the
//! default from [`DEFAULT_CONFIG`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::number_format::{format_currency, format_number, Grouping};

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[planner]
initial_products = 3
target_multiplier = 1.10
lead_multiplier = 2.0
percent_tolerance = 0.0

[display]
currency_symbol = "₹"
pdf_currency_symbol = "Rs. "
grouping = "indian"
number_decimals = 1

[export]
file_stem = "sales-target-plan"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub planner: PlannerSettings,
    pub display: DisplaySettings,
    pub export: ExportSettings,
}

/// Calculation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Blank products created for a fresh session
    pub initial_products: usize,
    /// targetUnits = unitsToSell * target_multiplier
    pub target_multiplier: f64,
    /// doubleLeads = leadsRequired * lead_multiplier
    pub lead_multiplier: f64,
    /// Allowed distance of the product value total from 100. 0 means exact.
    pub percent_tolerance: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            initial_products: 3,
            target_multiplier: 1.10,
            lead_multiplier: 2.0,
            percent_tolerance: 0.0,
        }
    }
}

/// Number display rules for screen and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    /// Symbol used where only ASCII text can be drawn (PDF base fonts)
    pub pdf_currency_symbol: String,
    pub grouping: Grouping,
    /// Maximum fraction digits for plain numbers
    pub number_decimals: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            pdf_currency_symbol: "Rs. ".to_string(),
            grouping: Grouping::Indian,
            number_decimals: 1,
        }
    }
}

impl DisplaySettings {
    pub fn currency(&self, value: f64) -> String {
        format_currency(value, &self.currency_symbol, self.grouping)
    }

    pub fn pdf_currency(&self, value: f64) -> String {
        format_currency(value, &self.pdf_currency_symbol, self.grouping)
    }

    pub fn number(&self, value: f64) -> String {
        format_number(value, self.number_decimals)
    }

    /// "Revenue Goal" -> "Revenue Goal (₹)"
    pub fn currency_label(&self, label: &str) -> String {
        format!("{} ({})", label, self.currency_symbol.trim())
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{:.1}%", value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub file_stem: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_stem: "sales-target-plan".to_string(),
        }
    }
}

impl ExportSettings {
    /// `<stem>-<YYYY-MM-DD>.<extension>`
    pub fn file_name(&self, date: NaiveDate, extension: &str) -> String {
        format!("{}-{}.{}", self.file_stem, date.format("%Y-%m-%d"), extension)
    }
}

impl PlannerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.planner;
        if !p.target_multiplier.is_finite() || p.target_multiplier <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "planner.target_multiplier must be positive, got {}",
                p.target_multiplier
            )));
        }
        if !p.lead_multiplier.is_finite() || p.lead_multiplier <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "planner.lead_multiplier must be positive, got {}",
                p.lead_multiplier
            )));
        }
        if !p.percent_tolerance.is_finite() || p.percent_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "planner.percent_tolerance must be >= 0, got {}",
                p.percent_tolerance
            )));
        }
        if self.export.file_stem.trim().is_empty() {
            return Err(ConfigError::Invalid("export.file_stem is empty".into()));
        }
        Ok(())
    }
}

/// Load configuration.
///
/// Parses `source` when given, otherwise the embedded [`DEFAULT_CONFIG`].
pub fn load_config(source: Option<&str>) -> Result<PlannerConfig, ConfigError> {
    PlannerConfig::from_toml_str(source.unwrap_or(DEFAULT_CONFIG))
}
