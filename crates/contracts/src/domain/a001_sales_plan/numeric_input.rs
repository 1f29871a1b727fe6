//! Parse boundary for numeric form fields.
//!
//! Text typed into the planner form is parsed exactly once, here. Everything
//! downstream sees either a bounded finite `f64` or an explicit "unset".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::ProductId;

/// Inclusive range accepted by a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl FieldBounds {
    /// Percentage fields: 0..=100
    pub const PERCENT: Self = Self {
        min: 0.0,
        max: Some(100.0),
    };

    /// Money fields (revenue goal, price): >= 0
    pub const NON_NEGATIVE: Self = Self {
        min: 0.0,
        max: None,
    };

    /// `min` attribute of the matching `<input type="number">`
    pub fn min_attr(&self) -> String {
        self.min.to_string()
    }

    /// `max` attribute, absent for unbounded fields
    pub fn max_attr(&self) -> Option<String> {
        self.max.map(|max| max.to_string())
    }

    pub fn check(&self, value: f64) -> Result<(), InputError> {
        if value < self.min {
            return Err(InputError::BelowMinimum {
                value,
                min: self.min,
            });
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(InputError::AboveMaximum { value, max });
            }
        }
        Ok(())
    }
}

/// Rejected edit. The previous field value stays in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },

    #[error("{value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },

    #[error("product {0} not found")]
    UnknownProduct(ProductId),
}

/// Accepted text of a numeric field together with its parsed value.
///
/// `value == None` is the "unset" state (empty text). It is distinct from
/// `Some(0.0)`: a field holding "0" counts as filled in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericInput {
    text: String,
    value: Option<f64>,
}

impl NumericInput {
    pub fn unset() -> Self {
        Self::default()
    }

    /// Parse user text against `bounds`.
    ///
    /// Empty (or whitespace-only) text yields the unset state. Text that is
    /// not a finite number, or falls outside `bounds`, is rejected.
    pub fn parse(text: &str, bounds: FieldBounds) -> Result<Self, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::unset());
        }

        let value = trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotANumber(trimmed.to_string()))?;
        bounds.check(value)?;

        Ok(Self {
            text: trimmed.to_string(),
            value: Some(value),
        })
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Parsed value, with unset counted as zero
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_as_input_attributes() {
        assert_eq!(FieldBounds::PERCENT.min_attr(), "0");
        assert_eq!(FieldBounds::PERCENT.max_attr().as_deref(), Some("100"));
        assert_eq!(FieldBounds::NON_NEGATIVE.min_attr(), "0");
        assert_eq!(FieldBounds::NON_NEGATIVE.max_attr(), None);
    }

    #[test]
    fn test_empty_text_is_unset() {
        let input = NumericInput::parse("", FieldBounds::PERCENT).unwrap();
        assert!(!input.is_set());
        assert_eq!(input.value(), None);
        assert_eq!(input.value_or_zero(), 0.0);

        let blank = NumericInput::parse("   ", FieldBounds::NON_NEGATIVE).unwrap();
        assert!(!blank.is_set());
    }

    #[test]
    fn test_zero_is_set() {
        let input = NumericInput::parse("0", FieldBounds::PERCENT).unwrap();
        assert!(input.is_set());
        assert_eq!(input.value(), Some(0.0));
        assert_eq!(input.text(), "0");
    }

    #[test]
    fn test_percent_bounds() {
        assert!(NumericInput::parse("100", FieldBounds::PERCENT).is_ok());
        assert!(NumericInput::parse("99.9", FieldBounds::PERCENT).is_ok());
        assert_eq!(
            NumericInput::parse("100.1", FieldBounds::PERCENT),
            Err(InputError::AboveMaximum {
                value: 100.1,
                max: 100.0
            })
        );
        assert_eq!(
            NumericInput::parse("-1", FieldBounds::PERCENT),
            Err(InputError::BelowMinimum {
                value: -1.0,
                min: 0.0
            })
        );
    }

    #[test]
    fn test_non_negative_has_no_upper_bound() {
        let input = NumericInput::parse("125000000", FieldBounds::NON_NEGATIVE).unwrap();
        assert_eq!(input.value(), Some(125_000_000.0));
        assert!(NumericInput::parse("-0.01", FieldBounds::NON_NEGATIVE).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert_eq!(
            NumericInput::parse("12abc", FieldBounds::NON_NEGATIVE),
            Err(InputError::NotANumber("12abc".to_string()))
        );
        assert!(NumericInput::parse("inf", FieldBounds::NON_NEGATIVE).is_err());
        assert!(NumericInput::parse("NaN", FieldBounds::NON_NEGATIVE).is_err());
    }

    #[test]
    fn test_keeps_trimmed_text() {
        let input = NumericInput::parse(" 40.5 ", FieldBounds::PERCENT).unwrap();
        assert_eq!(input.text(), "40.5");
        assert_eq!(input.value(), Some(40.5));
    }
}
