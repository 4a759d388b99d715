//! Feeding parameters supplied by the caller for one calculation pass.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The five numeric inputs every calculation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedingConfig {
    /// Baby's current weight (kg).
    #[serde(default = "default_weight_kg")]
    pub current_weight_kg: f64,
    /// Target calories per kg of body weight per day.
    #[serde(default = "default_target_kcal_per_kg")]
    pub target_kcal_per_kg: f64,
    /// Calories per ounce of the prepared feed.
    #[serde(default = "default_feed_kcal_per_ounce")]
    pub feed_kcal_per_ounce: f64,
    /// Volume of a single feed (ml).
    #[serde(default = "default_feeding_size_ml")]
    pub feeding_size_ml: f64,
    /// Formula calorie value. Used as kcal per 100 ml when computing
    /// consumed calories and standard strength.
    #[serde(default = "default_formula_kcal_per_tsp")]
    pub formula_kcal_per_tsp: f64,
}

fn default_weight_kg() -> f64 {
    4.0
}
fn default_target_kcal_per_kg() -> f64 {
    120.0
}
fn default_feed_kcal_per_ounce() -> f64 {
    20.0
}
fn default_feeding_size_ml() -> f64 {
    100.0
}
fn default_formula_kcal_per_tsp() -> f64 {
    2.5
}

impl Default for FeedingConfig {
    fn default() -> Self {
        Self {
            current_weight_kg: default_weight_kg(),
            target_kcal_per_kg: default_target_kcal_per_kg(),
            feed_kcal_per_ounce: default_feed_kcal_per_ounce(),
            feeding_size_ml: default_feeding_size_ml(),
            formula_kcal_per_tsp: default_formula_kcal_per_tsp(),
        }
    }
}

impl FeedingConfig {
    /// Check the ranges the calculations assume.
    ///
    /// # Errors
    ///
    /// Returns the first field that is NaN/infinite or negative, or a
    /// feeding size that is not strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let non_negative = [
            ("current_weight_kg", self.current_weight_kg),
            ("target_kcal_per_kg", self.target_kcal_per_kg),
            ("feed_kcal_per_ounce", self.feed_kcal_per_ounce),
            ("feeding_size_ml", self.feeding_size_ml),
            ("formula_kcal_per_tsp", self.formula_kcal_per_tsp),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }
        if self.feeding_size_ml <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "feeding_size_ml",
                value: self.feeding_size_ml,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(FeedingConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        let cfg = FeedingConfig {
            current_weight_kg: -1.0,
            ..FeedingConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::Negative {
                field: "current_weight_kg",
                value: -1.0
            })
        );
    }

    #[test]
    fn zero_feeding_size_rejected() {
        let cfg = FeedingConfig {
            feeding_size_ml: 0.0,
            ..FeedingConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ValidationError::NotPositive { field: "feeding_size_ml", .. })
        ));
    }

    #[test]
    fn nan_rejected() {
        let cfg = FeedingConfig {
            formula_kcal_per_tsp: f64::NAN,
            ..FeedingConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::NotFinite { field: "formula_kcal_per_tsp" })
        );
    }

    #[test]
    fn zero_concentrations_are_allowed() {
        let cfg = FeedingConfig {
            feed_kcal_per_ounce: 0.0,
            formula_kcal_per_tsp: 0.0,
            ..FeedingConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
