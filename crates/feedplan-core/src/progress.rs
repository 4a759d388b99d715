//! Daily totals and progress against the calorie goal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::convert::{self, FeedingInterval, PowderInstruction};
use crate::feeding::FeedingConfig;
use crate::log::FeedingLog;

/// Feeds per day above which the inputs are probably wrong.
pub const HIGH_FEEDINGS_PER_DAY: f64 = 20.0;
/// Feeds per day below which the inputs are probably wrong.
pub const LOW_FEEDINGS_PER_DAY: f64 = 4.0;

/// Advisory raised when the feeding cadence looks implausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedingWarning {
    UnusuallyHigh,
    UnusuallyLow,
}

impl FeedingWarning {
    pub fn check(feedings_per_day: f64) -> Option<Self> {
        if feedings_per_day > HIGH_FEEDINGS_PER_DAY {
            Some(Self::UnusuallyHigh)
        } else if feedings_per_day < LOW_FEEDINGS_PER_DAY {
            Some(Self::UnusuallyLow)
        } else {
            None
        }
    }
}

impl fmt::Display for FeedingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusuallyHigh => f.write_str(
                "More than 20 feedings per day seems unusually high. Please check your inputs.",
            ),
            Self::UnusuallyLow => f.write_str(
                "Fewer than 4 feedings per day seems unusually low for an infant. Please check your inputs.",
            ),
        }
    }
}

/// Plan-level figures that depend only on the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub daily_calorie_goal: f64,
    pub feeding_size_oz: f64,
    pub calories_per_feeding: f64,
    pub feedings_per_day: f64,
    pub feeding_interval: Option<FeedingInterval>,
    pub standard_kcal_per_ounce: f64,
    pub extra_powder: PowderInstruction,
    pub warning: Option<FeedingWarning>,
}

impl Totals {
    pub fn compute(config: &FeedingConfig) -> Self {
        let daily_calorie_goal =
            convert::daily_calorie_goal(config.current_weight_kg, config.target_kcal_per_kg);
        let calories_per_feeding =
            convert::calories_per_feeding(config.feed_kcal_per_ounce, config.feeding_size_ml);
        let feedings_per_day = convert::feedings_per_day(daily_calorie_goal, calories_per_feeding);
        let standard_kcal_per_ounce = convert::standard_kcal_per_ounce(config.formula_kcal_per_tsp);

        let warning = FeedingWarning::check(feedings_per_day);
        if let Some(warning) = warning {
            tracing::warn!(feedings_per_day, "{warning}");
        }

        Self {
            daily_calorie_goal,
            feeding_size_oz: convert::ml_to_oz(config.feeding_size_ml),
            calories_per_feeding,
            feedings_per_day,
            feeding_interval: FeedingInterval::from_feedings_per_day(feedings_per_day),
            standard_kcal_per_ounce,
            extra_powder: convert::extra_powder(config.feed_kcal_per_ounce, standard_kcal_per_ounce),
            warning,
        }
    }
}

/// Derived state of the day, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub daily_calorie_goal: f64,
    pub calories_per_feeding: f64,
    pub feedings_per_day: f64,
    pub consumed_ml: f64,
    pub consumed_calories: f64,
    /// Negative once the goal has been exceeded.
    pub remaining_calories: f64,
    pub remaining_ml: f64,
    /// Always within `0..=100`.
    pub progress_percent: f64,
}

impl Progress {
    pub fn compute(config: &FeedingConfig, log: &FeedingLog) -> Self {
        let daily_calorie_goal =
            convert::daily_calorie_goal(config.current_weight_kg, config.target_kcal_per_kg);
        let calories_per_feeding =
            convert::calories_per_feeding(config.feed_kcal_per_ounce, config.feeding_size_ml);
        let concentration = config.formula_kcal_per_tsp;

        let consumed_ml = log.consumed_ml();
        let consumed_calories = consumed_ml / 100.0 * concentration;
        let remaining_calories = daily_calorie_goal - consumed_calories;
        let remaining_ml = if concentration > 0.0 {
            remaining_calories / concentration * 100.0
        } else {
            0.0
        };
        let progress_percent = if daily_calorie_goal > 0.0 {
            (consumed_calories / daily_calorie_goal * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            daily_calorie_goal,
            calories_per_feeding,
            feedings_per_day: convert::feedings_per_day(daily_calorie_goal, calories_per_feeding),
            consumed_ml,
            consumed_calories,
            remaining_calories,
            remaining_ml,
            progress_percent,
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.remaining_calories <= 0.0
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        self.progress_percent / 100.0
    }
}
