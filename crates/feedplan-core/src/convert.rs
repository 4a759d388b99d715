//! Unit and calorie conversions.
//!
//! Everything here is a pure function of its arguments. Divisions that could
//! hit zero return 0 instead of NaN or infinity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Millilitres in one US fluid ounce.
pub const ML_PER_OUNCE: f64 = 29.5735;

/// Calories per ounce added by one extra teaspoon of powder.
pub const KCAL_PER_OZ_PER_TSP: f64 = 2.5;

pub fn ml_to_oz(ml: f64) -> f64 {
    ml / ML_PER_OUNCE
}

pub fn oz_to_ml(oz: f64) -> f64 {
    oz * ML_PER_OUNCE
}

/// Calories delivered by one feed of `feeding_size_ml` at `kcal_per_ounce`.
pub fn calories_per_feeding(kcal_per_ounce: f64, feeding_size_ml: f64) -> f64 {
    kcal_per_ounce * ml_to_oz(feeding_size_ml)
}

pub fn daily_calorie_goal(weight_kg: f64, kcal_per_kg: f64) -> f64 {
    weight_kg * kcal_per_kg
}

/// Number of feeds needed to reach `daily_goal`; 0 when a feed carries no calories.
pub fn feedings_per_day(daily_goal: f64, calories_per_feeding: f64) -> f64 {
    if calories_per_feeding > 0.0 {
        daily_goal / calories_per_feeding
    } else {
        0.0
    }
}

/// Calories per ounce of formula mixed at standard strength.
///
/// `formula_kcal` is read as kcal per 100 ml and rescaled to one ounce.
pub fn standard_kcal_per_ounce(formula_kcal: f64) -> f64 {
    formula_kcal * ML_PER_OUNCE / 100.0
}

/// Even spacing between feeds over a 24 hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingInterval {
    pub hours: u32,
    pub minutes: u32,
}

impl FeedingInterval {
    /// Returns `None` when there are no feeds to space out.
    pub fn from_feedings_per_day(feedings_per_day: f64) -> Option<Self> {
        if !feedings_per_day.is_finite() || feedings_per_day <= 0.0 {
            return None;
        }
        let between = 24.0 / feedings_per_day;
        let hours = between.trunc();
        let minutes = ((between - hours) * 60.0).trunc();
        Some(Self {
            hours: hours as u32,
            minutes: minutes as u32,
        })
    }
}

impl fmt::Display for FeedingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// How much extra powder to add per ounce to reach a target concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "teaspoons", rename_all = "snake_case")]
pub enum PowderInstruction {
    /// Target is at or below standard strength.
    NoneNeeded,
    /// Some extra is needed but less than an eighth of a teaspoon.
    Negligible,
    Eighth,
    Quarter,
    Half,
    ThreeQuarters,
    /// One decimal place is enough at this size.
    Teaspoons(f64),
}

/// Ordered (exclusive upper bound, instruction) pairs, scanned first to last.
const POWDER_BUCKETS: [(f64, PowderInstruction); 5] = [
    (0.125, PowderInstruction::Negligible),
    (0.25, PowderInstruction::Eighth),
    (0.375, PowderInstruction::Quarter),
    (0.625, PowderInstruction::Half),
    (0.875, PowderInstruction::ThreeQuarters),
];

impl PowderInstruction {
    /// Bucket a teaspoon-per-ounce amount into a measurable instruction.
    pub fn for_teaspoons(tsp: f64) -> Self {
        POWDER_BUCKETS
            .iter()
            .find(|(upper, _)| tsp < *upper)
            .map(|(_, instruction)| *instruction)
            .unwrap_or(Self::Teaspoons(tsp))
    }
}

impl fmt::Display for PowderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneNeeded => f.write_str("None needed"),
            Self::Negligible => f.write_str("No extra powder needed"),
            Self::Eighth => f.write_str("~1/8 tsp per oz"),
            Self::Quarter => f.write_str("~1/4 tsp per oz"),
            Self::Half => f.write_str("~1/2 tsp per oz"),
            Self::ThreeQuarters => f.write_str("~3/4 tsp per oz"),
            Self::Teaspoons(tsp) => write!(f, "~{tsp:.1} tsp per oz"),
        }
    }
}

/// Extra powder needed to lift `standard_kcal_per_oz` formula to `target_kcal_per_oz`.
pub fn extra_powder(target_kcal_per_oz: f64, standard_kcal_per_oz: f64) -> PowderInstruction {
    if target_kcal_per_oz <= standard_kcal_per_oz {
        return PowderInstruction::NoneNeeded;
    }
    let extra_kcal = target_kcal_per_oz - standard_kcal_per_oz;
    PowderInstruction::for_teaspoons(extra_kcal / KCAL_PER_OZ_PER_TSP)
}
