//! Calorie burn estimation from MET values
//!
//! `kcal = MET × intensity × weight(kg) × duration(h)`. MET tables treat one
//! MET as the energy cost of sitting quietly; intensity scales the tabled
//! value for easier/harder-than-typical effort.

use serde::{Deserialize, Serialize};

use super::units::WeightUnit;
use super::{check_range, CalcError};
use crate::safe_div;

/// MET values for a handful of common activities
pub mod met {
    pub const WALKING_CASUAL: f64 = 3.5;
    pub const WALKING_BRISK: f64 = 4.3;
    pub const CYCLING_MODERATE: f64 = 7.5;
    pub const RUNNING_8KPH: f64 = 8.3;
    pub const RUNNING_10KPH: f64 = 10.0;
    pub const SWIMMING_LAPS: f64 = 6.0;
    pub const JUMP_ROPE: f64 = 12.3;
    pub const YOGA: f64 = 2.5;
}

/// Inputs for a single calorie burn estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBurnInput {
    pub weight: f64,
    pub weight_unit: WeightUnit,
    /// Metabolic equivalent of the activity
    pub met: f64,
    pub duration_minutes: f64,
    /// Effort scale around the tabled MET (1.0 = typical)
    pub intensity: f64,
}

/// Calorie burn estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBurnResult {
    pub total_calories: f64,
    /// Undefined when duration is zero
    pub per_minute: Option<f64>,
    pub per_hour: Option<f64>,
}

/// Estimate calories burned for an activity session
pub fn calorie_burn(input: &CalorieBurnInput) -> Result<CalorieBurnResult, CalcError> {
    let weight_kg = input.weight_unit.to_kg(input.weight);
    let weight_kg = check_range("weight", weight_kg, 1.0, 500.0)?;
    let met = check_range("MET", input.met, 0.5, 30.0)?;
    let duration = check_range("duration", input.duration_minutes, 0.0, 1440.0)?;
    let intensity = check_range("intensity", input.intensity, 0.1, 3.0)?;

    let total_calories = met * intensity * weight_kg * (duration / 60.0);
    let per_minute = safe_div(total_calories, duration);
    let per_hour = per_minute.map(|pm| pm * 60.0);

    Ok(CalorieBurnResult {
        total_calories,
        per_minute,
        per_hour,
    })
}
