//! Maintenance calories: Mifflin-St Jeor BMR and TDEE
//!
//! Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
//! Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161

use serde::{Deserialize, Serialize};

use super::{check_range, CalcError};

/// Biological sex, used only as the additive offset in the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier, always inside [1.2, 1.9]
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// Inputs for a maintenance calorie estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceInput {
    pub age_years: f64,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

/// Maintenance calorie estimate with goal targets around TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceResult {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_multiplier: f64,
    /// TDEE - 500, floored at 1200 kcal
    pub loss: f64,
    /// TDEE - 250, floored at 1200 kcal
    pub mild_loss: f64,
    pub maintain: f64,
    /// TDEE + 250
    pub mild_gain: f64,
    /// TDEE + 500
    pub gain: f64,
}

/// Mifflin-St Jeor basal metabolic rate
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Full maintenance estimate: BMR, TDEE and goal calories
pub fn maintenance_calories(input: &MaintenanceInput) -> Result<MaintenanceResult, CalcError> {
    let age = check_range("age", input.age_years, 0.0, 120.0)?;
    let weight = check_range("weight", input.weight_kg, 1.0, 500.0)?;
    let height = check_range("height", input.height_cm, 50.0, 300.0)?;

    let bmr = bmr_mifflin(weight, height, age, input.sex);
    let multiplier = input.activity.multiplier();
    let tdee = bmr * multiplier;

    Ok(MaintenanceResult {
        bmr,
        tdee,
        activity_multiplier: multiplier,
        loss: (tdee - 500.0).max(1200.0),
        mild_loss: (tdee - 250.0).max(1200.0),
        maintain: tdee,
        mild_gain: tdee + 250.0,
        gain: tdee + 500.0,
    })
}
