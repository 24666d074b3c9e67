//! Navy circumference body fat estimation
//!
//! Men: BF% = 86.010 × log10(waist − neck) − 70.041 × log10(height) + 36.76
//! Women: BF% = 163.205 × log10(waist + hip − neck) − 97.684 × log10(height) − 78.387
//! (all measurements in inches)
//!
//! The log argument goes non-positive when waist ≤ neck (or waist + hip ≤
//! neck); the result is clamped into [0, 60] instead of propagating NaN.

use serde::{Deserialize, Serialize};

use super::energy::Sex;
use super::{check_range, CalcError};
use crate::safe_log10;

/// Body fat percentage band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    Obese,
}

/// Circumference measurements, in inches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub sex: Sex,
    pub height_in: f64,
    pub waist_in: f64,
    pub neck_in: f64,
    /// Required for the female formula, ignored for the male one
    pub hip_in: Option<f64>,
}

/// Body fat estimate, always inside [0, 60]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub body_fat_percent: f64,
    pub category: BodyFatCategory,
}

/// Estimate body fat percentage with the Navy circumference method
pub fn body_fat(input: &BodyFatInput) -> Result<BodyFatResult, CalcError> {
    let height = check_range("height", input.height_in, 20.0, 110.0)?;
    let waist = check_range("waist", input.waist_in, 10.0, 100.0)?;
    let neck = check_range("neck", input.neck_in, 5.0, 40.0)?;

    let raw = match input.sex {
        Sex::Male => {
            let girth = safe_log10(waist - neck);
            girth.map(|g| 86.010 * g - 70.041 * height.log10() + 36.76)
        }
        Sex::Female => {
            let hip = input.hip_in.ok_or(CalcError::Missing { field: "hip" })?;
            let hip = check_range("hip", hip, 10.0, 100.0)?;
            let girth = safe_log10(waist + hip - neck);
            girth.map(|g| 163.205 * g - 97.684 * height.log10() - 78.387)
        }
    };

    // Undefined log argument pins the estimate to the bottom of the band
    let body_fat_percent = raw.unwrap_or(0.0).clamp(0.0, 60.0);

    Ok(BodyFatResult {
        category: classify(body_fat_percent, input.sex),
        body_fat_percent,
    })
}

/// Classify a body fat percentage into its band
pub fn classify(percent: f64, sex: Sex) -> BodyFatCategory {
    let thresholds = match sex {
        Sex::Male => [6.0, 14.0, 18.0, 25.0],
        Sex::Female => [14.0, 21.0, 25.0, 32.0],
    };
    if percent < thresholds[0] {
        BodyFatCategory::Essential
    } else if percent < thresholds[1] {
        BodyFatCategory::Athletic
    } else if percent < thresholds[2] {
        BodyFatCategory::Fitness
    } else if percent < thresholds[3] {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Obese
    }
}
