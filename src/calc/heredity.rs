//! Simplified trait inheritance tables
//!
//! A pedagogical approximation, not real genetics: each trait is treated as
//! a single factor with a fixed dominance order given by the value index.
//! Equal parents give a deterministic child; differing parents split 75/25
//! toward the dominant value, 50/50 for the codominant AB blood type cases,
//! and a three-way blend for the polygenic traits (height, skin tone).
//! Keep the tables as-is; the simplification is deliberate.

use serde::Serialize;

use super::CalcError;

/// Traits the predictor knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    EyeColor,
    HairColor,
    BloodType,
    Height,
    SkinTone,
}

impl TraitKind {
    /// Category values in dominance order (lower index dominates)
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            TraitKind::EyeColor => &["brown", "green", "blue"],
            TraitKind::HairColor => &["black", "brown", "red", "blonde"],
            TraitKind::BloodType => &["A", "B", "AB", "O"],
            TraitKind::Height => &["tall", "average", "short"],
            TraitKind::SkinTone => &["dark", "medium", "light"],
        }
    }

    /// Polygenic traits blend instead of dominating
    pub fn is_polygenic(&self) -> bool {
        matches!(self, TraitKind::Height | TraitKind::SkinTone)
    }
}

/// One predicted value with its probability in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitOutcome {
    pub value: &'static str,
    pub percent: f64,
}

/// Index of the AB value in the blood type table
const BLOOD_AB: usize = 2;

/// Predict the child distribution for one trait from two parent value
/// indexes into [`TraitKind::values`]. Probabilities always sum to 100.
pub fn predict(
    kind: TraitKind,
    parent_a: usize,
    parent_b: usize,
) -> Result<Vec<TraitOutcome>, CalcError> {
    let values = kind.values();
    if parent_a >= values.len() || parent_b >= values.len() {
        return Err(CalcError::UnknownValue {
            field: "parent trait",
        });
    }

    // Equal parents: deterministic child
    if parent_a == parent_b {
        return Ok(vec![TraitOutcome {
            value: values[parent_a],
            percent: 100.0,
        }]);
    }

    // Lower index = dominant value
    let (dom, rec) = (parent_a.min(parent_b), parent_a.max(parent_b));

    if kind == TraitKind::BloodType && (parent_a == BLOOD_AB || parent_b == BLOOD_AB) {
        // Codominant: AB crossed with anything else splits evenly
        return Ok(vec![
            TraitOutcome {
                value: values[parent_a],
                percent: 50.0,
            },
            TraitOutcome {
                value: values[parent_b],
                percent: 50.0,
            },
        ]);
    }

    if kind.is_polygenic() {
        // Blend across the span between the parents
        if rec - dom >= 2 {
            let middle = (dom + rec) / 2;
            return Ok(vec![
                TraitOutcome {
                    value: values[dom],
                    percent: 25.0,
                },
                TraitOutcome {
                    value: values[middle],
                    percent: 50.0,
                },
                TraitOutcome {
                    value: values[rec],
                    percent: 25.0,
                },
            ]);
        }
        // Adjacent values have no distinct midpoint
        return Ok(vec![
            TraitOutcome {
                value: values[dom],
                percent: 50.0,
            },
            TraitOutcome {
                value: values[rec],
                percent: 50.0,
            },
        ]);
    }

    // Simple dominance: 75/25
    Ok(vec![
        TraitOutcome {
            value: values[dom],
            percent: 75.0,
        },
        TraitOutcome {
            value: values[rec],
            percent: 25.0,
        },
    ])
}
