//! Proportion solver: one unknown of a/b = c/d
//!
//! Solving cross-multiplies and divides by the coefficient opposite the
//! unknown, so a zero there makes the result undefined rather than a crash.

use serde::{Deserialize, Serialize};

use super::{check_finite, CalcError};
use crate::safe_div;

/// Which position of a/b = c/d is the unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveFor {
    A,
    B,
    C,
    D,
}

/// The three known values (the unknown position is ignored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProportionInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub solve_for: SolveFor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProportionResult {
    /// The solved value; `None` when the divisor is zero
    pub value: Option<f64>,
    /// `(a·d, b·c)` with the solved value substituted in
    pub cross_check: Option<(f64, f64)>,
}

/// Solve a/b = c/d for the requested unknown
pub fn solve_proportion(input: &ProportionInput) -> Result<ProportionResult, CalcError> {
    let a = check_finite("a", input.a)?;
    let b = check_finite("b", input.b)?;
    let c = check_finite("c", input.c)?;
    let d = check_finite("d", input.d)?;

    let value = match input.solve_for {
        SolveFor::A => safe_div(b * c, d),
        SolveFor::B => safe_div(a * d, c),
        SolveFor::C => safe_div(a * d, b),
        SolveFor::D => safe_div(b * c, a),
    };

    let cross_check = value.map(|v| {
        let (a, b, c, d) = match input.solve_for {
            SolveFor::A => (v, b, c, d),
            SolveFor::B => (a, v, c, d),
            SolveFor::C => (a, b, v, d),
            SolveFor::D => (a, b, c, v),
        };
        (a * d, b * c)
    });

    Ok(ProportionResult { value, cross_check })
}
