//! Federal withholding estimate over marginal tax brackets
//!
//! Tax is the sum of each bracket slice taxed at that bracket's rate; the
//! top rate never applies to the whole income. Bracket and standard
//! deduction figures are the 2024 federal tables.

use serde::{Deserialize, Serialize};

use super::{check_range, CalcError};
use crate::safe_div;

/// Federal filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

/// One bracket: income up to `upper` is taxed at `rate`
#[derive(Debug, Clone, Copy)]
struct Bracket {
    rate: f64,
    upper: f64,
}

const SINGLE: [Bracket; 7] = [
    Bracket { rate: 0.10, upper: 11_600.0 },
    Bracket { rate: 0.12, upper: 47_150.0 },
    Bracket { rate: 0.22, upper: 100_525.0 },
    Bracket { rate: 0.24, upper: 191_950.0 },
    Bracket { rate: 0.32, upper: 243_725.0 },
    Bracket { rate: 0.35, upper: 609_350.0 },
    Bracket { rate: 0.37, upper: f64::INFINITY },
];

const MARRIED_JOINT: [Bracket; 7] = [
    Bracket { rate: 0.10, upper: 23_200.0 },
    Bracket { rate: 0.12, upper: 94_300.0 },
    Bracket { rate: 0.22, upper: 201_050.0 },
    Bracket { rate: 0.24, upper: 383_900.0 },
    Bracket { rate: 0.32, upper: 487_450.0 },
    Bracket { rate: 0.35, upper: 731_200.0 },
    Bracket { rate: 0.37, upper: f64::INFINITY },
];

const MARRIED_SEPARATE: [Bracket; 7] = [
    Bracket { rate: 0.10, upper: 11_600.0 },
    Bracket { rate: 0.12, upper: 47_150.0 },
    Bracket { rate: 0.22, upper: 100_525.0 },
    Bracket { rate: 0.24, upper: 191_950.0 },
    Bracket { rate: 0.32, upper: 243_725.0 },
    Bracket { rate: 0.35, upper: 365_600.0 },
    Bracket { rate: 0.37, upper: f64::INFINITY },
];

const HEAD_OF_HOUSEHOLD: [Bracket; 7] = [
    Bracket { rate: 0.10, upper: 16_550.0 },
    Bracket { rate: 0.12, upper: 63_100.0 },
    Bracket { rate: 0.22, upper: 100_500.0 },
    Bracket { rate: 0.24, upper: 191_950.0 },
    Bracket { rate: 0.32, upper: 243_700.0 },
    Bracket { rate: 0.35, upper: 609_350.0 },
    Bracket { rate: 0.37, upper: f64::INFINITY },
];

impl FilingStatus {
    fn brackets(&self) -> &'static [Bracket; 7] {
        match self {
            FilingStatus::Single => &SINGLE,
            FilingStatus::MarriedJoint => &MARRIED_JOINT,
            FilingStatus::MarriedSeparate => &MARRIED_SEPARATE,
            FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
        }
    }

    /// Standard deduction for this status
    pub fn standard_deduction(&self) -> f64 {
        match self {
            FilingStatus::Single | FilingStatus::MarriedSeparate => 14_600.0,
            FilingStatus::MarriedJoint => 29_200.0,
            FilingStatus::HeadOfHousehold => 21_900.0,
        }
    }
}

/// Tax on `taxable` income, summed slice by slice in ascending order
pub fn marginal_tax(taxable: f64, status: FilingStatus) -> f64 {
    let mut tax = 0.0;
    let mut lower = 0.0;
    for bracket in status.brackets() {
        if taxable <= lower {
            break;
        }
        let slice = taxable.min(bracket.upper) - lower;
        tax += slice * bracket.rate;
        lower = bracket.upper;
    }
    tax
}

/// Inputs for a withholding checkup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingInput {
    pub annual_income: f64,
    pub filing_status: FilingStatus,
    /// Amount currently withheld each pay period
    pub withholding_per_period: f64,
    pub pay_periods_per_year: f64,
    /// `None` takes the standard deduction for the filing status
    pub deductions: Option<f64>,
    pub credits: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingResult {
    pub taxable_income: f64,
    /// Bracket tax minus credits, floored at zero
    pub estimated_annual_tax: f64,
    /// Positive: on track for a refund; negative: projected amount owed
    pub projected_refund_or_owed: f64,
    /// Per-period withholding that would land at exactly zero
    pub recommended_per_period: Option<f64>,
}

/// Estimate annual tax and how current withholding tracks against it
pub fn estimate_withholding(input: &WithholdingInput) -> Result<WithholdingResult, CalcError> {
    let income = check_range("income", input.annual_income, 0.0, 100_000_000.0)?;
    let withheld = check_range(
        "withholding per period",
        input.withholding_per_period,
        0.0,
        10_000_000.0,
    )?;
    let periods = check_range("pay periods", input.pay_periods_per_year, 1.0, 366.0)?;
    let credits = check_range("credits", input.credits, 0.0, 10_000_000.0)?;
    let deductions = match input.deductions {
        Some(d) => check_range("deductions", d, 0.0, 100_000_000.0)?,
        None => input.filing_status.standard_deduction(),
    };

    let taxable_income = (income - deductions).max(0.0);
    let estimated_annual_tax = (marginal_tax(taxable_income, input.filing_status) - credits).max(0.0);
    let projected_refund_or_owed = withheld * periods - estimated_annual_tax;

    Ok(WithholdingResult {
        taxable_income,
        estimated_annual_tax,
        projected_refund_or_owed,
        recommended_per_period: safe_div(estimated_annual_tax, periods),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_bracket_only() {
        // Entirely inside the 10% bracket
        let tax = marginal_tax(10_000.0, FilingStatus::Single);
        assert!((tax - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_bracket_creep() {
        // $50,000 single: 11600*0.10 + 35550*0.12 + 2850*0.22
        let tax = marginal_tax(50_000.0, FilingStatus::Single);
        let expected = 11_600.0 * 0.10 + (47_150.0 - 11_600.0) * 0.12 + (50_000.0 - 47_150.0) * 0.22;
        assert!((tax - expected).abs() < 1e-9);
        // Far below flat-rate-at-top-bracket
        assert!(tax < 50_000.0 * 0.22);
    }

    #[test]
    fn test_zero_taxable() {
        assert_eq!(marginal_tax(0.0, FilingStatus::MarriedJoint), 0.0);
    }

    #[test]
    fn test_withholding_projection() {
        let result = estimate_withholding(&WithholdingInput {
            annual_income: 64_600.0,
            filing_status: FilingStatus::Single,
            withholding_per_period: 250.0,
            pay_periods_per_year: 26.0,
            deductions: None,
            credits: 0.0,
        })
        .unwrap();

        // Standard deduction leaves exactly $50,000 taxable
        assert!((result.taxable_income - 50_000.0).abs() < 1e-9);
        let annual = marginal_tax(50_000.0, FilingStatus::Single);
        assert!((result.estimated_annual_tax - annual).abs() < 1e-9);
        assert!((result.projected_refund_or_owed - (6_500.0 - annual)).abs() < 1e-9);
        let per_period = result.recommended_per_period.unwrap();
        assert!((per_period * 26.0 - annual).abs() < 1e-9);
    }

    #[test]
    fn test_credits_floor_at_zero() {
        let result = estimate_withholding(&WithholdingInput {
            annual_income: 20_000.0,
            filing_status: FilingStatus::Single,
            withholding_per_period: 0.0,
            pay_periods_per_year: 26.0,
            deductions: None,
            credits: 50_000.0,
        })
        .unwrap();
        assert_eq!(result.estimated_annual_tax, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: more income never means less tax
        #[test]
        fn prop_tax_monotonic(
            income1 in 0.0f64..1_000_000.0,
            extra in 0.0f64..1_000_000.0,
            which in 0usize..4
        ) {
            let status = [
                FilingStatus::Single,
                FilingStatus::MarriedJoint,
                FilingStatus::MarriedSeparate,
                FilingStatus::HeadOfHousehold,
            ][which];
            let low = marginal_tax(income1, status);
            let high = marginal_tax(income1 + extra, status);
            prop_assert!(high >= low - 1e-9);
        }

        /// Property: effective rate never reaches the top marginal rate
        #[test]
        fn prop_effective_below_marginal(income in 1.0f64..5_000_000.0) {
            let tax = marginal_tax(income, FilingStatus::Single);
            prop_assert!(tax < income * 0.37);
        }
    }
}
