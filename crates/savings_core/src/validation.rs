//! Range validation for savings requests.
//!
//! Runs before the calculator is invoked and reports every violated
//! constraint, not just the first, so a caller can fix a whole request in
//! one round trip. Kept separate from the calculation functions so those
//! stay pure.

use std::fmt;

use serde::Serialize;

use crate::model::{
    FutureValueRequest, MAX_GROWTH_RATE, MAX_MONTHLY_CONTRIBUTION, MAX_POT_SIZE, MAX_TARGET_VALUE,
    MAX_YEARS, MIN_YEARS, TargetContributionRequest,
};

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub type ValidationResult = Result<(), Vec<FieldViolation>>;

fn check_range(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    label: &str,
    value: f64,
    max: f64,
) {
    // JSON cannot carry NaN/infinity, but the core is callable directly.
    if !value.is_finite() {
        violations.push(FieldViolation {
            field,
            message: format!("{label} must be a finite number"),
        });
    } else if value < 0.0 {
        violations.push(FieldViolation {
            field,
            message: format!("{label} must be greater than or equal to 0"),
        });
    } else if value > max {
        violations.push(FieldViolation {
            field,
            message: format!("{label} must be less than or equal to {max}"),
        });
    }
}

fn check_common(violations: &mut Vec<FieldViolation>, pot: f64, rate: f64, years: u32) {
    check_range(violations, "currentPotSize", "Current Pot Size", pot, MAX_POT_SIZE);
    check_range(
        violations,
        "annualGrowthRate",
        "Annual growth rate",
        rate,
        MAX_GROWTH_RATE,
    );
    if years < MIN_YEARS {
        violations.push(FieldViolation {
            field: "numberOfYears",
            message: format!(
                "Number of compounding periods (years) must be greater than or equal to {MIN_YEARS}"
            ),
        });
    } else if years > MAX_YEARS {
        violations.push(FieldViolation {
            field: "numberOfYears",
            message: format!(
                "Number of compounding periods (years) must be less than or equal to {MAX_YEARS}"
            ),
        });
    }
}

/// Validate a future-value request against the documented bounds.
pub fn validate_future_value_request(input: &FutureValueRequest) -> ValidationResult {
    let mut violations = Vec::new();
    check_common(
        &mut violations,
        input.current_pot_size,
        input.annual_growth_rate,
        input.number_of_years,
    );
    check_range(
        &mut violations,
        "regularMonthlyContribution",
        "Regular monthly contribution",
        input.regular_monthly_contribution,
        MAX_MONTHLY_CONTRIBUTION,
    );
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

/// Validate a target-contribution request against the documented bounds.
pub fn validate_target_contribution_request(input: &TargetContributionRequest) -> ValidationResult {
    let mut violations = Vec::new();
    check_common(
        &mut violations,
        input.current_pot_size,
        input.annual_growth_rate,
        input.number_of_years,
    );
    check_range(
        &mut violations,
        "futureValue",
        "Future Value",
        input.future_value,
        MAX_TARGET_VALUE,
    );
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}
