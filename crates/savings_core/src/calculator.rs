//! Closed-form savings calculations.
//!
//! No iteration or root-finding: both operations invert cleanly. Validation
//! lives in [`crate::validation`] so everything here stays a pure unit that
//! can be tested in isolation.

use crate::model::{FutureValueRequest, SavingsProjection, TargetContributionRequest};

const MONTHS_PER_YEAR: f64 = 12.0;

/// `(1 + i)^t`: growth of a lump sum over the horizon.
fn growth(rate: f64, years: u32) -> f64 {
    (1.0 + rate).powi(years as i32)
}

/// `12 * ((1 + i)^t - 1) / i`: future value of one unit contributed every
/// month for `years` years.
///
/// The factor compounds on the annual effective rate and scales by 12 rather
/// than compounding month by month. That approximation is part of the
/// published behaviour and must not be replaced with a true monthly annuity.
/// Callers handle `rate == 0` before reaching this.
fn annuity_factor(rate: f64, years: u32) -> f64 {
    MONTHS_PER_YEAR * (growth(rate, years) - 1.0) / rate
}

/// Calculate the future value of a savings pot.
///
/// `FV = C * (1 + i)^t + Pmt * 12 * ((1 + i)^t - 1) / i`, with a
/// straight-line fallback `FV = C + Pmt * 12 * t` when the growth rate is
/// zero. Deterministic and side-effect-free; finite for all inputs within
/// the documented bounds.
pub fn calculate_future_value(input: &FutureValueRequest) -> SavingsProjection {
    let FutureValueRequest {
        current_pot_size,
        annual_growth_rate,
        number_of_years,
        regular_monthly_contribution,
    } = *input;

    let future_value = if annual_growth_rate == 0.0 {
        // Zero growth would divide by zero in the annuity factor.
        current_pot_size
            + regular_monthly_contribution * MONTHS_PER_YEAR * f64::from(number_of_years)
    } else {
        current_pot_size * growth(annual_growth_rate, number_of_years)
            + regular_monthly_contribution * annuity_factor(annual_growth_rate, number_of_years)
    };

    SavingsProjection {
        current_pot_size,
        annual_growth_rate,
        number_of_years,
        regular_monthly_contribution,
        future_value,
    }
}

/// Calculate the monthly contribution needed to reach a target pot size.
///
/// Algebraic inverse of [`calculate_future_value`]:
/// `Pmt = (FV - C * (1 + i)^t) / (12 * ((1 + i)^t - 1) / i)`.
///
/// Returns a zero contribution when the goal is already met
/// (`FV <= C`, short-circuited before any division) or when growth on the
/// existing pot alone overshoots the target and the formula goes negative.
pub fn calculate_target_monthly_savings(input: &TargetContributionRequest) -> SavingsProjection {
    let TargetContributionRequest {
        current_pot_size,
        annual_growth_rate,
        number_of_years,
        future_value,
    } = *input;

    let contribution = if future_value <= current_pot_size {
        // Goal already achieved; bailing out here also sidesteps the
        // degenerate FV == C case when the rate is zero.
        0.0
    } else if annual_growth_rate == 0.0 {
        (future_value - current_pot_size) / (MONTHS_PER_YEAR * f64::from(number_of_years))
    } else {
        (future_value - current_pot_size * growth(annual_growth_rate, number_of_years))
            / annuity_factor(annual_growth_rate, number_of_years)
    };

    SavingsProjection {
        current_pot_size,
        annual_growth_rate,
        number_of_years,
        // Never report a negative contribution.
        regular_monthly_contribution: contribution.max(0.0),
        future_value,
    }
}
