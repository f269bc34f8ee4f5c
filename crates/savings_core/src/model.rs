//! Request and response types for the savings calculator.
//!
//! Wire names are camelCase to match the published API. The bounds below are
//! the documented input ranges; [`crate::validation`] enforces them and the
//! calculator assumes them.

use serde::{Deserialize, Serialize};

/// Upper bound for the current pot size.
pub const MAX_POT_SIZE: f64 = 10_000_000.0;
/// Upper bound for the annual growth rate (a unit fraction, so 1.0 = 100%).
pub const MAX_GROWTH_RATE: f64 = 1.0;
/// Lower bound for the investment horizon in years.
pub const MIN_YEARS: u32 = 1;
/// Upper bound for the investment horizon in years.
pub const MAX_YEARS: u32 = 100;
/// Upper bound for the regular monthly contribution.
pub const MAX_MONTHLY_CONTRIBUTION: f64 = 1_000_000.0;
/// Upper bound for the target future value.
pub const MAX_TARGET_VALUE: f64 = 100_000_000.0;

/// Inputs for projecting the future value of a savings pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValueRequest {
    /// C: current pot size
    pub current_pot_size: f64,
    /// i: annual growth rate as a unit fraction (0.05 = 5%)
    pub annual_growth_rate: f64,
    /// t: number of compounding periods (whole years)
    pub number_of_years: u32,
    /// Pmt: regular monthly contribution
    pub regular_monthly_contribution: f64,
}

/// Inputs for solving the monthly contribution needed to reach a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetContributionRequest {
    /// C: current pot size
    pub current_pot_size: f64,
    /// i: annual growth rate as a unit fraction (0.05 = 5%)
    pub annual_growth_rate: f64,
    /// t: number of compounding periods (whole years)
    pub number_of_years: u32,
    /// FV: target pot size at the end of the horizon
    pub future_value: f64,
}

/// Result of either operation: the inputs echoed back alongside the computed
/// field. Produced fresh per call; carries no identity beyond the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProjection {
    pub current_pot_size: f64,
    pub annual_growth_rate: f64,
    pub number_of_years: u32,
    pub regular_monthly_contribution: f64,
    pub future_value: f64,
}
