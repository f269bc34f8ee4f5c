//! Savings projection library
//!
//! Closed-form compound-interest calculations for a regular savings plan:
//! - projecting the future value of a pot given a regular monthly contribution
//! - solving for the monthly contribution needed to reach a target pot size
//!
//! Both operations are pure, synchronous functions with no shared state, so
//! they are safe to call concurrently from any number of request handlers.
//! Input bounds are enforced by the [`validation`] module before either
//! operation runs; within those bounds the calculations never produce NaN,
//! infinities or negative contributions.

#![warn(clippy::all)]

pub mod calculator;
pub mod model;
pub mod validation;

pub use calculator::{calculate_future_value, calculate_target_monthly_savings};
pub use model::{FutureValueRequest, SavingsProjection, TargetContributionRequest};
pub use validation::FieldViolation;
