use axum::{Json, extract::rejection::JsonRejection};

use savings_core::{
    FutureValueRequest, SavingsProjection, TargetContributionRequest, calculate_future_value,
    calculate_target_monthly_savings,
    validation::{validate_future_value_request, validate_target_contribution_request},
};

use crate::error::ApiResult;

// Handlers take the Json extractor's Result so a body that fails to parse
// (bad JSON, or a literal that cannot be coerced to the declared numeric
// kind) becomes an ApiError::MalformedBody instead of axum's stock
// rejection.

pub async fn future_value(
    body: Result<Json<FutureValueRequest>, JsonRejection>,
) -> ApiResult<Json<SavingsProjection>> {
    let Json(request) = body?;
    validate_future_value_request(&request)?;
    Ok(Json(calculate_future_value(&request)))
}

pub async fn target_monthly_savings(
    body: Result<Json<TargetContributionRequest>, JsonRejection>,
) -> ApiResult<Json<SavingsProjection>> {
    let Json(request) = body?;
    validate_target_contribution_request(&request)?;
    Ok(Json(calculate_target_monthly_savings(&request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[tokio::test]
    async fn test_future_value_happy_path() {
        let request = FutureValueRequest {
            current_pot_size: 0.0,
            annual_growth_rate: 0.0,
            number_of_years: 2,
            regular_monthly_contribution: 10.0,
        };

        let Json(projection) = future_value(Ok(Json(request))).await.unwrap();
        assert_eq!(projection.future_value, 240.0);
        assert_eq!(projection.regular_monthly_contribution, 10.0);
    }

    #[tokio::test]
    async fn test_target_monthly_savings_happy_path() {
        let request = TargetContributionRequest {
            current_pot_size: 100_000.0,
            annual_growth_rate: 0.05,
            number_of_years: 1,
            future_value: 150_000.0,
        };

        let Json(projection) = target_monthly_savings(Ok(Json(request))).await.unwrap();
        assert!((projection.regular_monthly_contribution - 3750.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_out_of_range_request_reports_all_violations() {
        let request = FutureValueRequest {
            current_pot_size: -1_000.0,
            annual_growth_rate: 1.5,
            number_of_years: 5,
            regular_monthly_contribution: 50.0,
        };

        let err = future_value(Ok(Json(request))).await.unwrap_err();
        match err {
            ApiError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
                assert!(fields.contains(&"currentPotSize"));
                assert!(fields.contains(&"annualGrowthRate"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_target_request_out_of_range_rejected() {
        let request = TargetContributionRequest {
            current_pot_size: 1_000.0,
            annual_growth_rate: 0.05,
            number_of_years: 101,
            future_value: 200_000_000.0,
        };

        let err = target_monthly_savings(Ok(Json(request))).await.unwrap_err();
        match err {
            ApiError::Validation(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
