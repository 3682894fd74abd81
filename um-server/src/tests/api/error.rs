use crate::ApiError;

use um_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "UNIQUE constraint failed: users.email");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "store unreachable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "store unreachable");
}

#[test]
fn test_unique_violation_maps_to_validation() {
    let db_error = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(db_error);

    assert!(matches!(api_error, ApiError::Validation { .. }));
}

#[test]
fn test_migration_error_maps_to_internal() {
    let db_error = DbError::Migration {
        message: "schema out of date".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(db_error);

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn test_uuid_parse_error_maps_to_validation() {
    let parse_error = uuid::Uuid::parse_str("invalidid").unwrap_err();

    let api_error = ApiError::from(parse_error);

    assert!(matches!(api_error, ApiError::Validation { .. }));
}
