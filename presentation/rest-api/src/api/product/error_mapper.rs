use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;
use business::domain::product::rules::{NAME_REQUIRED, PRICE_NOT_POSITIVE};

use crate::api::error::{
    ApiError, ErrorResponse, FieldErrorResponse, IntoApiError, ValidationErrorResponse,
};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

fn body_error(path: &str, msg: &str) -> ApiError {
    ApiError::Validation(Json(ValidationErrorResponse {
        errors: vec![FieldErrorResponse {
            kind: "field".to_string(),
            value: None,
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body".to_string(),
        }],
    }))
}

impl IntoApiError for ProductError {
    fn into_api_error(self) -> ApiError {
        match self {
            ProductError::NameEmpty => body_error("name", NAME_REQUIRED),
            ProductError::PriceNotPositive => body_error("price", PRICE_NOT_POSITIVE),
            ProductError::NotFound => ApiError::NotFound(ErrorResponse::new(PRODUCT_NOT_FOUND)),
            ProductError::Repository(_) => ApiError::Internal(ErrorResponse::new(INTERNAL_ERROR)),
        }
    }
}
