use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Order not found")]
    NotFound,

    #[error("Payment gateway error: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::Validation(msg),
            DomainError::Gateway(msg) => AppError::Gateway(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            AppError::Unauthorized => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Unauthorized"
            })),
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "Order not found"
            })),
            AppError::Gateway(_) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Payment could not be initialized, please try again"
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn validation_returns_400() {
        let err = AppError::Validation("mobile must be a 10-digit number".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_returns_401() {
        assert_eq!(
            AppError::Unauthorized.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn not_found_returns_404() {
        assert_eq!(
            AppError::NotFound.error_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn gateway_returns_502() {
        let err = AppError::Gateway("unreachable".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_invalid_input_maps_to_validation() {
        let app_err: AppError = DomainError::InvalidInput("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(_)));
    }

    #[test]
    fn domain_gateway_maps_to_gateway() {
        let app_err: AppError = DomainError::Gateway("down".to_string()).into();
        assert!(matches!(app_err, AppError::Gateway(_)));
    }
}
