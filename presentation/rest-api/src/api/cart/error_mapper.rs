use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::model::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Request rejected before it reaches the cart.
#[derive(Debug)]
pub enum CartRequestError {
    InvalidProductId,
}

impl IntoErrorResponse for CartRequestError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            CartRequestError::InvalidProductId => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_product_id",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

pub fn parse_product_id(raw: &str) -> Result<ProductId, CartRequestError> {
    raw.parse::<ProductId>()
        .map_err(|_| CartRequestError::InvalidProductId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_id() {
        assert_eq!(parse_product_id("3").unwrap(), ProductId::new(3));
    }

    #[test]
    fn should_map_invalid_id_to_bad_request() {
        let err = parse_product_id("abc").unwrap_err();

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "cart.invalid_product_id");
    }
}
