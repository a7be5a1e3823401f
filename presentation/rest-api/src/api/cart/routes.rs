use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::{CartController, UpdateProductAmountParams};

use crate::api::cart::dto::{CartResponse, UpdateAmountRequest};
use crate::api::cart::error_mapper::parse_product_id;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::notifications::{Toast, ToastQueue};

pub struct CartApi {
    controller: Arc<dyn CartController>,
    toasts: Arc<ToastQueue>,
}

impl CartApi {
    pub fn new(controller: Arc<dyn CartController>, toasts: Arc<ToastQueue>) -> Self {
        Self { controller, toasts }
    }

    fn snapshot(&self, toasts: Vec<Toast>) -> CartResponse {
        CartResponse::new(&self.controller.cart(), toasts)
    }
}

/// Shopping cart API
///
/// Mutations never fail with a server error: a rejected change leaves the
/// cart as it was and explains why in `notifications`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the current cart together with notifications raised outside
    /// any cart request.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.snapshot(self.toasts.drain()))
    }

    /// Add one unit of a product
    ///
    /// Checks the stock first. A product not yet in the cart is looked up in
    /// the catalog and appended with amount 1.
    #[oai(path = "/cart/items/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, product_id: Path<String>) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(err) => return CartMutationResponse::bad_request(err),
        };

        let ((), toasts) = ToastQueue::capture(self.controller.add_product(product_id)).await;
        CartMutationResponse::Ok(Json(self.snapshot(toasts)))
    }

    /// Set the amount of a product
    ///
    /// Sets the quantity to exactly `amount` when the stock allows it.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_product_amount(
        &self,
        product_id: Path<String>,
        body: Json<UpdateAmountRequest>,
    ) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(err) => return CartMutationResponse::bad_request(err),
        };

        let params = UpdateProductAmountParams {
            product_id,
            amount: body.0.amount,
        };
        let ((), toasts) =
            ToastQueue::capture(self.controller.update_product_amount(params)).await;
        CartMutationResponse::Ok(Json(self.snapshot(toasts)))
    }

    /// Remove a product
    ///
    /// Drops the whole line item regardless of its amount.
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_product(&self, product_id: Path<String>) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(err) => return CartMutationResponse::bad_request(err),
        };

        let ((), toasts) =
            ToastQueue::capture(async { self.controller.remove_product(product_id) }).await;
        CartMutationResponse::Ok(Json(self.snapshot(toasts)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn bad_request(err: impl IntoErrorResponse) -> Self {
        let (_status, json) = err.into_error_response();
        CartMutationResponse::BadRequest(json)
    }
}
