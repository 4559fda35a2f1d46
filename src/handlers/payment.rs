use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::PaymentGateway;
use crate::errors::AppError;
use crate::infrastructure::razorpay::RazorpayGateway;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGatewayOrderRequest {
    /// Amount in whole rupees; converted to paise before it reaches the
    /// gateway.
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub receipt: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GatewayOrderResponse {
    pub id: String,
    /// In paise.
    pub amount: i64,
    pub currency: String,
}

/// POST /payment/create-order
///
/// Phase 1 of the payment flow: registers the amount to charge with the
/// gateway and returns its order handle for the client-side checkout UI.
#[utoipa::path(
    post,
    path = "/payment/create-order",
    request_body = CreateGatewayOrderRequest,
    responses(
        (status = 200, description = "Gateway order handle", body = GatewayOrderResponse),
        (status = 502, description = "Gateway unreachable or rejected the order"),
    ),
    tag = "payment"
)]
pub async fn create_gateway_order(
    gateway: web::Data<RazorpayGateway>,
    body: web::Json<CreateGatewayOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let order = gateway
        .create_order(body.amount, &body.currency, &body.receipt)
        .await?;

    Ok(HttpResponse::Ok().json(GatewayOrderResponse {
        id: order.gateway_order_id,
        amount: order.amount,
        currency: order.currency,
    }))
}
