use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::order::{
    CustomerInfo, OrderDraft, OrderItem, OrderStatus, OrderView, PaymentMethod, PaymentStatus,
    ShippingMethod,
};
use crate::domain::ports::OrderRepository;
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

// ── Request / response DTOs ──────────────────────────────────────────────────

/// The product fields frozen onto an order line at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLinePayload {
    pub product: ProductSnapshot,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLinePayload>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub customer_info: CustomerInfo,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    #[serde(default = "default_status")]
    pub status: OrderStatus,
    #[serde(default = "default_payment_status")]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_id: Option<String>,
    /// Per-checkout-attempt token; retried creates with the same token
    /// resolve to the already-persisted order.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

fn default_status() -> OrderStatus {
    OrderStatus::Confirmed
}

fn default_payment_status() -> PaymentStatus {
    PaymentStatus::Unpaid
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub order_code: String,
    pub items: Vec<OrderLinePayload>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub customer_info: CustomerInfo,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub created_at: String,
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        OrderResponse {
            id: view.id,
            order_code: view.order_code,
            items: view
                .items
                .into_iter()
                .map(|i| OrderLinePayload {
                    product: ProductSnapshot {
                        id: i.product_id,
                        name: i.product_name,
                        price: i.unit_price,
                        image: i.image,
                    },
                    quantity: i.quantity,
                })
                .collect(),
            subtotal: view.subtotal,
            shipping: view.shipping,
            total: view.total,
            customer_info: view.customer,
            shipping_method: view.shipping_method,
            payment_method: view.payment_method,
            status: view.status,
            payment_status: view.payment_status,
            payment_id: view.payment_id,
            created_at: view.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(body: CreateOrderRequest) -> Self {
        OrderDraft {
            items: body
                .items
                .into_iter()
                .map(|l| OrderItem {
                    product_id: l.product.id,
                    product_name: l.product.name,
                    unit_price: l.product.price,
                    image: l.product.image,
                    quantity: l.quantity,
                })
                .collect(),
            subtotal: body.subtotal,
            shipping: body.shipping,
            total: body.total,
            customer: body.customer_info,
            shipping_method: body.shipping_method,
            payment_method: body.payment_method,
            status: body.status,
            payment_status: body.payment_status,
            payment_id: body.payment_id,
            idempotency_key: body.idempotency_key,
        }
    }
}

// ── Admin guard ──────────────────────────────────────────────────────────────

/// Status updates and deletes are admin operations; the shared credential is
/// checked server-side on every call, not just at login.
fn require_admin(req: &HttpRequest, config: &AppConfig) -> Result<(), AppError> {
    let presented = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if presented == Some(config.admin_token.as_str()) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Persists an order draft. The order and its item snapshots are written in
/// one transaction; required customer fields are validated before anything
/// touches the database.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Missing or malformed customer fields"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    repo: web::Data<DieselOrderRepository>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let draft: OrderDraft = body.into_inner().into();

    let order = web::block(move || repo.create(draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders
///
/// All orders, newest first, each with its item snapshots.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    repo: web::Data<DieselOrderRepository>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || repo.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /orders/{id_or_code}
///
/// Resolves by internal id first, falling back to the human-facing order
/// code used on the tracking page.
#[utoipa::path(
    get,
    path = "/orders/{id_or_code}",
    params(
        ("id_or_code" = String, Path, description = "Order UUID or order code (e.g. ORD483920)"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    repo: web::Data<DieselOrderRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id_or_code = path.into_inner();

    let order = web::block(move || repo.find(&id_or_code))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}

/// PATCH /orders/{id}
///
/// Replaces the status field only. Any status value is accepted, including
/// backward transitions; the lifecycle is driven entirely by the admin.
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = OrderResponse),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_status(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    repo: web::Data<DieselOrderRepository>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    require_admin(&req, &config)?;

    let id = path.into_inner();
    let status = body.into_inner().status;

    let order = web::block(move || repo.update_status(id, status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /orders/{id}
///
/// Permanent removal, used only by the admin view.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    repo: web::Data<DieselOrderRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    require_admin(&req, &config)?;

    let id = path.into_inner();

    web::block(move || repo.delete(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().finish())
}
