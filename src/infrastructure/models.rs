use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub order_code: String,
    pub idempotency_key: Option<String>,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub customer_pincode: String,
    pub customer_landmark: String,
    pub customer_state: String,
    pub customer_city: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub status: String,
    pub payment_status: String,
    pub payment_id: Option<String>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub order_code: String,
    pub idempotency_key: Option<String>,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub customer_pincode: String,
    pub customer_landmark: String,
    pub customer_state: String,
    pub customer_city: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub status: String,
    pub payment_status: String,
    pub payment_id: Option<String>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: i64,
    pub image: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: i64,
    pub image: String,
    pub quantity: i32,
}
