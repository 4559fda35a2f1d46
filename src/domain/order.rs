//! Order aggregate: lifecycle states, customer snapshot, and the draft/view
//! shapes that cross the repository boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            other => Err(DomainError::InvalidInput(format!(
                "unknown shipping method '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    Card,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::Cod => "cod",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(PaymentMethod::Upi),
            "card" => Ok(PaymentMethod::Card),
            "cod" => Ok(PaymentMethod::Cod),
            other => Err(DomainError::InvalidInput(format!(
                "unknown payment method '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "paid" => Ok(PaymentStatus::Paid),
            other => Err(DomainError::InvalidInput(format!(
                "unknown payment status '{other}'"
            ))),
        }
    }
}

/// Lifecycle of a persisted order.
///
/// Orders are only persisted once payment has succeeded, so they enter at
/// `Confirmed`. Every later transition comes from the admin status update,
/// which accepts any value: the store does not enforce forward movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states never advance further; tracking stops on them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::InvalidInput(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

/// Delivery details captured at checkout and frozen on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerInfo {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub pincode: String,
    #[serde(default)]
    pub landmark: String,
    pub state: String,
    pub city: String,
}

impl CustomerInfo {
    /// Edge validation: everything but landmark is required; mobile must be
    /// 10 digits and pincode 6 digits.
    pub fn validate(&self) -> Result<(), DomainError> {
        fn required(field: &str, value: &str) -> Result<(), DomainError> {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidInput(format!("{field} is required")));
            }
            Ok(())
        }

        required("name", &self.name)?;
        required("mobile", &self.mobile)?;
        required("address", &self.address)?;
        required("pincode", &self.pincode)?;
        required("state", &self.state)?;
        required("city", &self.city)?;

        if self.mobile.len() != 10 || !self.mobile.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidInput(
                "mobile must be a 10-digit number".to_string(),
            ));
        }
        if self.pincode.len() != 6 || !self.pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidInput(
                "pincode must be a 6-digit number".to_string(),
            ));
        }
        Ok(())
    }
}

/// One purchased line, with the product fields the tracking page needs
/// frozen at order time. Later catalog changes never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: i64,
    pub image: String,
    pub quantity: i32,
}

/// An assembled, not-yet-persisted order. Produced by the checkout
/// orchestrator after payment confirmation; consumed by the repository.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub customer: CustomerInfo,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    /// Per-checkout-attempt token; a duplicate create with the same token
    /// resolves to the already-persisted order instead of a second row.
    pub idempotency_key: Option<String>,
}

/// A persisted order as read back from the store.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub order_code: String,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub customer: CustomerInfo,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Human-facing order code, e.g. `ORD483920`. Distinct from the storage id.
pub fn generate_order_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("ORD{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Asha Rao".to_string(),
            mobile: "9876543210".to_string(),
            address: "12 Lake View Road".to_string(),
            pincode: "600042".to_string(),
            landmark: String::new(),
            state: "Tamil Nadu".to_string(),
            city: "Chennai".to_string(),
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(valid_customer().validate().is_ok());
    }

    #[test]
    fn landmark_is_optional() {
        let mut c = valid_customer();
        c.landmark = String::new();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut c = valid_customer();
        c.name = "  ".to_string();
        assert!(matches!(c.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn short_mobile_is_rejected() {
        let mut c = valid_customer();
        c.mobile = "12345".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_numeric_pincode_is_rejected() {
        let mut c = valid_customer();
        c.pincode = "60004a".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn status_round_trips_through_wire_form() {
        for s in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(s.as_str().parse::<OrderStatus>().unwrap(), s);
        }
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        assert!("packed".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn only_delivered_and_cancelled_are_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
    }

    #[test]
    fn order_code_has_expected_shape() {
        let code = generate_order_code();
        assert!(code.starts_with("ORD"));
        assert_eq!(code.len(), 9);
        assert!(code[3..].bytes().all(|b| b.is_ascii_digit()));
    }
}
