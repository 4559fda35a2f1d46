//! Checkout orchestration: cart → pricing → gateway order → payment
//! confirmation → persisted order. The only component with real sequencing
//! and failure logic.

use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::cart::Cart;
use crate::domain::order::{
    CustomerInfo, OrderDraft, OrderItem, OrderStatus, PaymentMethod, PaymentStatus,
    ShippingMethod,
};
use crate::domain::ports::{GatewayOrder, OrderRepository, PaymentGateway};
use crate::domain::pricing::{self, PricingBreakdown};

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout refuses to proceed with an empty cart; the gateway is never
    /// called for one.
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid discount code")]
    InvalidDiscountCode,

    #[error("invalid customer details: {0}")]
    InvalidCustomer(String),

    /// Retryable: the cart and form are untouched, the user resubmits.
    #[error("payment could not be initialized, try again: {0}")]
    PaymentInit(String),

    /// Money has moved but no order record exists. Surfaced with the payment
    /// reference so support can reconcile; never silently swallowed.
    #[error(
        "payment received but order not recorded; contact support with payment reference {payment_id}"
    )]
    OrderNotRecorded { payment_id: String, reason: String },
}

/// Checkout form state as submitted by the customer.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub customer: CustomerInfo,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub gift_wrap: bool,
    discount_applied: bool,
}

impl CheckoutForm {
    pub fn new(
        customer: CustomerInfo,
        shipping_method: ShippingMethod,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            customer,
            shipping_method,
            payment_method,
            gift_wrap: false,
            discount_applied: false,
        }
    }

    /// Marks the discount as applied when the code is recognized; an unknown
    /// code reports the invalid-code condition and leaves the form unchanged.
    pub fn apply_discount_code(&mut self, code: &str) -> Result<(), CheckoutError> {
        if pricing::code_is_valid(code) {
            self.discount_applied = true;
            Ok(())
        } else {
            Err(CheckoutError::InvalidDiscountCode)
        }
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }
}

/// Everything assembled between gateway phase 1 and the confirmation
/// callback: the frozen cart snapshot, the quoted breakdown, and the
/// gateway's order handle. The checkout session owns this until the order
/// is persisted.
#[derive(Debug)]
pub struct PendingCheckout {
    pub breakdown: PricingBreakdown,
    pub gateway_order: GatewayOrder,
    pub receipt: String,
    items: Vec<OrderItem>,
    form: CheckoutForm,
    idempotency_key: String,
}

/// Identity of a persisted order, for the confirmation view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: Uuid,
    pub order_code: String,
}

pub struct CheckoutService<R, G> {
    repo: R,
    gateway: G,
}

impl<R: OrderRepository, G: PaymentGateway> CheckoutService<R, G> {
    pub fn new(repo: R, gateway: G) -> Self {
        Self { repo, gateway }
    }

    /// Validates the cart and form, prices the order, and registers the
    /// amount with the gateway. Failure leaves the cart untouched and is
    /// retryable.
    pub async fn begin(
        &self,
        cart: &Cart,
        form: &CheckoutForm,
    ) -> Result<PendingCheckout, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        form.customer
            .validate()
            .map_err(|e| CheckoutError::InvalidCustomer(e.to_string()))?;

        let breakdown = pricing::quote(
            cart.subtotal(),
            form.shipping_method,
            form.gift_wrap,
            form.discount_applied,
        );

        let receipt = format!(
            "order_rcptid_{}",
            rand::thread_rng().gen_range(0..1_000_000u32)
        );

        let gateway_order = self
            .gateway
            .create_order(breakdown.total, "INR", &receipt)
            .await
            .map_err(|e| CheckoutError::PaymentInit(e.to_string()))?;

        let items = cart
            .lines()
            .iter()
            .map(|l| OrderItem {
                product_id: l.product.id.to_string(),
                product_name: l.product.name.to_string(),
                unit_price: l.product.price,
                image: l.product.image.to_string(),
                quantity: l.quantity,
            })
            .collect();

        Ok(PendingCheckout {
            breakdown,
            gateway_order,
            receipt,
            items,
            form: form.clone(),
            idempotency_key: format!("chk_{}", Uuid::new_v4().simple()),
        })
    }

    /// Entered from the gateway's confirmation callback.
    /// Persists the paid order, clears the cart, and hands back the
    /// identity for the confirmation view. The cart survives a persistence
    /// failure so nothing the user entered is lost.
    pub fn complete(
        &self,
        pending: PendingCheckout,
        payment_id: &str,
        cart: &mut Cart,
    ) -> Result<PlacedOrder, CheckoutError> {
        let draft = OrderDraft {
            items: pending.items,
            subtotal: pending.breakdown.subtotal,
            shipping: pending.breakdown.shipping_cost,
            total: pending.breakdown.total,
            customer: pending.form.customer,
            shipping_method: pending.form.shipping_method,
            payment_method: pending.form.payment_method,
            status: OrderStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            payment_id: Some(payment_id.to_string()),
            idempotency_key: Some(pending.idempotency_key),
        };

        match self.repo.create(draft) {
            Ok(order) => {
                cart.clear();
                Ok(PlacedOrder {
                    id: order.id,
                    order_code: order.order_code,
                })
            }
            Err(e) => Err(CheckoutError::OrderNotRecorded {
                payment_id: payment_id.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
