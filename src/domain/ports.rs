use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::errors::DomainError;
use super::order::{OrderDraft, OrderStatus, OrderView};

/// Order Record Store contract. Implementations must give per-order
/// atomicity: an order and its items land together or not at all.
pub trait OrderRepository: Send + Sync {
    /// Persists the draft under a freshly generated identity and order code.
    /// A draft carrying an idempotency key that was already used resolves to
    /// the previously persisted order.
    fn create(&self, draft: OrderDraft) -> Result<OrderView, DomainError>;

    /// All orders, newest-created-first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;

    /// Looks up by internal id first, then by human-facing order code.
    fn find(&self, id_or_code: &str) -> Result<Option<OrderView>, DomainError>;

    /// Replaces the status field only. Any status value is accepted; the
    /// store does not validate lifecycle transitions.
    fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<OrderView, DomainError>;

    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

impl<T: OrderRepository> OrderRepository for &T {
    fn create(&self, draft: OrderDraft) -> Result<OrderView, DomainError> {
        (**self).create(draft)
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        (**self).list()
    }

    fn find(&self, id_or_code: &str) -> Result<Option<OrderView>, DomainError> {
        (**self).find(id_or_code)
    }

    fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<OrderView, DomainError> {
        (**self).update_status(id, status)
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        (**self).delete(id)
    }
}

impl<T: OrderRepository> OrderRepository for Arc<T> {
    fn create(&self, draft: OrderDraft) -> Result<OrderView, DomainError> {
        (**self).create(draft)
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        (**self).list()
    }

    fn find(&self, id_or_code: &str) -> Result<Option<OrderView>, DomainError> {
        (**self).find(id_or_code)
    }

    fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<OrderView, DomainError> {
        (**self).update_status(id, status)
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        (**self).delete(id)
    }
}

/// The external provider's reference for an amount to be charged.
/// `amount` is in the gateway's minor unit (paise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayOrder {
    pub gateway_order_id: String,
    pub amount: i64,
    pub currency: String,
}

/// Phase 1 of the payment contract. Phase 2 (the gateway's own checkout UI)
/// runs out of process and reports back through a confirmation callback.
pub trait PaymentGateway: Send + Sync {
    /// Registers an amount to charge with the gateway. `amount_rupees` is in
    /// whole rupees; the implementation converts to minor units.
    fn create_order(
        &self,
        amount_rupees: i64,
        currency: &str,
        receipt: &str,
    ) -> impl Future<Output = Result<GatewayOrder, DomainError>> + Send;
}

impl<T: PaymentGateway> PaymentGateway for &T {
    fn create_order(
        &self,
        amount_rupees: i64,
        currency: &str,
        receipt: &str,
    ) -> impl Future<Output = Result<GatewayOrder, DomainError>> + Send {
        (**self).create_order(amount_rupees, currency, receipt)
    }
}
