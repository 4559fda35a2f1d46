//! Order tracking read path: polls the record store on a fixed interval and
//! hands each snapshot to the consumer. Polling stops when the consumer goes
//! away or the order reaches a terminal status.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::domain::ports::OrderRepository;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Spawns a poll loop for one order. The returned receiver yields a snapshot
/// per tick; dropping it tears the view down and no further requests are
/// issued. An unknown id/code yields a single `NotFound` and stops. Transient
/// store errors are skipped; the next tick is the only retry.
pub fn watch_order<R>(
    repo: R,
    id_or_code: String,
    interval: Duration,
) -> mpsc::Receiver<Result<OrderView, DomainError>>
where
    R: OrderRepository + 'static,
{
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        loop {
            match repo.find(&id_or_code) {
                Ok(Some(order)) => {
                    let terminal = order.status.is_terminal();
                    if tx.send(Ok(order)).await.is_err() {
                        break;
                    }
                    if terminal {
                        break;
                    }
                }
                Ok(None) => {
                    let _ = tx.send(Err(DomainError::NotFound)).await;
                    break;
                }
                Err(e) => {
                    log::warn!("tracking poll for {id_or_code} failed: {e}");
                }
            }
            tokio::time::sleep(interval).await;
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::order::{
        CustomerInfo, OrderDraft, OrderStatus, OrderView, PaymentMethod, PaymentStatus,
        ShippingMethod,
    };

    /// Serves a scripted sequence of statuses for a single order, staying on
    /// the last one once the script runs out.
    struct ScriptedRepo {
        code: String,
        script: Mutex<VecDeque<OrderStatus>>,
        last: Mutex<OrderStatus>,
        polls: AtomicUsize,
    }

    impl ScriptedRepo {
        fn new(code: &str, script: Vec<OrderStatus>) -> Self {
            Self {
                code: code.to_string(),
                script: Mutex::new(script.into()),
                last: Mutex::new(OrderStatus::Confirmed),
                polls: AtomicUsize::new(0),
            }
        }

        fn polls(&self) -> usize {
            self.polls.load(Ordering::SeqCst)
        }

        fn view(&self, status: OrderStatus) -> OrderView {
            OrderView {
                id: Uuid::new_v4(),
                order_code: self.code.clone(),
                items: vec![],
                subtotal: 205,
                shipping: 0,
                total: 205,
                customer: CustomerInfo {
                    name: "Asha Rao".to_string(),
                    mobile: "9876543210".to_string(),
                    address: "12 Lake View Road".to_string(),
                    pincode: "600042".to_string(),
                    landmark: String::new(),
                    state: "Tamil Nadu".to_string(),
                    city: "Chennai".to_string(),
                },
                shipping_method: ShippingMethod::Standard,
                payment_method: PaymentMethod::Upi,
                status,
                payment_status: PaymentStatus::Paid,
                payment_id: Some("pay_x".to_string()),
                created_at: Utc::now(),
            }
        }
    }

    impl OrderRepository for ScriptedRepo {
        fn create(&self, _draft: OrderDraft) -> Result<OrderView, DomainError> {
            unimplemented!("not exercised by tracking")
        }

        fn list(&self) -> Result<Vec<OrderView>, DomainError> {
            unimplemented!("not exercised by tracking")
        }

        fn find(&self, id_or_code: &str) -> Result<Option<OrderView>, DomainError> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            if id_or_code != self.code {
                return Ok(None);
            }
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.script.lock().unwrap().pop_front() {
                *last = next;
            }
            Ok(Some(self.view(*last)))
        }

        fn update_status(
            &self,
            _id: Uuid,
            _status: OrderStatus,
        ) -> Result<OrderView, DomainError> {
            unimplemented!("not exercised by tracking")
        }

        fn delete(&self, _id: Uuid) -> Result<(), DomainError> {
            unimplemented!("not exercised by tracking")
        }
    }

    #[tokio::test]
    async fn yields_snapshots_until_terminal_status() {
        let repo = Arc::new(ScriptedRepo::new(
            "ORD123456",
            vec![
                OrderStatus::Confirmed,
                OrderStatus::Shipped,
                OrderStatus::Delivered,
            ],
        ));

        let mut rx = watch_order(
            Arc::clone(&repo),
            "ORD123456".to_string(),
            Duration::from_millis(5),
        );

        let mut seen = vec![];
        while let Some(snapshot) = rx.recv().await {
            seen.push(snapshot.expect("order exists").status);
        }

        assert_eq!(
            seen,
            vec![
                OrderStatus::Confirmed,
                OrderStatus::Shipped,
                OrderStatus::Delivered
            ]
        );
        assert_eq!(repo.polls(), 3, "polling stops at the terminal snapshot");
    }

    #[tokio::test]
    async fn unknown_order_reports_not_found_once() {
        let repo = Arc::new(ScriptedRepo::new("ORD123456", vec![]));

        let mut rx = watch_order(repo, "ORD999999".to_string(), Duration::from_millis(5));

        let first = rx.recv().await.expect("one message expected");
        assert!(matches!(first, Err(DomainError::NotFound)));
        assert!(rx.recv().await.is_none(), "channel closes after NotFound");
    }

    #[tokio::test]
    async fn dropping_the_receiver_stops_polling() {
        let repo = Arc::new(ScriptedRepo::new(
            "ORD123456",
            vec![OrderStatus::Confirmed],
        ));

        let mut rx = watch_order(
            Arc::clone(&repo),
            "ORD123456".to_string(),
            Duration::from_millis(5),
        );
        let _ = rx.recv().await.expect("first snapshot");
        drop(rx);

        tokio::time::sleep(Duration::from_millis(40)).await;
        let polls_after_drop = repo.polls();
        tokio::time::sleep(Duration::from_millis(40)).await;
        // At most one in-flight tick can land after the drop.
        assert!(repo.polls() <= polls_after_drop + 1);
    }
}
